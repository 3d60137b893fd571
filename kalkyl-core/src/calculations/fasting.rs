//! Intermittent fasting timer (Fastekalkylator).
//!
//! The timer itself is a pure function of the plan and the current time;
//! a caller that wants a live countdown recomputes it once per second.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationError;
use super::common::round_one;
use crate::share::{ShareParams, ShareState};

/// Metabolic stage shown next to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FastingPhase {
    /// 0–4 h
    Digesting,
    /// 4–12 h
    BloodSugarFalling,
    /// 12–18 h
    KetosisStarting,
    /// 18 h and beyond
    FatBurning,
}

impl FastingPhase {
    pub fn from_elapsed(elapsed: Duration) -> Self {
        match elapsed.num_hours() {
            h if h < 4 => Self::Digesting,
            h if h < 12 => Self::BloodSugarFalling,
            h if h < 18 => Self::KetosisStarting,
            _ => Self::FatBurning,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Digesting => "Matsmältning",
            Self::BloodSugarFalling => "Blodsockret sjunker",
            Self::KetosisStarting => "Ketos börjar",
            Self::FatBurning => "Fettförbränning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastingInput {
    /// Fasting goal in hours, e.g. 16 for 16:8.
    pub hours: u32,
    /// When the fast started. `None` means "now" when the status is
    /// first computed.
    pub start: Option<DateTime<Utc>>,
}

impl Default for FastingInput {
    fn default() -> Self {
        Self {
            hours: 16,
            start: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastingStatus {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub elapsed: Duration,
    pub remaining: Duration,
    /// Share of the goal reached, 0–100 with one decimal.
    pub progress_percent: Decimal,
    pub phase: FastingPhase,
    pub completed: bool,
}

impl FastingInput {
    /// Pins an unset start to `now`, so later ticks measure from the
    /// same instant.
    pub fn started_at(
        mut self,
        now: DateTime<Utc>,
    ) -> Self {
        self.start.get_or_insert(now);
        self
    }

    /// # Errors
    ///
    /// Returns [`CalculationError::NotPositive`] when the goal is zero hours
    /// and [`CalculationError::Overflow`] when the end time falls outside the
    /// representable date range.
    pub fn status(
        &self,
        now: DateTime<Utc>,
    ) -> Result<FastingStatus, CalculationError> {
        if self.hours == 0 {
            return Err(CalculationError::NotPositive { field: "hours" });
        }

        let start = self.start.unwrap_or(now);
        let goal = Duration::hours(i64::from(self.hours));
        let end = start.checked_add_signed(goal).ok_or(CalculationError::Overflow)?;

        // A start in the future counts as not started yet.
        let elapsed = (now - start).clamp(Duration::zero(), goal);
        let remaining = goal - elapsed;

        let progress = Decimal::from(elapsed.num_seconds()) * Decimal::ONE_HUNDRED
            / Decimal::from(goal.num_seconds());

        Ok(FastingStatus {
            start,
            end,
            elapsed,
            remaining,
            progress_percent: round_one(progress),
            phase: FastingPhase::from_elapsed(elapsed),
            completed: remaining.is_zero(),
        })
    }
}

impl ShareState for FastingInput {
    const CALCULATOR_ID: &'static str = "fasting";
    const MARKER: &'static str = "hours";

    fn write_params(
        &self,
        params: &mut ShareParams,
    ) {
        params.push("hours", self.hours);
        if let Some(start) = self.start {
            params.push("start", start.to_rfc3339());
        }
    }

    fn read_params(params: &ShareParams) -> Self {
        let defaults = Self::default();
        let start = params
            .get("start")
            .and_then(|raw| match DateTime::parse_from_rfc3339(raw) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(e) => {
                    tracing::warn!(key = "start", value = raw, "ignoring malformed share value: {e}");
                    None
                }
            });

        Self {
            hours: params.get_or("hours", defaults.hours),
            start,
        }
    }
}

/// Formats a duration as `HH:MM:SS`, hours unbounded.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 20, 0, 0).unwrap()
    }

    fn plan() -> FastingInput {
        FastingInput {
            hours: 16,
            start: Some(start()),
        }
    }

    #[test]
    fn halfway_through_a_16_hour_fast() {
        let status = plan().status(start() + Duration::hours(8)).unwrap();

        assert_eq!(status.elapsed, Duration::hours(8));
        assert_eq!(status.remaining, Duration::hours(8));
        assert_eq!(status.progress_percent, dec!(50.0));
        assert_eq!(status.phase, FastingPhase::BloodSugarFalling);
        assert!(!status.completed);
        assert_eq!(status.end, start() + Duration::hours(16));
    }

    #[test]
    fn completes_at_goal_and_clamps_after() {
        let status = plan().status(start() + Duration::hours(20)).unwrap();

        assert_eq!(status.elapsed, Duration::hours(16));
        assert_eq!(status.remaining, Duration::zero());
        assert_eq!(status.progress_percent, dec!(100));
        assert!(status.completed);
    }

    #[test]
    fn future_start_has_not_begun() {
        let status = plan().status(start() - Duration::hours(1)).unwrap();

        assert_eq!(status.elapsed, Duration::zero());
        assert_eq!(status.phase, FastingPhase::Digesting);
    }

    #[test]
    fn started_at_keeps_existing_start() {
        let later = start() + Duration::hours(3);

        assert_eq!(plan().started_at(later).start, Some(start()));
        assert_eq!(FastingInput::default().started_at(later).start, Some(later));
    }

    #[test]
    fn rejects_zero_goal() {
        let input = FastingInput {
            hours: 0,
            start: None,
        };

        assert_eq!(
            input.status(start()),
            Err(CalculationError::NotPositive { field: "hours" })
        );
    }

    #[test]
    fn goal_beyond_date_range_is_an_overflow() {
        let params = ShareParams::from_query("hours=4000000000");

        let input = FastingInput::read_params(&params).started_at(start());

        assert_eq!(input.status(start()), Err(CalculationError::Overflow));
    }

    #[test]
    fn phase_boundaries() {
        assert_eq!(FastingPhase::from_elapsed(Duration::hours(12)), FastingPhase::KetosisStarting);
        assert_eq!(FastingPhase::from_elapsed(Duration::hours(18)), FastingPhase::FatBurning);
    }

    #[test]
    fn format_clock_pads_fields() {
        assert_eq!(format_clock(Duration::seconds(3_661)), "01:01:01");
        assert_eq!(format_clock(Duration::hours(16)), "16:00:00");
    }

    #[test]
    fn malformed_start_is_dropped() {
        let params = ShareParams::from_query("hours=18&start=igår");

        let input = FastingInput::read_params(&params);

        assert_eq!(input.hours, 18);
        assert_eq!(input.start, None);
    }
}
