//! Once-per-second fasting countdown.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use kalkyl_core::calculations::{CalculationError, FastingInput, FastingStatus};

pub const TICK: Duration = Duration::from_secs(1);

/// How a countdown ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickerOutcome {
    /// The goal was reached; `ticks` includes the final one.
    Completed { ticks: u64 },
    /// `shutdown` resolved first.
    Cancelled { ticks: u64 },
}

/// Recomputes the fasting status every [`TICK`] and hands it to `on_tick`
/// until the goal is reached or `shutdown` resolves.
///
/// An unset start is pinned to the first `clock()` reading, so every tick
/// measures from the same instant. The first tick fires immediately.
///
/// # Errors
///
/// Propagates [`FastingInput::status`] errors, i.e. a zero-hour goal.
pub async fn run_fasting<C, F, S>(
    input: FastingInput,
    mut clock: C,
    mut on_tick: F,
    shutdown: S,
) -> Result<TickerOutcome, CalculationError>
where
    C: FnMut() -> DateTime<Utc>,
    F: FnMut(&FastingStatus),
    S: Future<Output = ()>,
{
    let plan = input.started_at(clock());
    debug!(hours = plan.hours, start = ?plan.start, "fasting countdown started");

    let mut interval = tokio::time::interval(TICK);
    tokio::pin!(shutdown);
    let mut ticks = 0u64;

    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                info!(ticks, "fasting countdown cancelled");
                return Ok(TickerOutcome::Cancelled { ticks });
            }

            _ = interval.tick() => {
                let status = plan.status(clock())?;
                ticks += 1;
                on_tick(&status);

                if status.completed {
                    info!(ticks, end = %status.end, "fasting goal reached");
                    return Ok(TickerOutcome::Completed { ticks });
                }
            }
        }
    }
}
