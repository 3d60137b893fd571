//! Rounding helpers shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

use super::CalculationError;

/// Longest saving or repayment period, in years.
pub const MAX_YEARS: u32 = 100;

/// Rejects periods longer than [`MAX_YEARS`].
pub fn check_years(
    field: &'static str,
    years: u32,
) -> Result<u32, CalculationError> {
    if years > MAX_YEARS {
        return Err(CalculationError::TooLarge {
            field,
            max: MAX_YEARS,
        });
    }
    Ok(years)
}

/// Rounds to whole öre (two decimals), half away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use kalkyl_core::calculations::common::round_ore;
///
/// assert_eq!(round_ore(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_ore(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_ore(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_ore(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to one decimal, half away from zero.
pub fn round_one(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a yearly percentage (e.g. `8.44`) to a monthly fraction.
pub fn monthly_rate(yearly_percent: Decimal) -> Decimal {
    yearly_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_ore_rounds_down_below_midpoint() {
        assert_eq!(round_ore(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_ore_rounds_up_at_midpoint() {
        assert_eq!(round_ore(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_ore_handles_large_values() {
        assert_eq!(round_ore(dec!(999999.999)), dec!(1000000.00));
    }

    #[test]
    fn round_one_rounds_half_away_from_zero() {
        assert_eq!(round_one(dec!(22.85)), dec!(22.9));
        assert_eq!(round_one(dec!(22.84)), dec!(22.8));
    }

    #[test]
    fn check_years_accepts_up_to_limit() {
        assert_eq!(check_years("years", MAX_YEARS), Ok(MAX_YEARS));
        assert_eq!(
            check_years("years", MAX_YEARS + 1),
            Err(CalculationError::TooLarge {
                field: "years",
                max: MAX_YEARS
            })
        );
    }

    #[test]
    fn monthly_rate_divides_by_hundred_and_twelve() {
        assert_eq!(monthly_rate(dec!(12)), dec!(0.01));
        assert_eq!(monthly_rate(Decimal::ZERO), Decimal::ZERO);
    }
}
