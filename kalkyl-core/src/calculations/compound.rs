//! Compound interest with monthly savings (Ränta på ränta).
//!
//! Interest is compounded monthly on the balance at the start of each
//! month; the monthly saving is deposited at the end of the month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationError;
use super::common::{check_years, monthly_rate, round_ore};
use crate::share::{ShareParams, ShareState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundInput {
    pub start_amount: i64,
    pub monthly_saving: i64,
    pub years: u32,
    /// Expected yearly return in percent.
    pub rate: Decimal,
}

impl Default for CompoundInput {
    fn default() -> Self {
        Self {
            start_amount: 10_000,
            monthly_saving: 1_000,
            years: 10,
            rate: Decimal::from(7),
        }
    }
}

/// Balance at the end of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: u32,
    pub deposits: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundResult {
    pub final_balance: Decimal,
    pub total_deposits: Decimal,
    pub total_return: Decimal,
    pub yearly: Vec<YearSummary>,
}

impl CompoundInput {
    /// # Errors
    ///
    /// Returns [`CalculationError`] for negative amounts or rate, a period
    /// beyond [`MAX_YEARS`](super::common::MAX_YEARS), or when the balance
    /// overflows.
    pub fn calculate(&self) -> Result<CompoundResult, CalculationError> {
        if self.start_amount < 0 {
            return Err(CalculationError::Negative {
                field: "startAmount",
            });
        }
        if self.monthly_saving < 0 {
            return Err(CalculationError::Negative {
                field: "monthlySaving",
            });
        }
        if self.rate < Decimal::ZERO {
            return Err(CalculationError::Negative { field: "rate" });
        }

        let years = check_years("years", self.years)?;
        let rate = monthly_rate(self.rate);
        let saving = Decimal::from(self.monthly_saving);
        let mut balance = Decimal::from(self.start_amount);
        let mut deposits = balance;
        let mut yearly = Vec::with_capacity(years as usize);

        for year in 1..=years {
            for _ in 0..12 {
                let interest = balance.checked_mul(rate).ok_or(CalculationError::Overflow)?;
                balance = balance
                    .checked_add(interest)
                    .and_then(|b| b.checked_add(saving))
                    .ok_or(CalculationError::Overflow)?;
                deposits += saving;
            }
            yearly.push(YearSummary {
                year,
                deposits,
                balance: round_ore(balance),
            });
        }

        let final_balance = round_ore(balance);
        Ok(CompoundResult {
            final_balance,
            total_deposits: deposits,
            total_return: final_balance - deposits,
            yearly,
        })
    }
}

impl ShareState for CompoundInput {
    const CALCULATOR_ID: &'static str = "compound-interest";
    const MARKER: &'static str = "startAmount";

    fn write_params(
        &self,
        params: &mut ShareParams,
    ) {
        params
            .push("startAmount", self.start_amount)
            .push("monthlySaving", self.monthly_saving)
            .push("years", self.years)
            .push("rate", self.rate);
    }

    fn read_params(params: &ShareParams) -> Self {
        let defaults = Self::default();
        Self {
            start_amount: params.get_or("startAmount", defaults.start_amount),
            monthly_saving: params.get_or("monthlySaving", defaults.monthly_saving),
            years: params.get_or("years", defaults.years),
            rate: params.decimal_or("rate", defaults.rate),
        }
    }
}
