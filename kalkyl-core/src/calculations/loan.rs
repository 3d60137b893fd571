//! Loan cost calculator (Lånekalkylator).
//!
//! Straight annuity loan with monthly payments. Fees are added on top of
//! the interest to give the total cost of the credit.
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Monthly rate = yearly rate / 100 / 12 |
//! | 2    | Number of payments = years × 12 |
//! | 3    | Monthly payment = P·r·(1+r)ⁿ / ((1+r)ⁿ − 1), or P/n at 0 % |
//! | 4    | Total interest = monthly payment × n − P |
//! | 5    | Total cost = total interest + setup fee + annual fee × years |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use kalkyl_core::calculations::LoanInput;
//!
//! let result = LoanInput::default().calculate().unwrap();
//!
//! assert_eq!(result.monthly_payment, dec!(1722.23));
//! assert_eq!(result.total_cost, dec!(56000.84));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use super::CalculationError;
use super::common::{check_years, monthly_rate, round_ore};
use crate::share::{ShareParams, ShareState};

/// Form values of the loan calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Borrowed amount in kronor.
    pub loan_amount: i64,
    /// Repayment period in whole years.
    pub years: u32,
    /// Nominal yearly interest in percent, e.g. `8.44`.
    pub interest_rate: Decimal,
    /// One-off setup fee (uppläggningsavgift) in kronor.
    pub setup_fee: i64,
    /// Yearly administration fee (aviavgift × 12) in kronor.
    pub annual_fee: i64,
}

impl Default for LoanInput {
    fn default() -> Self {
        Self {
            loan_amount: 130_000,
            years: 9,
            interest_rate: Decimal::new(844, 2),
            setup_fee: 0,
            annual_fee: 0,
        }
    }
}

/// Outcome of [`LoanInput::calculate`], amounts rounded to öre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub number_of_payments: u32,
    /// Annuity payment excluding fees.
    pub monthly_payment: Decimal,
    /// Annuity payment plus the monthly share of the annual fee.
    pub monthly_cost: Decimal,
    pub total_interest: Decimal,
    pub total_fees: Decimal,
    /// Interest plus fees: what the credit costs on top of the principal.
    pub total_cost: Decimal,
    /// Principal plus total cost.
    pub total_repayment: Decimal,
}

impl LoanInput {
    /// # Errors
    ///
    /// Returns [`CalculationError`] if the amount or period is not
    /// positive, the period exceeds [`MAX_YEARS`](super::common::MAX_YEARS),
    /// the rate or a fee is negative, or the arithmetic overflows.
    pub fn calculate(&self) -> Result<LoanResult, CalculationError> {
        if self.loan_amount <= 0 {
            return Err(CalculationError::NotPositive {
                field: "loanAmount",
            });
        }
        if self.years == 0 {
            return Err(CalculationError::NotPositive { field: "years" });
        }
        if self.interest_rate < Decimal::ZERO {
            return Err(CalculationError::Negative {
                field: "interestRate",
            });
        }
        if self.setup_fee < 0 {
            return Err(CalculationError::Negative { field: "setupFee" });
        }
        if self.annual_fee < 0 {
            return Err(CalculationError::Negative { field: "annualFee" });
        }

        let years = check_years("years", self.years)?;
        let principal = Decimal::from(self.loan_amount);
        let payments = years * 12;
        let n = Decimal::from(payments);

        let monthly_payment = round_ore(self.annuity(principal, payments)?);
        let total_paid = round_ore(monthly_payment.checked_mul(n).ok_or(CalculationError::Overflow)?);
        let total_interest = total_paid - principal;

        let annual_fee = Decimal::from(self.annual_fee);
        let total_fees = Decimal::from(self.setup_fee) + annual_fee * Decimal::from(years);
        let monthly_cost = monthly_payment
            .checked_add(annual_fee / Decimal::from(12))
            .map(round_ore)
            .ok_or(CalculationError::Overflow)?;
        let total_cost = total_interest
            .checked_add(total_fees)
            .map(round_ore)
            .ok_or(CalculationError::Overflow)?;
        let total_repayment = principal.checked_add(total_cost).ok_or(CalculationError::Overflow)?;

        Ok(LoanResult {
            number_of_payments: payments,
            monthly_payment,
            monthly_cost,
            total_interest,
            total_fees,
            total_cost,
            total_repayment,
        })
    }

    /// Unrounded monthly annuity payment.
    fn annuity(
        &self,
        principal: Decimal,
        payments: u32,
    ) -> Result<Decimal, CalculationError> {
        let rate = monthly_rate(self.interest_rate);
        if rate.is_zero() {
            return Ok(principal / Decimal::from(payments));
        }

        let growth = (Decimal::ONE + rate)
            .checked_powi(i64::from(payments))
            .ok_or(CalculationError::Overflow)?;
        let numerator = principal
            .checked_mul(rate)
            .and_then(|v| v.checked_mul(growth))
            .ok_or(CalculationError::Overflow)?;

        numerator
            .checked_div(growth - Decimal::ONE)
            .ok_or(CalculationError::Overflow)
    }
}

impl ShareState for LoanInput {
    const CALCULATOR_ID: &'static str = "loan";
    const MARKER: &'static str = "loanAmount";

    fn write_params(
        &self,
        params: &mut ShareParams,
    ) {
        params
            .push("loanAmount", self.loan_amount)
            .push("years", self.years)
            .push("interestRate", self.interest_rate)
            .push("setupFee", self.setup_fee)
            .push("annualFee", self.annual_fee);
    }

    fn read_params(params: &ShareParams) -> Self {
        let defaults = Self::default();
        Self {
            loan_amount: params.get_or("loanAmount", defaults.loan_amount),
            years: params.get_or("years", defaults.years),
            interest_rate: params.decimal_or("interestRate", defaults.interest_rate),
            setup_fee: params.get_or("setupFee", defaults.setup_fee),
            annual_fee: params.get_or("annualFee", defaults.annual_fee),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input() -> LoanInput {
        LoanInput::default()
    }

    // =========================================================================
    // calculate
    // =========================================================================

    #[test]
    fn default_loan_monthly_payment() {
        let result = input().calculate().unwrap();

        // 130000 · 0.0070333 · 1.0070333^108 / (1.0070333^108 − 1) ≈ 1722.2298
        assert_eq!(result.number_of_payments, 108);
        assert_eq!(result.monthly_payment, dec!(1722.23));
    }

    #[test]
    fn default_loan_totals() {
        let result = input().calculate().unwrap();

        // 1722.23 · 108 = 186000.84
        assert_eq!(result.total_interest, dec!(56000.84));
        assert_eq!(result.total_fees, dec!(0));
        assert_eq!(result.total_cost, dec!(56000.84));
        assert_eq!(result.total_repayment, dec!(186000.84));
    }

    #[test]
    fn fees_are_added_to_cost() {
        let loan = LoanInput {
            setup_fee: 495,
            annual_fee: 540,
            ..input()
        };

        let result = loan.calculate().unwrap();

        // 495 + 540 · 9 = 5355
        assert_eq!(result.total_fees, dec!(5355));
        assert_eq!(result.total_cost, dec!(61355.84));
        assert_eq!(result.monthly_cost, dec!(1767.23));
    }

    #[test]
    fn zero_rate_divides_evenly() {
        let loan = LoanInput {
            loan_amount: 12_000,
            years: 1,
            interest_rate: Decimal::ZERO,
            ..input()
        };

        let result = loan.calculate().unwrap();

        assert_eq!(result.monthly_payment, dec!(1000.00));
        assert_eq!(result.total_interest, dec!(0.00));
    }

    #[test]
    fn rejects_zero_amount_and_period() {
        let no_amount = LoanInput {
            loan_amount: 0,
            ..input()
        };
        let no_years = LoanInput {
            years: 0,
            ..input()
        };

        assert_eq!(
            no_amount.calculate(),
            Err(CalculationError::NotPositive {
                field: "loanAmount"
            })
        );
        assert_eq!(
            no_years.calculate(),
            Err(CalculationError::NotPositive { field: "years" })
        );
    }

    #[test]
    fn rejects_negative_rate() {
        let loan = LoanInput {
            interest_rate: dec!(-1),
            ..input()
        };

        assert_eq!(
            loan.calculate(),
            Err(CalculationError::Negative {
                field: "interestRate"
            })
        );
    }

    #[test]
    fn rejects_period_beyond_limit() {
        let params = ShareParams::from_query("loanAmount=1000&years=400000000&interestRate=0");

        assert_eq!(
            LoanInput::read_params(&params).calculate(),
            Err(CalculationError::TooLarge {
                field: "years",
                max: 100
            })
        );
    }

    #[test]
    fn extreme_rate_is_an_overflow() {
        let loan = LoanInput {
            loan_amount: i64::MAX,
            years: 100,
            interest_rate: Decimal::MAX,
            ..input()
        };

        assert_eq!(loan.calculate(), Err(CalculationError::Overflow));
    }

    // =========================================================================
    // share params
    // =========================================================================

    #[test]
    fn writes_keys_in_url_order() {
        let mut params = ShareParams::new();
        input().write_params(&mut params);

        let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();

        assert_eq!(keys, vec!["loanAmount", "years", "interestRate", "setupFee", "annualFee"]);
    }

    #[test]
    fn malformed_years_falls_back_to_default() {
        let params = ShareParams::from_query("loanAmount=200000&years=abc&interestRate=5");

        let loan = LoanInput::read_params(&params);

        assert_eq!(loan.loan_amount, 200_000);
        assert_eq!(loan.years, 9);
        assert_eq!(loan.interest_rate, dec!(5));
    }

    #[test]
    fn interest_rate_accepts_decimal_comma() {
        let params = ShareParams::from_query("loanAmount=1&interestRate=6%2C5");

        assert_eq!(LoanInput::read_params(&params).interest_rate, dec!(6.5));
    }
}
