//! Calculators whose inputs can be shared as links.
//!
//! Each calculator is a pure function from an input struct to a result
//! struct. The input structs implement [`crate::share::ShareState`] so a
//! page can be restored from its share URL.

pub mod bmi;
pub mod common;
pub mod compound;
pub mod fasting;
pub mod loan;

use thiserror::Error;

pub use bmi::{BmiClass, BmiInput, BmiResult};
pub use compound::{CompoundInput, CompoundResult, YearSummary};
pub use fasting::{FastingInput, FastingPhase, FastingStatus};
pub use loan::{LoanInput, LoanResult};

/// Inputs a calculator cannot produce a result for.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A field that must be strictly positive was zero or negative.
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    /// A field that must not be negative was negative.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    /// A field exceeded the largest value the calculator accepts.
    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: u32 },

    /// The arithmetic overflowed the decimal range.
    #[error("calculation overflowed")]
    Overflow,
}
