//! Body mass index (BMI-kalkylator).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CalculationError;
use super::common::round_one;
use crate::share::{ShareParams, ShareState};

const UNDERWEIGHT_BELOW: Decimal = Decimal::from_parts(185, 0, 0, false, 1);
const OVERWEIGHT_FROM: Decimal = Decimal::from_parts(25, 0, 0, false, 0);
const OBESE_FROM: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
const NORMAL_UPPER: Decimal = Decimal::from_parts(249, 0, 0, false, 1);

/// WHO weight classes for adults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiClass {
    pub fn from_bmi(bmi: Decimal) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < OVERWEIGHT_FROM {
            Self::Normal
        } else if bmi < OBESE_FROM {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Undervikt",
            Self::Normal => "Normalvikt",
            Self::Overweight => "Övervikt",
            Self::Obese => "Fetma",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight in kilograms.
    pub weight: Decimal,
    /// Height in centimetres.
    pub height: Decimal,
}

impl Default for BmiInput {
    fn default() -> Self {
        Self {
            weight: Decimal::from(70),
            height: Decimal::from(175),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI rounded to one decimal.
    pub bmi: Decimal,
    pub class: BmiClass,
    /// Weight range (kg) that gives a normal BMI at this height.
    pub normal_weight_min: Decimal,
    pub normal_weight_max: Decimal,
}

impl BmiInput {
    /// # Errors
    ///
    /// Returns [`CalculationError::NotPositive`] when weight or height is
    /// zero or negative (or too small to square), and
    /// [`CalculationError::Overflow`] when the result leaves the decimal range.
    pub fn calculate(&self) -> Result<BmiResult, CalculationError> {
        if self.weight <= Decimal::ZERO {
            return Err(CalculationError::NotPositive { field: "weight" });
        }
        if self.height <= Decimal::ZERO {
            return Err(CalculationError::NotPositive { field: "height" });
        }

        let metres = self.height / Decimal::ONE_HUNDRED;
        let squared = metres.checked_mul(metres).ok_or(CalculationError::Overflow)?;
        // Heights below the decimal precision square to zero.
        if squared.is_zero() {
            return Err(CalculationError::NotPositive { field: "height" });
        }
        let bmi = self
            .weight
            .checked_div(squared)
            .map(round_one)
            .ok_or(CalculationError::Overflow)?;

        let scaled = |limit: Decimal| {
            limit
                .checked_mul(squared)
                .map(round_one)
                .ok_or(CalculationError::Overflow)
        };

        Ok(BmiResult {
            bmi,
            class: BmiClass::from_bmi(bmi),
            normal_weight_min: scaled(UNDERWEIGHT_BELOW)?,
            normal_weight_max: scaled(NORMAL_UPPER)?,
        })
    }
}

impl ShareState for BmiInput {
    const CALCULATOR_ID: &'static str = "bmi";
    const MARKER: &'static str = "weight";

    fn write_params(
        &self,
        params: &mut ShareParams,
    ) {
        params
            .push("weight", self.weight)
            .push("height", self.height);
    }

    fn read_params(params: &ShareParams) -> Self {
        let defaults = Self::default();
        Self {
            weight: params.decimal_or("weight", defaults.weight),
            height: params.decimal_or("height", defaults.height),
        }
    }
}
