// ABOUTME: Plan adjustment configuration: rounding precision per macro dimension
// ABOUTME: Calories round to whole kcal and gram macros to one decimal by default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

use nutrivo_core::constants::nutrition::{CALORIE_DECIMALS, MACRO_DECIMALS, MAX_DECIMALS};
use nutrivo_core::models::MacroDimension;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Rounding applied to values produced by a plan adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanAdjustmentConfig {
    /// Decimal places kept on calorie values
    pub calorie_decimals: u8,
    /// Decimal places kept on protein, carb, and fat values
    pub macro_decimals: u8,
}

impl Default for PlanAdjustmentConfig {
    fn default() -> Self {
        Self {
            calorie_decimals: CALORIE_DECIMALS,
            macro_decimals: MACRO_DECIMALS,
        }
    }
}

impl PlanAdjustmentConfig {
    /// Decimal places for a given dimension
    #[must_use]
    pub const fn decimals_for(&self, dimension: MacroDimension) -> u8 {
        match dimension {
            MacroDimension::Calories => self.calorie_decimals,
            MacroDimension::Protein | MacroDimension::Carbs | MacroDimension::Fats => {
                self.macro_decimals
            }
        }
    }

    /// Validate rounding precision
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if either precision exceeds the maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calorie_decimals > MAX_DECIMALS || self.macro_decimals > MAX_DECIMALS {
            return Err(ConfigError::ValueOutOfRange(format!(
                "Rounding precision must be at most {MAX_DECIMALS} decimal places"
            )));
        }
        Ok(())
    }
}
