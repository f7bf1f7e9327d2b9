// ABOUTME: Intelligence configuration aggregate for check-in scoring and plan adjustment
// ABOUTME: Loads defaults, applies environment overrides, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

//! Intelligence Configuration
//!
//! Callers own their configuration: load it once at startup with
//! [`IntelligenceConfig::load`] and hand it to the calculators, or use
//! [`IntelligenceConfig::default`] for the published scoring table.

/// Check-in scoring tables
pub mod checkin_scoring;
/// Configuration error types
pub mod error;
/// Plan adjustment rounding
pub mod plan_adjustment;

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use checkin_scoring::{CheckinScoringConfig, CountBucket, SubstringRule};
pub use error::ConfigError;
pub use plan_adjustment::PlanAdjustmentConfig;

/// Configuration for the scoring and adjustment engines
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Check-in scoring tables
    pub checkin_scoring: CheckinScoringConfig,
    /// Plan adjustment rounding
    pub plan_adjustment: PlanAdjustmentConfig,
}

impl IntelligenceConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or the resulting
    /// configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config = config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Validate every subsystem
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checkin_scoring.validate()?;
        self.plan_adjustment.validate()
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Check-in scoring overrides
        Self::apply_env_var(
            "NUTRIVO_CHECKIN_NONE_TOKEN",
            &mut self.checkin_scoring.none_token,
        )?;
        Self::apply_env_var(
            "NUTRIVO_CHECKIN_REST_FALLBACK",
            &mut self.checkin_scoring.rest_fallback,
        )?;
        Self::apply_env_var(
            "NUTRIVO_CHECKIN_WATER_FALLBACK",
            &mut self.checkin_scoring.water_fallback,
        )?;
        Self::apply_env_var(
            "NUTRIVO_CHECKIN_SLEEP_FALLBACK",
            &mut self.checkin_scoring.sleep_fallback,
        )?;
        Self::apply_env_var(
            "NUTRIVO_CHECKIN_RATING_FALLBACK",
            &mut self.checkin_scoring.rating_fallback,
        )?;

        // Plan adjustment overrides
        Self::apply_env_var(
            "NUTRIVO_PLAN_CALORIE_DECIMALS",
            &mut self.plan_adjustment.calorie_decimals,
        )?;
        Self::apply_env_var(
            "NUTRIVO_PLAN_MACRO_DECIMALS",
            &mut self.plan_adjustment.macro_decimals,
        )?;

        Ok(self)
    }
}
