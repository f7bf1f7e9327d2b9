// ABOUTME: Check-in scoring and proportional diet-plan adjustment engines
// ABOUTME: Pure, synchronous calculations over nutrivo-core data contracts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

#![deny(unsafe_code)]

//! # Nutrivo Intelligence
//!
//! Deterministic engines with no I/O and no shared mutable state. Every call
//! borrows its input and returns freshly allocated output, so the engines
//! can be invoked concurrently from any number of requests.
//!
//! - [`checkin_scoring`]: nine 0-10 sub-scores, total, and percentage for a check-in
//! - [`checkin_summary`]: averages and trend over a scored history
//! - [`plan_adjustment`]: percentage and target-calorie plan rescaling
//! - [`macro_distribution`]: protein/carbs/fat energy split

/// Check-in score calculator
pub mod checkin_scoring;
/// Summaries over scored check-in history
pub mod checkin_summary;
/// Engine configuration
pub mod config;
/// Macro energy distribution
pub mod macro_distribution;
/// Proportional diet-plan adjuster
pub mod plan_adjustment;
/// Decimal rounding helpers
pub mod rounding;

pub use checkin_scoring::{calculate_score, CheckinScoreCalculator};
pub use checkin_summary::{summarize_checkins, CheckinSummary};
pub use config::IntelligenceConfig;
pub use macro_distribution::{macro_distribution, MacroDistribution};
pub use plan_adjustment::{
    adjust_calories_only, adjust_plan, AdjustmentError, ProportionalPlanAdjuster,
};
