// ABOUTME: Application constants for check-in scoring and diet-plan arithmetic
// ABOUTME: Score bounds, form tokens, energy densities, and rounding precision
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

//! Application-wide constants organized by domain

/// Check-in scoring bounds and form conventions
pub mod checkin {
    /// Lowest value any sub-score can take
    pub const MIN_SUB_SCORE: f64 = 0.0;

    /// Highest value any sub-score can take
    pub const MAX_SUB_SCORE: f64 = 10.0;

    /// Number of sub-scores in a check-in score record
    pub const SUB_SCORE_COUNT: usize = 9;

    /// Highest possible total (`SUB_SCORE_COUNT` x `MAX_SUB_SCORE`)
    pub const MAX_TOTAL_SCORE: f64 = 90.0;

    /// Midpoint score used when a field carries no usable signal
    pub const NEUTRAL_SCORE: f64 = 5.0;

    /// Literal the intake form uses for "no sessions"
    pub const NONE_TOKEN: &str = "Nenhum";

    /// Decimal places kept in `percentual_aproveitamento`
    pub const PERCENTAGE_DECIMALS: u8 = 1;
}

/// Nutrition arithmetic constants
pub mod nutrition {
    /// Energy density of protein (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Energy density of carbohydrate (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Energy density of fat (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

    /// Calories are rounded to whole numbers
    pub const CALORIE_DECIMALS: u8 = 0;

    /// Protein, carbs and fats are rounded to one decimal place
    pub const MACRO_DECIMALS: u8 = 1;

    /// Largest rounding precision accepted by configuration
    pub const MAX_DECIMALS: u8 = 4;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Default service name
    pub const NUTRIVO: &str = "nutrivo";
}
