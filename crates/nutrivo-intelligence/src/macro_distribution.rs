// ABOUTME: Share of macro-derived energy contributed by protein, carbs, and fat
// ABOUTME: Shown next to a plan after adjustment so coaches can check the balance held
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

use nutrivo_core::constants::nutrition::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use nutrivo_core::models::MacroTotals;
use serde::{Deserialize, Serialize};

use crate::rounding::round_to_decimals;

const DISTRIBUTION_DECIMALS: u8 = 1;

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    /// Protein as percentage of macro energy
    pub protein_percent: f64,
    /// Carbohydrates as percentage of macro energy
    pub carbs_percent: f64,
    /// Fat as percentage of macro energy
    pub fat_percent: f64,
}

/// Energy split across the three macros, using 4/4/9 kcal per gram.
///
/// Missing macros count as zero. The stated calorie value is ignored since
/// it often includes fibre or alcohol the macros do not carry. Returns
/// `None` when the macros carry no energy.
#[must_use]
pub fn macro_distribution(macros: &MacroTotals) -> Option<MacroDistribution> {
    let protein_kcal = macros.protein.unwrap_or(0.0) * KCAL_PER_GRAM_PROTEIN;
    let carbs_kcal = macros.carbs.unwrap_or(0.0) * KCAL_PER_GRAM_CARBS;
    let fat_kcal = macros.fats.unwrap_or(0.0) * KCAL_PER_GRAM_FAT;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

    if !total_kcal.is_finite() || total_kcal <= 0.0 {
        return None;
    }

    let share = |kcal: f64| round_to_decimals(kcal / total_kcal * 100.0, DISTRIBUTION_DECIMALS);
    Some(MacroDistribution {
        protein_percent: share(protein_kcal),
        carbs_percent: share(carbs_kcal),
        fat_percent: share(fat_kcal),
    })
}
