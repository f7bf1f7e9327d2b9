// ABOUTME: Proportional diet-plan adjustment scaling totals, meals, and food lines
// ABOUTME: Quantities always scale; macro values scale per flag with optional reconciliation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

//! Proportional Plan Adjuster
//!
//! Rescales a diet plan by a signed percentage. Each macro dimension is
//! gated by its own flag at the plan, meal, and food-line level, while food
//! quantities are always multiplied since they are serving sizes rather
//! than macro values. With `maintain_ratios`, stated plan totals are
//! re-derived from the adjusted meals so the two levels cannot drift apart
//! through rounding.

use nutrivo_core::errors::{AppError, ErrorCode};
use nutrivo_core::models::{
    AdjustedPlan, AdjustmentSpec, DietPlan, FoodLine, MacroDimension, MacroTotals, Meal,
};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::config::intelligence::PlanAdjustmentConfig;
use crate::rounding::round_to_decimals;

/// Failure of a target-calorie adjustment
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AdjustmentError {
    /// The plan has no usable calorie total to compute a percentage from
    #[error("undefined adjustment base: plan total_calories is {total_calories:?}")]
    UndefinedAdjustmentBase {
        /// The plan's stated calorie total (absent or zero)
        total_calories: Option<f64>,
    },
}

impl From<AdjustmentError> for AppError {
    fn from(error: AdjustmentError) -> Self {
        let AdjustmentError::UndefinedAdjustmentBase { total_calories } = error;
        Self::new(ErrorCode::UndefinedAdjustmentBase, error.to_string())
            .with_details(json!({ "total_calories": total_calories }))
            .with_source(error)
    }
}

/// Multiplier for a signed percentage change
#[must_use]
pub fn multiplier_for(percentage: f64) -> f64 {
    1.0 + percentage / 100.0
}

/// Scales diet plans proportionally
#[derive(Debug, Clone, Default)]
pub struct ProportionalPlanAdjuster {
    config: PlanAdjustmentConfig,
}

impl ProportionalPlanAdjuster {
    /// Create an adjuster with the given rounding precision
    #[must_use]
    pub const fn new(config: PlanAdjustmentConfig) -> Self {
        Self { config }
    }

    /// Rounding precision in use
    #[must_use]
    pub const fn config(&self) -> &PlanAdjustmentConfig {
        &self.config
    }

    /// Return a rescaled copy of `plan`; the input is left untouched
    #[must_use]
    pub fn adjust_plan(&self, plan: &DietPlan, spec: &AdjustmentSpec) -> AdjustedPlan {
        let multiplier = multiplier_for(spec.percentage);

        let meals: Vec<Meal> = plan
            .meals
            .iter()
            .map(|meal| self.adjust_meal(meal, spec, multiplier))
            .collect();

        let mut adjusted = DietPlan {
            meals,
            ..DietPlan::default()
        };
        adjusted.set_totals(self.scale_macros(plan.totals(), spec, multiplier));

        if spec.maintain_ratios {
            self.reconcile_totals(&mut adjusted, spec);
        }

        debug!(
            percentage = spec.percentage,
            multiplier,
            meal_count = adjusted.meals.len(),
            maintain_ratios = spec.maintain_ratios,
            "Adjusted diet plan"
        );

        adjusted
    }

    /// Move the plan's calorie total to `target_calories`, scaling every macro
    ///
    /// # Errors
    ///
    /// Returns `AdjustmentError::UndefinedAdjustmentBase` if the plan's
    /// `total_calories` is absent or zero
    pub fn adjust_calories_only(
        &self,
        plan: &DietPlan,
        target_calories: f64,
    ) -> Result<AdjustedPlan, AdjustmentError> {
        let current = plan
            .total_calories
            .filter(|calories| *calories != 0.0)
            .ok_or(AdjustmentError::UndefinedAdjustmentBase {
                total_calories: plan.total_calories,
            })?;

        let percentage = (target_calories - current) / current * 100.0;
        debug!(current, target_calories, percentage, "Derived calorie adjustment");

        Ok(self.adjust_plan(plan, &AdjustmentSpec::all_macros(percentage)))
    }

    /// Scale the flagged, non-zero values of `macros`; everything else passes through
    #[must_use]
    pub fn scale_macros(
        &self,
        macros: MacroTotals,
        spec: &AdjustmentSpec,
        multiplier: f64,
    ) -> MacroTotals {
        let mut scaled = macros;
        for dimension in MacroDimension::ALL {
            if !spec.adjusts(dimension) {
                continue;
            }
            if let Some(value) = macros.get(dimension).filter(|value| *value != 0.0) {
                let decimals = self.config.decimals_for(dimension);
                scaled.set(
                    dimension,
                    Some(round_to_decimals(value * multiplier, decimals)),
                );
            }
        }
        scaled
    }

    fn adjust_meal(&self, meal: &Meal, spec: &AdjustmentSpec, multiplier: f64) -> Meal {
        let mut adjusted = Meal {
            name: meal.name.clone(),
            foods: meal
                .foods
                .iter()
                .map(|food| self.adjust_food(food, spec, multiplier))
                .collect(),
            ..Meal::default()
        };
        adjusted.set_macros(self.scale_macros(meal.macros(), spec, multiplier));
        adjusted
    }

    fn adjust_food(&self, food: &FoodLine, spec: &AdjustmentSpec, multiplier: f64) -> FoodLine {
        // Quantity is a serving size, not a macro: never gated, never rounded
        let mut adjusted = FoodLine {
            name: food.name.clone(),
            quantity: food.quantity * multiplier,
            calories: None,
            protein: None,
            carbs: None,
            fats: None,
        };
        adjusted.set_macros(self.scale_macros(food.macros(), spec, multiplier));
        adjusted
    }

    fn reconcile_totals(&self, plan: &mut DietPlan, spec: &AdjustmentSpec) {
        let meal_totals = plan.meal_totals();
        let mut totals = plan.totals();
        for dimension in MacroDimension::ALL {
            if !spec.adjusts(dimension) {
                continue;
            }
            if let Some(sum) = meal_totals.get(dimension) {
                let decimals = self.config.decimals_for(dimension);
                totals.set(dimension, Some(round_to_decimals(sum, decimals)));
            }
        }
        plan.set_totals(totals);
    }
}

/// Adjust a plan with the default rounding precision
#[must_use]
pub fn adjust_plan(plan: &DietPlan, spec: &AdjustmentSpec) -> AdjustedPlan {
    ProportionalPlanAdjuster::default().adjust_plan(plan, spec)
}

/// Move a plan to a calorie target with the default rounding precision
///
/// # Errors
///
/// Returns `AdjustmentError::UndefinedAdjustmentBase` if the plan's
/// `total_calories` is absent or zero
pub fn adjust_calories_only(
    plan: &DietPlan,
    target_calories: f64,
) -> Result<AdjustedPlan, AdjustmentError> {
    ProportionalPlanAdjuster::default().adjust_calories_only(plan, target_calories)
}
