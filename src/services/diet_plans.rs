// ABOUTME: Diet-plan adjustment service for the plan editor
// ABOUTME: Percentage and calorie-target rescaling with payload decoding and error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

use nutrivo_core::errors::{AppError, AppResult};
use nutrivo_core::models::{AdjustedPlan, AdjustmentSpec, DietPlan};
use nutrivo_intelligence::config::IntelligenceConfig;
use nutrivo_intelligence::ProportionalPlanAdjuster;
use serde_json::{json, Value};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::logging::AppLogger;

/// Rescales diet plans on behalf of the plan editor
#[derive(Debug, Clone, Default)]
pub struct PlanAdjustmentService {
    adjuster: ProportionalPlanAdjuster,
}

impl PlanAdjustmentService {
    /// Create a service around an adjuster
    #[must_use]
    pub const fn new(adjuster: ProportionalPlanAdjuster) -> Self {
        Self { adjuster }
    }

    /// Create a service from loaded configuration
    #[must_use]
    pub fn from_config(config: &IntelligenceConfig) -> Self {
        Self::new(ProportionalPlanAdjuster::new(config.plan_adjustment.clone()))
    }

    /// Rescale a plan by the requested percentage
    #[must_use]
    pub fn adjust(&self, plan_id: Uuid, plan: &DietPlan, spec: &AdjustmentSpec) -> AdjustedPlan {
        let _span = info_span!("adjust_plan", plan.id = %plan_id).entered();
        let adjusted = self.adjuster.adjust_plan(plan, spec);
        AppLogger::log_plan_adjusted(plan_id, spec.percentage, adjusted.meals.len());
        adjusted
    }

    /// Rescale a plan so its calorie total reaches `target_calories`
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` for a negative or non-finite target and
    /// `ErrorCode::UndefinedAdjustmentBase` when the plan has no calorie total
    pub fn adjust_to_calories(
        &self,
        plan_id: Uuid,
        plan: &DietPlan,
        target_calories: f64,
    ) -> AppResult<AdjustedPlan> {
        let _span = info_span!("adjust_plan_to_calories", plan.id = %plan_id).entered();

        if !target_calories.is_finite() || target_calories < 0.0 {
            AppLogger::log_rejected_input(plan_id, "adjust_to_calories", "invalid calorie target");
            return Err(AppError::invalid_input(format!(
                "Target calories must be a non-negative number, got {target_calories}"
            ))
            .with_resource_id(plan_id.to_string())
            .with_details(json!({ "target_calories": target_calories.to_string() })));
        }

        let adjusted = self
            .adjuster
            .adjust_calories_only(plan, target_calories)
            .map_err(|error| {
                AppLogger::log_rejected_input(plan_id, "adjust_to_calories", &error.to_string());
                AppError::from(error).with_resource_id(plan_id.to_string())
            })?;

        info!(
            plan.id = %plan_id,
            target_calories,
            plan.meal_count = adjusted.meals.len(),
            "Diet plan moved to calorie target"
        );
        Ok(adjusted)
    }

    /// Decode a stored plan payload, rescale it, and return the payload to persist
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if the payload is not a JSON object
    /// shaped like a diet plan
    pub fn adjust_payload(
        &self,
        plan_id: Uuid,
        payload: &Value,
        spec: &AdjustmentSpec,
    ) -> AppResult<Value> {
        if !payload.is_object() {
            AppLogger::log_rejected_input(plan_id, "adjust_payload", "payload is not an object");
            return Err(AppError::invalid_format("Diet plan payload must be a JSON object")
                .with_resource_id(plan_id.to_string()));
        }

        let plan: DietPlan = serde_json::from_value(payload.clone()).map_err(|error| {
            AppLogger::log_rejected_input(plan_id, "adjust_payload", &error.to_string());
            AppError::invalid_format(format!("Invalid diet plan payload: {error}"))
                .with_resource_id(plan_id.to_string())
                .with_source(error)
        })?;

        let adjusted = self.adjust(plan_id, &plan, spec);
        Ok(serde_json::to_value(&adjusted)?)
    }
}
