// ABOUTME: Check-in scoring service for the intake form handler
// ABOUTME: Decodes form payloads, scores them, and shapes the persisted score row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

use nutrivo_core::errors::{AppError, AppResult};
use nutrivo_core::models::{CheckinScoreResult, CheckinSubmission};
use nutrivo_intelligence::checkin_summary::{summarize_checkins, CheckinSummary};
use nutrivo_intelligence::config::IntelligenceConfig;
use nutrivo_intelligence::CheckinScoreCalculator;
use serde_json::Value;
use tracing::{debug, info_span};
use uuid::Uuid;

use crate::logging::AppLogger;

/// Scores patient check-ins
#[derive(Debug, Clone, Default)]
pub struct CheckinScoringService {
    calculator: CheckinScoreCalculator,
}

impl CheckinScoringService {
    /// Create a service around a calculator
    #[must_use]
    pub const fn new(calculator: CheckinScoreCalculator) -> Self {
        Self { calculator }
    }

    /// Create a service from loaded configuration
    #[must_use]
    pub fn from_config(config: &IntelligenceConfig) -> Self {
        Self::new(CheckinScoreCalculator::new(config.checkin_scoring.clone()))
    }

    /// Score one typed submission
    #[must_use]
    pub fn score_submission(
        &self,
        patient_id: Uuid,
        submission: &CheckinSubmission,
    ) -> CheckinScoreResult {
        let _span = info_span!("score_checkin", patient.id = %patient_id).entered();
        let result = self.calculator.calculate_score(submission);
        AppLogger::log_checkin_scored(patient_id, result.total, result.percentage);
        result
    }

    /// Score a raw form payload and return the score row to persist
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidFormat` if the payload is not a JSON object
    /// or a field holds something other than text, a number, or null
    pub fn score_form_payload(&self, patient_id: Uuid, payload: &Value) -> AppResult<Value> {
        if !payload.is_object() {
            AppLogger::log_rejected_input(
                patient_id,
                "score_form_payload",
                "payload is not an object",
            );
            return Err(
                AppError::invalid_format("Check-in payload must be a JSON object")
                    .with_resource_id(patient_id.to_string()),
            );
        }

        let submission: CheckinSubmission =
            serde_json::from_value(payload.clone()).map_err(|error| {
                AppLogger::log_rejected_input(patient_id, "score_form_payload", &error.to_string());
                AppError::invalid_format(format!("Invalid check-in payload: {error}"))
                    .with_resource_id(patient_id.to_string())
                    .with_source(error)
            })?;

        let result = self.score_submission(patient_id, &submission);
        Ok(serde_json::to_value(result)?)
    }

    /// Re-score a patient's stored submissions, oldest first
    #[must_use]
    pub fn rescore_history(
        &self,
        patient_id: Uuid,
        submissions: &[CheckinSubmission],
    ) -> Vec<CheckinScoreResult> {
        let _span = info_span!("rescore_history", patient.id = %patient_id).entered();
        let results = self.calculator.calculate_batch(submissions);
        debug!(count = results.len(), "Re-scored check-in history");
        results
    }

    /// Dashboard summary of a patient's scored history
    #[must_use]
    pub fn summarize_history(
        patient_id: Uuid,
        results: &[CheckinScoreResult],
    ) -> Option<CheckinSummary> {
        let _span = info_span!("summarize_history", patient.id = %patient_id).entered();
        let summary = summarize_checkins(results);
        debug!(has_summary = summary.is_some(), "Summarized check-in history");
        summary
    }
}
