// ABOUTME: Check-in intake and score record models
// ABOUTME: CheckinSubmission (raw form text) and CheckinScoreResult (persisted scores)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::checkin::SUB_SCORE_COUNT;

/// Accepts a JSON string, number, or null for a free-text form field.
///
/// Upstream form tools send counts either as `"3"` or `3`; numbers are
/// rendered back to text so scoring sees the same input either way.
fn deserialize_lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => Ok(Some(number.to_string())),
        Some(other) => Err(DeError::custom(format!(
            "expected text or number for check-in field, got {other}"
        ))),
    }
}

/// One check-in as submitted by a patient.
///
/// Every field is optional free text exactly as typed or selected on the
/// intake form. Wire names follow the form's column names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinSubmission {
    /// Workout sessions in the period, or the "none" token
    #[serde(rename = "treino", default, deserialize_with = "deserialize_lenient_text")]
    pub workouts: Option<String>,
    /// Cardio sessions in the period, or the "none" token
    #[serde(rename = "cardio", default, deserialize_with = "deserialize_lenient_text")]
    pub cardio: Option<String>,
    /// Rest between sets ("30", "45", "1 minuto", "Mais ...")
    #[serde(rename = "descanso", default, deserialize_with = "deserialize_lenient_text")]
    pub rest_between_sets: Option<String>,
    /// Number of free (cheat) meals
    #[serde(rename = "ref_livre", default, deserialize_with = "deserialize_lenient_text")]
    pub free_meals: Option<String>,
    /// Number of off-plan snacks
    #[serde(rename = "beliscos", default, deserialize_with = "deserialize_lenient_text")]
    pub snacks: Option<String>,
    /// Daily water intake in liters ("2,5", "3.5", "4")
    #[serde(rename = "agua", default, deserialize_with = "deserialize_lenient_text")]
    pub water: Option<String>,
    /// Nightly sleep in hours ("7", "mais de 8")
    #[serde(rename = "sono", default, deserialize_with = "deserialize_lenient_text")]
    pub sleep: Option<String>,
    /// Stress level with its score in parentheses, e.g. `"Moderado (5.5)"`
    #[serde(rename = "stress", default, deserialize_with = "deserialize_lenient_text")]
    pub stress: Option<String>,
    /// Libido level with its score in parentheses
    #[serde(rename = "libido", default, deserialize_with = "deserialize_lenient_text")]
    pub libido: Option<String>,
}

/// Scores computed for one check-in, persisted verbatim as a check-in row.
///
/// Each sub-score lies in `[0, 10]`; `total` is their sum and
/// `percentage` is `total / 90 * 100` with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckinScoreResult {
    /// Workout frequency score
    #[serde(rename = "pontos_treinos")]
    pub workouts: f64,
    /// Cardio frequency score
    #[serde(rename = "pontos_cardios")]
    pub cardio: f64,
    /// Rest-between-sets score
    #[serde(rename = "pontos_descanso_entre_series")]
    pub rest_between_sets: f64,
    /// Free-meal score (fewer is better)
    #[serde(rename = "pontos_refeicao_livre")]
    pub free_meals: f64,
    /// Snacking score (fewer is better)
    #[serde(rename = "pontos_beliscos")]
    pub snacks: f64,
    /// Hydration score
    #[serde(rename = "pontos_agua")]
    pub water: f64,
    /// Sleep score
    #[serde(rename = "pontos_sono")]
    pub sleep: f64,
    /// Stress score
    #[serde(rename = "pontos_stress")]
    pub stress: f64,
    /// Libido score
    #[serde(rename = "pontos_libido")]
    pub libido: f64,
    /// Sum of the nine sub-scores
    #[serde(rename = "total_pontuacao")]
    pub total: f64,
    /// Total as a percentage of the maximum
    #[serde(rename = "percentual_aproveitamento")]
    pub percentage: f64,
}

impl CheckinScoreResult {
    /// The nine sub-scores labelled with their column names, in form order
    #[must_use]
    pub const fn sub_scores(&self) -> [(&'static str, f64); SUB_SCORE_COUNT] {
        [
            ("pontos_treinos", self.workouts),
            ("pontos_cardios", self.cardio),
            ("pontos_descanso_entre_series", self.rest_between_sets),
            ("pontos_refeicao_livre", self.free_meals),
            ("pontos_beliscos", self.snacks),
            ("pontos_agua", self.water),
            ("pontos_sono", self.sleep),
            ("pontos_stress", self.stress),
            ("pontos_libido", self.libido),
        ]
    }
}
