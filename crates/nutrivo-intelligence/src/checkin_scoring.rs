// ABOUTME: Check-in scoring engine turning raw intake form text into nine sub-scores
// ABOUTME: Ordered bucket and substring tables with first-match-wins semantics, never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

//! Check-in Score Calculator
//!
//! Scores one patient check-in on nine dimensions, each on a 0-10 scale:
//!
//! | Field              | Rule                                               |
//! |--------------------|----------------------------------------------------|
//! | workouts, cardio   | leading count through the session buckets          |
//! | rest between sets  | substring rules ("30", "45", "1 minuto", "Mais")   |
//! | free meals, snacks | leading count through the inverted buckets         |
//! | water              | substring rules on the liter marker                |
//! | sleep              | substring rules on the hour marker                 |
//! | stress, libido     | first parenthesized number, used directly          |
//!
//! Malformed or missing fields degrade to the documented fallback for that
//! field. Scoring never returns an error.

use std::sync::LazyLock;

use nutrivo_core::constants::checkin::{
    MAX_SUB_SCORE, MAX_TOTAL_SCORE, MIN_SUB_SCORE, PERCENTAGE_DECIMALS,
};
use nutrivo_core::models::{CheckinScoreResult, CheckinSubmission};
use rayon::prelude::*;
use regex::Regex;
use tracing::debug;

use crate::config::intelligence::{CheckinScoringConfig, CountBucket, SubstringRule};
use crate::rounding::round_to_decimals;

// Matches: (5), (5.5), ( 7,5 )
static PARENTHESIZED_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\(\s*(\d+(?:[.,]\d+)?)\s*\)").ok());

/// Extract the first number enclosed in parentheses, e.g. `"Moderado (5.5)"` gives `5.5`.
///
/// A comma decimal separator is accepted. Returns `None` when no
/// parenthesized number is present.
#[must_use]
pub fn extract_parenthesized_score(text: &str) -> Option<f64> {
    let pattern = PARENTHESIZED_NUMBER.as_ref()?;
    let captures = pattern.captures(text)?;
    let number = captures.get(1)?.as_str().replace(',', ".");
    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse the leading ASCII digits of `text` after trimming whitespace.
///
/// Text without leading digits counts as zero; a digit run too large for
/// `u32` saturates at `u32::MAX`.
#[must_use]
pub fn parse_leading_count(text: &str) -> u32 {
    let trimmed = text.trim();
    let digits_len = trimmed
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return 0;
    }
    trimmed[..digits_len].parse().unwrap_or(u32::MAX)
}

fn bucket_score(buckets: &[CountBucket], above_score: f64, count: u32) -> f64 {
    buckets
        .iter()
        .find(|bucket| count <= bucket.max_count)
        .map_or(above_score, |bucket| bucket.score)
}

fn rule_score(rules: &[SubstringRule], fallback: f64, text: &str) -> f64 {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map_or(fallback, |rule| rule.score)
}

/// Scores check-in submissions against a scoring table
#[derive(Debug, Clone, Default)]
pub struct CheckinScoreCalculator {
    config: CheckinScoringConfig,
}

impl CheckinScoreCalculator {
    /// Create a calculator with the given scoring table
    #[must_use]
    pub const fn new(config: CheckinScoringConfig) -> Self {
        Self { config }
    }

    /// Scoring table in use
    #[must_use]
    pub const fn config(&self) -> &CheckinScoringConfig {
        &self.config
    }

    /// Score a single submission
    #[must_use]
    pub fn calculate_score(&self, submission: &CheckinSubmission) -> CheckinScoreResult {
        let workouts = self.session_score(submission.workouts.as_deref());
        let cardio = self.session_score(submission.cardio.as_deref());
        let rest_between_sets = self.rest_score(submission.rest_between_sets.as_deref());
        let free_meals = self.inverted_score(submission.free_meals.as_deref());
        let snacks = self.inverted_score(submission.snacks.as_deref());
        let water = self.water_score(submission.water.as_deref());
        let sleep = self.sleep_score(submission.sleep.as_deref());
        let stress = self.rating_score(submission.stress.as_deref());
        let libido = self.rating_score(submission.libido.as_deref());

        let total = workouts
            + cardio
            + rest_between_sets
            + free_meals
            + snacks
            + water
            + sleep
            + stress
            + libido;
        let percentage = round_to_decimals(total / MAX_TOTAL_SCORE * 100.0, PERCENTAGE_DECIMALS);

        debug!(total, percentage, "Scored check-in submission");

        CheckinScoreResult {
            workouts,
            cardio,
            rest_between_sets,
            free_meals,
            snacks,
            water,
            sleep,
            stress,
            libido,
            total,
            percentage,
        }
    }

    /// Score many submissions in parallel, preserving input order
    #[must_use]
    pub fn calculate_batch(&self, submissions: &[CheckinSubmission]) -> Vec<CheckinScoreResult> {
        submissions
            .par_iter()
            .map(|submission| self.calculate_score(submission))
            .collect()
    }

    /// Workout or cardio sessions: more is better
    #[must_use]
    pub fn session_score(&self, text: Option<&str>) -> f64 {
        let count = text
            .map(str::trim)
            .filter(|value| *value != self.config.none_token)
            .map_or(0, parse_leading_count);
        bucket_score(
            &self.config.session_buckets,
            self.config.session_above_score,
            count,
        )
    }

    /// Free meals or snacks: fewer is better, blank counts as none
    #[must_use]
    pub fn inverted_score(&self, text: Option<&str>) -> f64 {
        let count = text.map_or(0, parse_leading_count);
        bucket_score(
            &self.config.inverted_buckets,
            self.config.inverted_above_score,
            count,
        )
    }

    /// Rest between sets
    #[must_use]
    pub fn rest_score(&self, text: Option<&str>) -> f64 {
        rule_score(
            &self.config.rest_rules,
            self.config.rest_fallback,
            text.unwrap_or_default(),
        )
    }

    /// Daily water intake
    #[must_use]
    pub fn water_score(&self, text: Option<&str>) -> f64 {
        rule_score(
            &self.config.water_rules,
            self.config.water_fallback,
            text.unwrap_or_default(),
        )
    }

    /// Nightly sleep
    #[must_use]
    pub fn sleep_score(&self, text: Option<&str>) -> f64 {
        rule_score(
            &self.config.sleep_rules,
            self.config.sleep_fallback,
            text.unwrap_or_default(),
        )
    }

    /// Stress or libido: the parenthesized number clamped to the score range
    #[must_use]
    pub fn rating_score(&self, text: Option<&str>) -> f64 {
        text.and_then(extract_parenthesized_score)
            .map_or(self.config.rating_fallback, |value| {
                value.clamp(MIN_SUB_SCORE, MAX_SUB_SCORE)
            })
    }
}

/// Score a submission with the default scoring table
#[must_use]
pub fn calculate_score(submission: &CheckinSubmission) -> CheckinScoreResult {
    CheckinScoreCalculator::default().calculate_score(submission)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_score(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_leading_count() {
        assert_eq!(parse_leading_count("3"), 3);
        assert_eq!(parse_leading_count("  4 treinos"), 4);
        assert_eq!(parse_leading_count("Nenhum"), 0);
        assert_eq!(parse_leading_count(""), 0);
        assert_eq!(parse_leading_count("99999999999999"), u32::MAX);
    }

    #[test]
    fn test_extract_parenthesized_score() {
        let cases = [
            ("Moderado (5.5)", 5.5),
            ("Alta ( 7,5 )", 7.5),
            ("Baixo (x) (3)", 3.0),
        ];
        for (text, expected) in cases {
            let extracted = extract_parenthesized_score(text);
            assert!(extracted.is_some(), "no score found in {text}");
            assert_score(extracted.unwrap_or_default(), expected);
        }
        assert!(extract_parenthesized_score("Moderado").is_none());
        assert!(extract_parenthesized_score("Moderado ()").is_none());
    }

    #[test]
    fn test_session_buckets_are_inclusive_on_lower_bucket() {
        let calculator = CheckinScoreCalculator::default();
        assert_score(calculator.session_score(Some("Nenhum")), 0.0);
        assert_score(calculator.session_score(Some("1")), 2.5);
        assert_score(calculator.session_score(Some("2")), 2.5);
        assert_score(calculator.session_score(Some("3")), 5.0);
        assert_score(calculator.session_score(Some("4")), 5.0);
        assert_score(calculator.session_score(Some("5")), 7.5);
        assert_score(calculator.session_score(Some("6")), 10.0);
        assert_score(calculator.session_score(None), 0.0);
    }

    #[test]
    fn test_inverted_buckets() {
        let calculator = CheckinScoreCalculator::default();
        assert_score(calculator.inverted_score(Some("0")), 10.0);
        assert_score(calculator.inverted_score(Some("1")), 7.5);
        assert_score(calculator.inverted_score(Some("2")), 5.0);
        assert_score(calculator.inverted_score(Some("3")), 2.5);
        assert_score(calculator.inverted_score(Some("4")), 0.0);
        assert_score(calculator.inverted_score(Some("muitos")), 10.0);
    }

    #[test]
    fn test_water_checks_fractional_markers_before_whole() {
        let calculator = CheckinScoreCalculator::default();
        assert_score(calculator.water_score(Some("4 litros")), 10.0);
        assert_score(calculator.water_score(Some("3,5")), 10.0);
        assert_score(calculator.water_score(Some("3")), 7.5);
        assert_score(calculator.water_score(Some("2.5")), 5.0);
        assert_score(calculator.water_score(Some("1,5")), 2.5);
    }

    #[test]
    fn test_rating_is_clamped() {
        let calculator = CheckinScoreCalculator::default();
        assert_score(calculator.rating_score(Some("Altíssimo (12)")), 10.0);
        assert_score(calculator.rating_score(Some("Ótimo (8.5)")), 8.5);
        assert_score(calculator.rating_score(None), 5.0);
    }
}
