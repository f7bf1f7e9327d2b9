// ABOUTME: Check-in scoring configuration: count buckets, substring rules, and fallbacks
// ABOUTME: Defaults reproduce the intake form's published scoring table exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

//! Check-in Scoring Configuration
//!
//! Every sub-score is a table lookup. Count fields (workouts, cardio, free
//! meals, snacks) go through ordered `(max_count, score)` buckets; text
//! fields (rest, water, sleep) go through ordered substring rules where the
//! first rule with a matching pattern wins. The defaults below are the
//! scoring table coaches see on the intake form.

use nutrivo_core::constants::checkin::{MAX_SUB_SCORE, MIN_SUB_SCORE, NEUTRAL_SCORE, NONE_TOKEN};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Score awarded to counts up to and including `max_count`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountBucket {
    /// Inclusive upper bound of the bucket
    pub max_count: u32,
    /// Score for counts that land in this bucket
    pub score: f64,
}

impl CountBucket {
    /// Create a bucket
    #[must_use]
    pub const fn new(max_count: u32, score: f64) -> Self {
        Self { max_count, score }
    }
}

/// Score awarded when the field text contains any of `patterns`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstringRule {
    /// Case-sensitive substrings, any of which triggers the rule
    pub patterns: Vec<String>,
    /// Score when the rule matches
    pub score: f64,
}

impl SubstringRule {
    /// Create a rule from borrowed patterns
    #[must_use]
    pub fn new(patterns: &[&str], score: f64) -> Self {
        Self {
            patterns: patterns.iter().map(|&p| p.to_owned()).collect(),
            score,
        }
    }

    /// Whether `text` contains any non-empty pattern of this rule
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| !pattern.is_empty() && text.contains(pattern.as_str()))
    }
}

/// Check-in scoring configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckinScoringConfig {
    /// Literal meaning "no sessions" on the workout/cardio fields
    pub none_token: String,
    /// Workout/cardio buckets, ascending by `max_count`
    pub session_buckets: Vec<CountBucket>,
    /// Workout/cardio score above the last bucket
    pub session_above_score: f64,
    /// Free-meal/snack buckets (fewer is better), ascending by `max_count`
    pub inverted_buckets: Vec<CountBucket>,
    /// Free-meal/snack score above the last bucket
    pub inverted_above_score: f64,
    /// Rest-between-sets rules in priority order
    pub rest_rules: Vec<SubstringRule>,
    /// Rest score when no rule matches
    pub rest_fallback: f64,
    /// Water intake rules in priority order
    pub water_rules: Vec<SubstringRule>,
    /// Water score when no rule matches
    pub water_fallback: f64,
    /// Sleep rules in priority order
    pub sleep_rules: Vec<SubstringRule>,
    /// Sleep score when no rule matches
    pub sleep_fallback: f64,
    /// Stress/libido score when no parenthesized number is present
    pub rating_fallback: f64,
}

impl Default for CheckinScoringConfig {
    fn default() -> Self {
        Self {
            none_token: NONE_TOKEN.to_owned(),
            session_buckets: vec![
                CountBucket::new(0, 0.0),
                CountBucket::new(2, 2.5),
                CountBucket::new(4, 5.0),
                CountBucket::new(5, 7.5),
            ],
            session_above_score: 10.0,
            inverted_buckets: vec![
                CountBucket::new(0, 10.0),
                CountBucket::new(1, 7.5),
                CountBucket::new(2, 5.0),
                CountBucket::new(3, 2.5),
            ],
            inverted_above_score: 0.0,
            rest_rules: vec![
                SubstringRule::new(&["30"], 2.5),
                SubstringRule::new(&["45"], 5.0),
                SubstringRule::new(&["1 minuto"], 10.0),
                SubstringRule::new(&["Mais"], 7.5),
            ],
            rest_fallback: NEUTRAL_SCORE,
            // "3,5" must be tried before "3" and "2,5" before "2"
            water_rules: vec![
                SubstringRule::new(&["4"], 10.0),
                SubstringRule::new(&["3,5", "3.5"], 10.0),
                SubstringRule::new(&["3"], 7.5),
                SubstringRule::new(&["2,5", "2.5"], 5.0),
                SubstringRule::new(&["2"], 5.0),
            ],
            water_fallback: 2.5,
            sleep_rules: vec![
                SubstringRule::new(&["8", "mais"], 10.0),
                SubstringRule::new(&["7"], 7.5),
                SubstringRule::new(&["6"], 5.0),
                SubstringRule::new(&["5"], 2.5),
            ],
            sleep_fallback: 0.0,
            rating_fallback: NEUTRAL_SCORE,
        }
    }
}

impl CheckinScoringConfig {
    /// Validate scores, bucket ordering, and rule patterns
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if any score is outside `[0, 10]`,
    /// or `ConfigError::InvalidRange` if buckets are not strictly ascending or
    /// a rule has no usable pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalar_scores = [
            ("session_above_score", self.session_above_score),
            ("inverted_above_score", self.inverted_above_score),
            ("rest_fallback", self.rest_fallback),
            ("water_fallback", self.water_fallback),
            ("sleep_fallback", self.sleep_fallback),
            ("rating_fallback", self.rating_fallback),
        ];
        for (name, score) in scalar_scores {
            check_score(name, score)?;
        }

        validate_buckets("session_buckets", &self.session_buckets)?;
        validate_buckets("inverted_buckets", &self.inverted_buckets)?;
        validate_rules("rest_rules", &self.rest_rules)?;
        validate_rules("water_rules", &self.water_rules)?;
        validate_rules("sleep_rules", &self.sleep_rules)?;

        if self.none_token.trim().is_empty() {
            return Err(ConfigError::InvalidRange(
                "none_token must not be blank".to_owned(),
            ));
        }

        Ok(())
    }
}

fn check_score(name: &str, score: f64) -> Result<(), ConfigError> {
    if (MIN_SUB_SCORE..=MAX_SUB_SCORE).contains(&score) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange(format!(
            "{name} must be between {MIN_SUB_SCORE} and {MAX_SUB_SCORE}, got {score}"
        )))
    }
}

fn validate_buckets(name: &str, buckets: &[CountBucket]) -> Result<(), ConfigError> {
    if buckets.is_empty() {
        return Err(ConfigError::InvalidRange(format!(
            "{name} must define at least one bucket"
        )));
    }
    for bucket in buckets {
        check_score(name, bucket.score)?;
    }
    if buckets
        .windows(2)
        .any(|pair| pair[0].max_count >= pair[1].max_count)
    {
        return Err(ConfigError::InvalidRange(format!(
            "{name} must be in strictly ascending order of max_count"
        )));
    }
    Ok(())
}

fn validate_rules(name: &str, rules: &[SubstringRule]) -> Result<(), ConfigError> {
    for (index, rule) in rules.iter().enumerate() {
        check_score(name, rule.score)?;
        if rule.patterns.iter().all(String::is_empty) {
            return Err(ConfigError::InvalidRange(format!(
                "{name}[{index}] must have at least one non-empty pattern"
            )));
        }
    }
    Ok(())
}
