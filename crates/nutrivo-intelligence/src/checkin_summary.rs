// ABOUTME: Dashboard summary over a patient's scored check-in history
// ABOUTME: Averages, best and worst percentage, and first-to-last trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

use nutrivo_core::constants::checkin::PERCENTAGE_DECIMALS;
use nutrivo_core::models::CheckinScoreResult;
use serde::{Deserialize, Serialize};

use crate::rounding::round_to_decimals;

/// Aggregate of a patient's check-in scores, oldest first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckinSummary {
    /// Number of check-ins summarized
    pub count: usize,
    /// Mean total score
    pub average_total: f64,
    /// Mean percentage
    pub average_percentage: f64,
    /// Highest percentage
    pub best_percentage: f64,
    /// Lowest percentage
    pub worst_percentage: f64,
    /// Latest percentage minus the earliest; positive means improving
    pub trend: f64,
}

/// Summarize scored check-ins given in chronological order.
///
/// Returns `None` for an empty history.
#[must_use]
pub fn summarize_checkins(results: &[CheckinScoreResult]) -> Option<CheckinSummary> {
    let first = results.first()?;
    let last = results.last()?;
    let count = results.len();
    let divisor = count as f64;

    let total_sum: f64 = results.iter().map(|result| result.total).sum();
    let percentage_sum: f64 = results.iter().map(|result| result.percentage).sum();
    let best = results
        .iter()
        .map(|result| result.percentage)
        .fold(f64::NEG_INFINITY, f64::max);
    let worst = results
        .iter()
        .map(|result| result.percentage)
        .fold(f64::INFINITY, f64::min);

    Some(CheckinSummary {
        count,
        average_total: round_to_decimals(total_sum / divisor, PERCENTAGE_DECIMALS),
        average_percentage: round_to_decimals(percentage_sum / divisor, PERCENTAGE_DECIMALS),
        best_percentage: best,
        worst_percentage: worst,
        trend: round_to_decimals(last.percentage - first.percentage, PERCENTAGE_DECIMALS),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::checkin_scoring::calculate_score;
    use nutrivo_core::models::CheckinSubmission;

    #[test]
    fn test_empty_history_has_no_summary() {
        assert!(summarize_checkins(&[]).is_none());
    }

    #[test]
    fn test_summary_tracks_improvement() {
        let early = calculate_score(&CheckinSubmission::default());
        let later = calculate_score(&CheckinSubmission {
            workouts: Some("6".to_owned()),
            cardio: Some("3".to_owned()),
            sleep: Some("8".to_owned()),
            ..CheckinSubmission::default()
        });

        let summary = summarize_checkins(&[early, later]).unwrap();

        assert_eq!(summary.count, 2);
        assert!((summary.best_percentage - later.percentage).abs() < 1e-9);
        assert!((summary.worst_percentage - early.percentage).abs() < 1e-9);
        assert!(summary.trend > 0.0);
    }
}
