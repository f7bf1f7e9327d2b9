// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging plus sample check-ins and diet plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::panic,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `nutrivo`

use std::env;
use std::sync::Once;

use nutrivo::models::{CheckinSubmission, DietPlan, FoodLine, Meal};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Assert two scores are equal within floating-point noise
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Assert an optional plan value is present and close to `expected`
pub fn assert_value(actual: Option<f64>, expected: f64) {
    let value = actual.unwrap_or_else(|| panic!("expected {expected}, got None"));
    assert_close(value, expected);
}

/// A check-in from a patient who followed the plan closely
pub fn committed_checkin() -> CheckinSubmission {
    CheckinSubmission {
        workouts: Some("6".to_owned()),
        cardio: Some("5".to_owned()),
        rest_between_sets: Some("1 minuto".to_owned()),
        free_meals: Some("1".to_owned()),
        snacks: Some("0".to_owned()),
        water: Some("3,5 litros".to_owned()),
        sleep: Some("8 horas".to_owned()),
        stress: Some("Baixo (9)".to_owned()),
        libido: Some("Alta (8.5)".to_owned()),
    }
}

/// One food line with every macro present
pub fn food_line(
    name: &str,
    quantity: f64,
    calories: f64,
    protein: f64,
    carbs: f64,
    fats: f64,
) -> FoodLine {
    FoodLine {
        name: Some(name.to_owned()),
        quantity,
        calories: Some(calories),
        protein: Some(protein),
        carbs: Some(carbs),
        fats: Some(fats),
    }
}

/// A two-meal plan whose meal totals match its food lines
pub fn two_meal_plan() -> DietPlan {
    DietPlan {
        total_calories: Some(1000.0),
        total_protein: Some(75.0),
        total_carbs: Some(100.0),
        total_fats: Some(33.3),
        meals: vec![
            Meal {
                name: Some("Café da manhã".to_owned()),
                calories: Some(400.0),
                protein: Some(30.0),
                carbs: Some(40.0),
                fats: Some(13.3),
                foods: vec![
                    food_line("Aveia", 40.0, 150.0, 5.0, 27.0, 3.0),
                    food_line("Ovos", 100.0, 250.0, 25.0, 13.0, 10.3),
                ],
            },
            Meal {
                name: Some("Almoço".to_owned()),
                calories: Some(600.0),
                protein: Some(45.0),
                carbs: Some(60.0),
                fats: Some(20.0),
                foods: vec![
                    food_line("Arroz", 150.0, 200.0, 4.0, 44.0, 0.5),
                    food_line("Frango", 150.0, 400.0, 41.0, 16.0, 19.5),
                ],
            },
        ],
    }
}
