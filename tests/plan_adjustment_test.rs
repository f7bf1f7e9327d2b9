// ABOUTME: Integration tests for proportional diet-plan adjustment
// ABOUTME: Covers no-op, reconciliation, quantity decoupling, and the calorie-target failure path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, assert_value, init_test_logging, two_meal_plan};
use nutrivo::intelligence::config::intelligence::PlanAdjustmentConfig;
use nutrivo::intelligence::macro_distribution::macro_distribution;
use nutrivo::intelligence::{
    adjust_calories_only, adjust_plan, AdjustmentError, ProportionalPlanAdjuster,
};
use nutrivo::models::{AdjustmentSpec, DietPlan, Meal};

fn flags_off(percentage: f64) -> AdjustmentSpec {
    AdjustmentSpec {
        percentage,
        ..AdjustmentSpec::default()
    }
}

#[test]
fn test_zero_percentage_is_a_no_op() {
    init_test_logging();
    let plan = two_meal_plan();
    let spec = AdjustmentSpec {
        maintain_ratios: false,
        ..AdjustmentSpec::all_macros(0.0)
    };

    assert_eq!(adjust_plan(&plan, &spec), plan);
}

#[test]
fn test_input_plan_is_not_mutated() {
    let plan = two_meal_plan();
    let snapshot = plan.clone();
    let _ = adjust_plan(&plan, &AdjustmentSpec::all_macros(25.0));
    assert_eq!(plan, snapshot);
}

#[test]
fn test_ten_percent_scales_every_level() {
    let adjusted = adjust_plan(&two_meal_plan(), &AdjustmentSpec::all_macros(10.0));

    assert_value(adjusted.meals[0].calories, 440.0);
    assert_value(adjusted.meals[1].calories, 660.0);
    assert_value(adjusted.total_calories, 1100.0);

    assert_value(adjusted.meals[0].protein, 33.0);
    assert_value(adjusted.meals[1].protein, 49.5);
    assert_value(adjusted.total_protein, 82.5);

    assert_value(adjusted.meals[0].fats, 14.6);
    assert_value(adjusted.total_fats, 36.6);

    let oats = &adjusted.meals[0].foods[0];
    assert_close(oats.quantity, 44.0);
    assert_value(oats.calories, 165.0);
    assert_value(oats.carbs, 29.7);
    assert_eq!(oats.name.as_deref(), Some("Aveia"));
    assert_eq!(adjusted.meals[1].name.as_deref(), Some("Almoço"));
}

#[test]
fn test_maintain_ratios_uses_rounded_meal_sum() {
    let plan = DietPlan {
        total_calories: Some(202.0),
        meals: vec![
            Meal {
                calories: Some(101.0),
                ..Meal::default()
            },
            Meal {
                calories: Some(101.0),
                ..Meal::default()
            },
        ],
        ..DietPlan::default()
    };
    let spec = AdjustmentSpec {
        percentage: 50.0,
        adjust_calories: true,
        ..AdjustmentSpec::default()
    };

    // Each meal rounds 151.5 up to 152; a naive total would be 303
    let naive = adjust_plan(&plan, &spec);
    assert_value(naive.total_calories, 303.0);

    let reconciled = adjust_plan(
        &plan,
        &AdjustmentSpec {
            maintain_ratios: true,
            ..spec
        },
    );
    assert_value(reconciled.meals[0].calories, 152.0);
    assert_value(reconciled.total_calories, 304.0);
}

#[test]
fn test_reconciliation_only_touches_flagged_dimensions() {
    let mut plan = two_meal_plan();
    // Stated protein deliberately disagrees with the meals
    plan.total_protein = Some(80.0);
    let spec = AdjustmentSpec {
        percentage: 10.0,
        adjust_calories: true,
        maintain_ratios: true,
        ..AdjustmentSpec::default()
    };
    let adjusted = adjust_plan(&plan, &spec);

    assert_value(adjusted.total_calories, 1100.0);
    assert_value(adjusted.total_protein, 80.0);
    assert_value(adjusted.meals[0].protein, 30.0);
}

#[test]
fn test_quantities_scale_even_with_every_flag_off() {
    let plan = two_meal_plan();
    let adjusted = adjust_plan(&plan, &flags_off(50.0));

    assert_eq!(adjusted.totals(), plan.totals());
    for (original_meal, meal) in plan.meals.iter().zip(&adjusted.meals) {
        assert_eq!(meal.macros(), original_meal.macros());
        for (original_food, food) in original_meal.foods.iter().zip(&meal.foods) {
            assert_close(food.quantity, original_food.quantity * 1.5);
            assert_eq!(food.macros(), original_food.macros());
        }
    }
}

#[test]
fn test_minus_one_hundred_percent_zeroes_adjusted_values() {
    let adjusted = adjust_plan(&two_meal_plan(), &AdjustmentSpec::all_macros(-100.0));

    assert_value(adjusted.total_calories, 0.0);
    assert_value(adjusted.total_fats, 0.0);
    for meal in &adjusted.meals {
        assert_value(meal.calories, 0.0);
        assert_value(meal.protein, 0.0);
        for food in &meal.foods {
            assert_close(food.quantity, 0.0);
            assert_value(food.calories, 0.0);
        }
    }
}

#[test]
fn test_plan_without_meals_scales_totals() {
    let plan = DietPlan {
        total_calories: Some(2000.0),
        total_protein: Some(150.0),
        total_carbs: None,
        total_fats: Some(0.0),
        meals: Vec::new(),
    };
    let adjusted = adjust_plan(&plan, &AdjustmentSpec::all_macros(20.0));

    assert_value(adjusted.total_calories, 2400.0);
    assert_value(adjusted.total_protein, 180.0);
    assert_eq!(adjusted.total_carbs, None);
    assert_value(adjusted.total_fats, 0.0);
    assert!(adjusted.meals.is_empty());
}

#[test]
fn test_meal_with_empty_food_list() {
    let plan = DietPlan {
        total_calories: Some(500.0),
        meals: vec![Meal {
            name: Some("Ceia".to_owned()),
            calories: Some(500.0),
            protein: None,
            ..Meal::default()
        }],
        ..DietPlan::default()
    };
    let adjusted = adjust_plan(&plan, &AdjustmentSpec::all_macros(-10.0));

    assert_value(adjusted.meals[0].calories, 450.0);
    assert_eq!(adjusted.meals[0].protein, None);
    assert!(adjusted.meals[0].foods.is_empty());
    assert_value(adjusted.total_calories, 450.0);
}

#[test]
fn test_adjust_calories_only_reaches_target() {
    let adjusted = adjust_calories_only(&two_meal_plan(), 1200.0).unwrap();

    assert_value(adjusted.total_calories, 1200.0);
    assert_value(adjusted.meals[0].calories, 480.0);
    assert_value(adjusted.meals[1].calories, 720.0);
    assert_value(adjusted.total_protein, 90.0);
    assert_close(adjusted.meals[0].foods[0].quantity, 48.0);
}

#[test]
fn test_adjust_calories_only_rejects_undefined_base() {
    let mut plan = two_meal_plan();

    plan.total_calories = None;
    let missing = adjust_calories_only(&plan, 1800.0);
    assert!(matches!(
        missing,
        Err(AdjustmentError::UndefinedAdjustmentBase {
            total_calories: None
        })
    ));

    plan.total_calories = Some(0.0);
    let zero = adjust_calories_only(&plan, 1800.0);
    assert!(matches!(
        zero,
        Err(AdjustmentError::UndefinedAdjustmentBase {
            total_calories: Some(_)
        })
    ));
}

#[test]
fn test_configured_precision() {
    let adjuster = ProportionalPlanAdjuster::new(PlanAdjustmentConfig {
        calorie_decimals: 1,
        macro_decimals: 2,
    });
    let plan = DietPlan {
        total_calories: Some(1234.0),
        total_protein: Some(33.33),
        ..DietPlan::default()
    };
    let adjusted = adjuster.adjust_plan(&plan, &AdjustmentSpec::all_macros(5.0));

    assert_value(adjusted.total_calories, 1295.7);
    assert_value(adjusted.total_protein, 35.0);
}

#[test]
fn test_distribution_survives_uniform_adjustment() {
    let plan = two_meal_plan();
    let before = macro_distribution(&plan.meal_totals()).unwrap();
    let adjusted = adjust_plan(&plan, &AdjustmentSpec::all_macros(20.0));
    let after = macro_distribution(&adjusted.meal_totals()).unwrap();

    assert!((before.protein_percent - after.protein_percent).abs() <= 0.2);
    assert!((before.fat_percent - after.fat_percent).abs() <= 0.2);
}
