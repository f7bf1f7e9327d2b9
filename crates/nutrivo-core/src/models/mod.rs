// ABOUTME: Data contracts exchanged between the form handler, plan editor, and engines
// ABOUTME: Re-exports check-in and diet-plan models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

//! Core data models
//!
//! Both families of types are ephemeral: they are built per request, handed
//! to an engine, and the engine returns freshly allocated values.

/// Check-in submissions and score records
pub mod checkin;

/// Diet plans, meals, food lines, and adjustment requests
pub mod diet_plan;

pub use checkin::{CheckinScoreResult, CheckinSubmission};
pub use diet_plan::{
    AdjustedPlan, AdjustmentSpec, DietPlan, FoodLine, MacroDimension, MacroTotals, Meal,
};
