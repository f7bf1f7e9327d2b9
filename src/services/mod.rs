// ABOUTME: Domain service layer wrapping the scoring and adjustment engines
// ABOUTME: Used by the check-in form handler and the diet-plan editor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

//! Domain service layer
//!
//! Services decode loosely typed payloads, invoke the pure engines, and
//! translate failures into [`AppError`](crate::errors::AppError). They keep
//! no state beyond their configuration, so one instance can serve every
//! request.

/// Check-in scoring: single submissions, form payloads, and history
pub mod checkins;

/// Diet-plan adjustment by percentage or calorie target
pub mod diet_plans;

pub use checkins::CheckinScoringService;
pub use diet_plans::PlanAdjustmentService;
