// ABOUTME: Main library entry point for the Nutrivo coaching platform core
// ABOUTME: Check-in scoring and diet-plan adjustment services with structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

#![deny(unsafe_code)]

//! # Nutrivo
//!
//! Business logic behind the check-in form and the diet-plan editor of the
//! Nutrivo coaching platform.
//!
//! ## Architecture
//!
//! - **nutrivo-core**: data contracts, constants, and the unified error type
//! - **nutrivo-intelligence**: the pure scoring and adjustment engines
//! - **services** (this crate): payload decoding, error mapping, and logging
//!   around the engines
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrivo::models::{AdjustmentSpec, CheckinSubmission, DietPlan};
//! use nutrivo::services::{CheckinScoringService, PlanAdjustmentService};
//! use uuid::Uuid;
//!
//! let checkins = CheckinScoringService::default();
//! let score = checkins.score_submission(Uuid::new_v4(), &CheckinSubmission::default());
//! assert!((score.total - 37.5).abs() < 1e-9);
//!
//! let plans = PlanAdjustmentService::default();
//! let plan = DietPlan { total_calories: Some(2000.0), ..DietPlan::default() };
//! let adjusted = plans.adjust(Uuid::new_v4(), &plan, &AdjustmentSpec::all_macros(10.0));
//! assert_eq!(adjusted.total_calories, Some(2200.0));
//! ```

/// Structured logging configuration and domain event helpers
pub mod logging;

/// Services used by the form handler and plan editor
pub mod services;

/// Re-export of the shared error types
pub use nutrivo_core::errors;

/// Re-export of the shared constants
pub use nutrivo_core::constants;

/// Re-export of the shared data contracts
pub use nutrivo_core::models;

/// Re-export of the scoring and adjustment engines
pub use nutrivo_intelligence as intelligence;
