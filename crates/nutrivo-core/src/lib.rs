// ABOUTME: Core types and constants for the Nutrivo coaching platform
// ABOUTME: Foundation crate with error handling, data contracts, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

#![deny(unsafe_code)]

//! # Nutrivo Core
//!
//! Foundation crate providing shared types and constants for the Nutrivo
//! coaching platform. The engines in `nutrivo-intelligence` and the service
//! facade in the root crate both depend on it; it changes infrequently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Scoring and nutrition constants
//! - **models**: Check-in submissions, score records, and diet plans

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (check-ins, score records, diet plans)
pub mod models;
