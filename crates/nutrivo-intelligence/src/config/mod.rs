// ABOUTME: Configuration module for nutrivo-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

/// Engine configuration (check-in scoring rules, plan rounding)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
