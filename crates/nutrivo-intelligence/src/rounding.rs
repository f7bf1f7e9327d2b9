// ABOUTME: Decimal rounding shared by check-in percentages and plan adjustment
// ABOUTME: Rounds half away from zero at a fixed number of decimal places
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrivo

/// Round `value` to `decimals` places, halves away from zero.
///
/// Non-finite inputs are returned unchanged.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}
