// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Shared constants and numeric helpers for the flight computer.

/// Standard altimeter setting, inches of mercury.
pub const STANDARD_ALTIMETER_INHG: f64 = 29.92;
/// Feet of pressure altitude per inch of mercury.
pub const FEET_PER_INHG: f64 = 1000.0;
/// ISA sea-level temperature, degrees Celsius.
pub const ISA_SEA_LEVEL_TEMP_C: f64 = 15.0;
/// ISA lapse rate used by the calculator, degrees Celsius per 1000 ft.
pub const ISA_LAPSE_C_PER_1000FT: f64 = 2.0;
/// Density altitude change per degree of ISA deviation.
pub const DENSITY_ALT_FT_PER_DEG_C: f64 = 120.0;
/// Avgas weight.
pub const FUEL_LB_PER_GAL: f64 = 6.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Rounds half away from zero to `places` decimal digits.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    // Normalise -0.0 so results compare and serialize cleanly
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
