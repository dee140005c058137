// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::units::{
    all_finite, round_to, DENSITY_ALT_FT_PER_DEG_C, FEET_PER_INHG, ISA_LAPSE_C_PER_1000FT,
    ISA_SEA_LEVEL_TEMP_C, STANDARD_ALTIMETER_INHG,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericInput {
    pub field_elevation_ft: f64,
    pub altimeter_inhg: f64,
    /// Overrides the value derived from elevation and altimeter setting when present.
    #[serde(default)]
    pub pressure_altitude_ft: Option<f64>,
    pub outside_air_temp_c: f64,
}

impl Default for AtmosphericInput {
    fn default() -> Self {
        Self {
            field_elevation_ft: 0.0,
            altimeter_inhg: STANDARD_ALTIMETER_INHG,
            pressure_altitude_ft: None,
            outside_air_temp_c: ISA_SEA_LEVEL_TEMP_C,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AtmosphericResult {
    pub pressure_altitude_ft: f64,
    pub density_altitude_ft: f64,
    pub isa_temp_c: f64,
    pub isa_deviation_c: f64,
}

impl AtmosphericInput {
    pub fn resolve(&self) -> AtmosphericResult {
        let pressure_altitude_ft = match self.pressure_altitude_ft {
            Some(pa) => pa,
            None => derive_pressure_altitude(self.field_elevation_ft, self.altimeter_inhg),
        };
        let density_altitude_ft =
            compute_density_altitude(pressure_altitude_ft, self.outside_air_temp_c);

        if !all_finite(&[pressure_altitude_ft, self.outside_air_temp_c]) {
            return AtmosphericResult::default();
        }

        let isa_temp_c = isa_temperature_c(pressure_altitude_ft);
        AtmosphericResult {
            pressure_altitude_ft,
            density_altitude_ft,
            isa_temp_c: round_to(isa_temp_c, 1),
            isa_deviation_c: round_to(self.outside_air_temp_c - isa_temp_c, 1),
        }
    }
}

/// Pressure altitude from field elevation and the local altimeter setting, to the nearest foot.
/// Non-finite input yields 0.
pub fn derive_pressure_altitude(field_elevation_ft: f64, altimeter_inhg: f64) -> f64 {
    if !all_finite(&[field_elevation_ft, altimeter_inhg]) {
        log::debug!(
            "Pressure altitude inputs incomplete — elevation={} altimeter={}",
            field_elevation_ft,
            altimeter_inhg
        );
        return 0.0;
    }
    round_to(
        field_elevation_ft + (STANDARD_ALTIMETER_INHG - altimeter_inhg) * FEET_PER_INHG,
        0,
    )
}

/// Standard temperature at the given pressure altitude, using the 2 °C per 1000 ft rule.
pub fn isa_temperature_c(pressure_altitude_ft: f64) -> f64 {
    ISA_SEA_LEVEL_TEMP_C - ISA_LAPSE_C_PER_1000FT * (pressure_altitude_ft / 1000.0)
}

/// Density altitude to the nearest foot. Non-finite input yields 0.
pub fn compute_density_altitude(pressure_altitude_ft: f64, outside_air_temp_c: f64) -> f64 {
    if !all_finite(&[pressure_altitude_ft, outside_air_temp_c]) {
        log::debug!(
            "Density altitude inputs incomplete — pressure_alt={} oat={}",
            pressure_altitude_ft,
            outside_air_temp_c
        );
        return 0.0;
    }
    let isa_temp_c = isa_temperature_c(pressure_altitude_ft);
    round_to(
        pressure_altitude_ft + DENSITY_ALT_FT_PER_DEG_C * (outside_air_temp_c - isa_temp_c),
        0,
    )
}
