// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::units::{all_finite, round_to};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RunwaySurface {
    #[default]
    Paved,
    GrassDry,
    GrassWet,
    SoftField,
}

impl RunwaySurface {
    pub const ALL: [RunwaySurface; 4] = [
        RunwaySurface::Paved,
        RunwaySurface::GrassDry,
        RunwaySurface::GrassWet,
        RunwaySurface::SoftField,
    ];

    pub fn takeoff_factor(self) -> f64 {
        match self {
            RunwaySurface::Paved => 1.0,
            RunwaySurface::GrassDry => 1.20,
            RunwaySurface::GrassWet => 1.30,
            RunwaySurface::SoftField => 1.45,
        }
    }

    pub fn landing_factor(self) -> f64 {
        match self {
            RunwaySurface::Paved => 1.0,
            RunwaySurface::GrassDry | RunwaySurface::GrassWet | RunwaySurface::SoftField => 1.15,
        }
    }
}

impl fmt::Display for RunwaySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunwaySurface::Paved => "paved",
            RunwaySurface::GrassDry => "grass-dry",
            RunwaySurface::GrassWet => "grass-wet",
            RunwaySurface::SoftField => "soft",
        };
        f.write_str(s)
    }
}

impl FromStr for RunwaySurface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "paved" | "asphalt" | "concrete" | "hard" => Ok(RunwaySurface::Paved),
            "grass" | "grass-dry" | "dry-grass" => Ok(RunwaySurface::GrassDry),
            "grass-wet" | "wet-grass" => Ok(RunwaySurface::GrassWet),
            "soft" | "soft-field" => Ok(RunwaySurface::SoftField),
            other => Err(format!(
                "unknown surface '{}' (expected paved, grass-dry, grass-wet or soft)",
                other
            )),
        }
    }
}

/// Book figures for one aircraft type at sea level, reference weight, no wind, paved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceConstants {
    pub base_roll_ft: f64,
    pub base_total_ft: f64,
    pub base_ref_speed_kt: f64,
    pub reference_weight_lb: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Takeoff,
    Landing,
}

impl Phase {
    /// Fractional distance increase per 1000 ft of density altitude.
    fn density_coefficient(self) -> f64 {
        match self {
            Phase::Takeoff => 0.10,
            Phase::Landing => 0.05,
        }
    }

    /// Fractional distance increase per 100 lb above reference weight.
    fn weight_coefficient(self) -> f64 {
        match self {
            Phase::Takeoff => 0.10,
            Phase::Landing => 0.05,
        }
    }

    fn surface_factor(self, surface: RunwaySurface) -> f64 {
        match self {
            Phase::Takeoff => surface.takeoff_factor(),
            Phase::Landing => surface.landing_factor(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TakeoffLandingInput {
    pub density_altitude_ft: f64,
    pub weight_lb: f64,
    /// Negative for a tailwind.
    pub headwind_component_kt: f64,
    pub surface: RunwaySurface,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TakeoffLandingResult {
    pub ground_roll_ft: f64,
    pub total_distance_ft: f64,
    /// Vr for takeoff, approach reference speed for landing.
    pub reference_speed_kt: f64,
}

impl TakeoffLandingResult {
    pub fn fits_runway(&self, runway_length_ft: f64) -> bool {
        runway_length_ft.is_finite() && self.total_distance_ft <= runway_length_ft
    }
}

/// Headwind improves distance 10% per 9 kt; tailwind costs 10% per 2 kt.
pub fn wind_factor(headwind_kt: f64) -> f64 {
    if headwind_kt >= 0.0 {
        1.0 - (headwind_kt / 9.0) * 0.10
    } else {
        1.0 + (headwind_kt.abs() / 2.0) * 0.10
    }
}

pub fn compute_takeoff(
    input: &TakeoffLandingInput,
    constants: &PerformanceConstants,
) -> TakeoffLandingResult {
    compute(Phase::Takeoff, input, constants)
}

pub fn compute_landing(
    input: &TakeoffLandingInput,
    constants: &PerformanceConstants,
) -> TakeoffLandingResult {
    compute(Phase::Landing, input, constants)
}

pub fn compute(
    phase: Phase,
    input: &TakeoffLandingInput,
    constants: &PerformanceConstants,
) -> TakeoffLandingResult {
    let TakeoffLandingInput {
        density_altitude_ft,
        weight_lb,
        headwind_component_kt,
        surface,
    } = *input;

    if !all_finite(&[
        density_altitude_ft,
        weight_lb,
        headwind_component_kt,
        constants.base_roll_ft,
        constants.base_total_ft,
        constants.base_ref_speed_kt,
        constants.reference_weight_lb,
    ]) || constants.reference_weight_lb <= 0.0
    {
        log::debug!(
            "{:?} performance inputs incomplete — da={} weight={} headwind={}",
            phase,
            density_altitude_ft,
            weight_lb,
            headwind_component_kt
        );
        return TakeoffLandingResult::default();
    }

    let density_factor = 1.0 + (density_altitude_ft / 1000.0) * phase.density_coefficient();
    let weight_factor =
        1.0 + ((weight_lb - constants.reference_weight_lb) / 100.0) * phase.weight_coefficient();
    let correction = density_factor
        * weight_factor
        * wind_factor(headwind_component_kt)
        * phase.surface_factor(surface);

    let reference_speed_kt = if weight_lb > 0.0 {
        round_to(
            constants.base_ref_speed_kt * (weight_lb / constants.reference_weight_lb).sqrt(),
            0,
        )
    } else {
        0.0
    };

    TakeoffLandingResult {
        ground_roll_ft: round_to((constants.base_roll_ft * correction).max(0.0), 0),
        total_distance_ft: round_to((constants.base_total_ft * correction).max(0.0), 0),
        reference_speed_kt,
    }
}
