// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! One explicit input record per calculator page, and a single pass that
//! derives every result from a snapshot of them.

use crate::aircraft::AircraftProfile;
use crate::atmosphere::{AtmosphericInput, AtmosphericResult};
use crate::climb::{self, ClimbDescentInput, ClimbDescentResult};
use crate::nav::{self, GroundSpeed, NavLegInput, NavLegResult};
use crate::performance::{self, RunwaySurface, TakeoffLandingInput, TakeoffLandingResult};
use crate::weight_balance::{self, WeightBalanceResult};
use crate::wind::{self, WindSolution, WindTriangleInput};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavPage {
    pub distance_nm: f64,
    /// Blank means "use the wind triangle".
    pub ground_speed_kt: Option<f64>,
    pub fuel_burn_gph: f64,
    #[serde(default)]
    pub departure_time: Option<NaiveTime>,
}

impl Default for NavPage {
    fn default() -> Self {
        Self {
            distance_nm: 100.0,
            ground_speed_kt: Some(110.0),
            fuel_burn_gph: 8.5,
            departure_time: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimbPage {
    pub start_altitude_ft: f64,
    pub target_altitude_ft: f64,
    pub vertical_speed_fpm: f64,
    /// Blank means "use the wind triangle".
    pub ground_speed_kt: Option<f64>,
    pub fuel_burn_gph: f64,
}

impl Default for ClimbPage {
    fn default() -> Self {
        Self {
            start_altitude_ft: 1000.0,
            target_altitude_ft: 8500.0,
            vertical_speed_fpm: 500.0,
            ground_speed_kt: Some(100.0),
            fuel_burn_gph: 8.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingPage {
    pub front_seats_lb: f64,
    pub rear_seats_lb: f64,
    #[serde(default)]
    pub baggage_lb: f64,
    pub fuel_gal: f64,
}

impl Default for LoadingPage {
    fn default() -> Self {
        Self {
            front_seats_lb: 380.0,
            rear_seats_lb: 0.0,
            baggage_lb: 0.0,
            fuel_gal: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunwayPage {
    /// Blank means "use the loaded weight".
    pub weight_lb: Option<f64>,
    pub headwind_kt: f64,
    #[serde(default)]
    pub surface: RunwaySurface,
    #[serde(default)]
    pub runway_length_ft: Option<f64>,
}

impl Default for RunwayPage {
    fn default() -> Self {
        Self {
            weight_lb: Some(2400.0),
            headwind_kt: 0.0,
            surface: RunwaySurface::Paved,
            runway_length_ft: Some(3000.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculatorInputs {
    #[serde(default)]
    pub atmosphere: AtmosphericInput,
    #[serde(default)]
    pub wind: WindTriangleInput,
    #[serde(default)]
    pub nav: NavPage,
    #[serde(default)]
    pub climb: ClimbPage,
    #[serde(default)]
    pub loading: LoadingPage,
    #[serde(default)]
    pub runway: RunwayPage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculatorReport {
    pub atmosphere: AtmosphericResult,
    pub wind: WindSolution,
    pub nav: NavLegResult,
    pub climb: ClimbDescentResult,
    pub weight_balance: WeightBalanceResult,
    pub takeoff: TakeoffLandingResult,
    pub landing: TakeoffLandingResult,
    /// `None` when no runway length was entered.
    pub takeoff_fits: Option<bool>,
    pub landing_fits: Option<bool>,
}

impl CalculatorInputs {
    pub fn nav_ground_speed(&self) -> GroundSpeed {
        GroundSpeed::explicit_or_wind(self.nav.ground_speed_kt, self.wind)
    }

    pub fn climb_ground_speed(&self) -> GroundSpeed {
        GroundSpeed::explicit_or_wind(self.climb.ground_speed_kt, self.wind)
    }

    pub fn compute(&self, aircraft: &AircraftProfile) -> CalculatorReport {
        let atmosphere = self.atmosphere.resolve();
        let wind = wind::solve(&self.wind);

        let nav = nav::plan_leg(&NavLegInput {
            distance_nm: self.nav.distance_nm,
            ground_speed_kt: self.nav_ground_speed().resolve(),
            fuel_burn_rate_gph: self.nav.fuel_burn_gph,
            departure_time: self.nav.departure_time,
        });

        let climb = climb::plan_transition(&ClimbDescentInput {
            start_altitude_ft: self.climb.start_altitude_ft,
            target_altitude_ft: self.climb.target_altitude_ft,
            vertical_speed_fpm: self.climb.vertical_speed_fpm,
            ground_speed_kt: self.climb_ground_speed().resolve(),
            fuel_burn_rate_gph: self.climb.fuel_burn_gph,
        });

        let stations = aircraft.stations(
            self.loading.front_seats_lb,
            self.loading.rear_seats_lb,
            self.loading.baggage_lb,
        );
        let weight_balance = weight_balance::resolve(
            &stations,
            aircraft.fuel(self.loading.fuel_gal),
            aircraft.max_takeoff_weight_lb,
            &aircraft.cg_envelope,
        );

        let runway_input = TakeoffLandingInput {
            density_altitude_ft: atmosphere.density_altitude_ft,
            weight_lb: self
                .runway
                .weight_lb
                .unwrap_or(weight_balance.total_weight_lb),
            headwind_component_kt: self.runway.headwind_kt,
            surface: self.runway.surface,
        };
        let takeoff = performance::compute_takeoff(&runway_input, &aircraft.takeoff);
        let landing = performance::compute_landing(&runway_input, &aircraft.landing);

        let runway_length = self.runway.runway_length_ft;
        CalculatorReport {
            atmosphere,
            wind,
            nav,
            climb,
            weight_balance,
            takeoff,
            landing,
            takeoff_fits: runway_length.map(|len| takeoff.fits_runway(len)),
            landing_fits: runway_length.map(|len| landing.fits_runway(len)),
        }
    }
}
