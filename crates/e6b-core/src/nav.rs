// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::units::{all_finite, round_to, MINUTES_PER_DAY};
use crate::wind::{self, WindTriangleInput};
use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Where a planner's ground speed comes from. Resolved by the caller before planning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GroundSpeed {
    Known(f64),
    FromWind(WindTriangleInput),
}

impl GroundSpeed {
    /// Picks the explicit value when present, otherwise the wind triangle.
    pub fn explicit_or_wind(explicit: Option<f64>, wind: WindTriangleInput) -> Self {
        match explicit {
            Some(gs) => GroundSpeed::Known(gs),
            None => GroundSpeed::FromWind(wind),
        }
    }

    /// Ground speed in knots; 0 when the wind triangle has no solution.
    pub fn resolve(&self) -> f64 {
        match self {
            GroundSpeed::Known(gs) => *gs,
            GroundSpeed::FromWind(input) => wind::solve(input).ground_speed_kt().unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavLegInput {
    pub distance_nm: f64,
    pub ground_speed_kt: f64,
    pub fuel_burn_rate_gph: f64,
    #[serde(default)]
    pub departure_time: Option<NaiveTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NavLegResult {
    pub time_enroute_minutes: f64,
    pub fuel_required_gal: f64,
    /// `None` when the departure time is unknown or the leg cannot be planned.
    pub eta: Option<NaiveTime>,
}

/// Time, fuel and ETA for a single leg flown at constant ground speed.
pub fn plan_leg(input: &NavLegInput) -> NavLegResult {
    let NavLegInput {
        distance_nm,
        ground_speed_kt,
        fuel_burn_rate_gph,
        departure_time,
    } = *input;

    if !is_plannable(input) {
        log::debug!(
            "Leg cannot be planned — distance={} gs={} burn={}",
            distance_nm,
            ground_speed_kt,
            fuel_burn_rate_gph
        );
        return NavLegResult::default();
    }

    let time_hours = distance_nm / ground_speed_kt;
    let time_enroute_minutes = round_to(time_hours * 60.0, 0);
    let fuel_required_gal = round_to(time_hours * fuel_burn_rate_gph, 1);

    NavLegResult {
        time_enroute_minutes,
        fuel_required_gal,
        eta: departure_time.map(|t| add_minutes_wrapping(t, time_enroute_minutes)),
    }
}

fn is_plannable(leg: &NavLegInput) -> bool {
    all_finite(&[leg.distance_nm, leg.ground_speed_kt, leg.fuel_burn_rate_gph])
        && leg.ground_speed_kt > 0.0
}

/// Adds whole minutes to a time of day, wrapping across midnight.
pub fn add_minutes_wrapping(time: NaiveTime, minutes: f64) -> NaiveTime {
    let within_day = minutes.rem_euclid(MINUTES_PER_DAY) as i64;
    let (eta, _) = time.overflowing_add_signed(Duration::minutes(within_day));
    eta
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteSummary {
    pub legs: Vec<NavLegResult>,
    pub total_distance_nm: f64,
    pub total_time_minutes: f64,
    pub total_fuel_gal: f64,
    pub eta: Option<NaiveTime>,
}

/// Plans consecutive legs. Each leg departs when the previous one arrives, so only
/// the first leg's departure time is used.
pub fn plan_route(legs: &[NavLegInput]) -> RouteSummary {
    let departure = legs.first().and_then(|l| l.departure_time);
    let mut summary = RouteSummary::default();
    let mut clock = departure;
    let mut plannable = true;

    for leg in legs {
        let result = plan_leg(&NavLegInput {
            departure_time: clock,
            ..*leg
        });
        if !is_plannable(leg) {
            plannable = false;
        }
        clock = result.eta;
        if leg.distance_nm.is_finite() {
            summary.total_distance_nm += leg.distance_nm;
        }
        summary.total_time_minutes += result.time_enroute_minutes;
        summary.total_fuel_gal += result.fuel_required_gal;
        summary.legs.push(result);
    }

    summary.total_distance_nm = round_to(summary.total_distance_nm, 1);
    summary.total_fuel_gal = round_to(summary.total_fuel_gal, 1);
    summary.eta = if plannable { clock } else { None };
    summary
}
