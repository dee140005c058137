// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use approx::assert_abs_diff_eq;
use chrono::NaiveTime;
use e6b_core::atmosphere::{compute_density_altitude, derive_pressure_altitude, AtmosphericInput};
use e6b_core::climb::{plan_transition, ClimbDescentInput, VerticalDirection};
use e6b_core::nav::{plan_leg, plan_route, GroundSpeed, NavLegInput};
use e6b_core::wind::WindTriangleInput;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_high_altimeter_lowers_pressure_altitude() {
    assert_eq!(derive_pressure_altitude(5000.0, 30.12), 4800.0);
    assert_eq!(derive_pressure_altitude(5000.0, 29.72), 5200.0);
    assert_eq!(derive_pressure_altitude(5000.0, 29.92), 5000.0);
}

#[test]
fn test_hot_day_density_altitude() {
    let result = AtmosphericInput {
        pressure_altitude_ft: Some(5000.0),
        outside_air_temp_c: 25.0,
        ..Default::default()
    }
    .resolve();
    assert_abs_diff_eq!(result.isa_temp_c, 5.0);
    assert_abs_diff_eq!(result.isa_deviation_c, 20.0);
    assert_eq!(result.density_altitude_ft, 7400.0);
}

#[test]
fn test_density_altitude_rises_with_temperature() {
    let mut previous = f64::MIN;
    for oat in -20..=40 {
        let da = compute_density_altitude(3000.0, oat as f64);
        assert!(da > previous, "oat {} gave {}", oat, da);
        previous = da;
    }
}

#[test]
fn test_non_finite_atmosphere_is_zero() {
    assert_eq!(compute_density_altitude(f64::NAN, 15.0), 0.0);
    assert_eq!(derive_pressure_altitude(1000.0, f64::INFINITY), 0.0);
}

#[test]
fn test_leg_past_midnight() {
    let result = plan_leg(&NavLegInput {
        distance_nm: 120.0,
        ground_speed_kt: 120.0,
        fuel_burn_rate_gph: 10.0,
        departure_time: Some(hm(23, 30)),
    });
    assert_eq!(result.time_enroute_minutes, 60.0);
    assert_abs_diff_eq!(result.fuel_required_gal, 10.0);
    assert_eq!(result.eta, Some(hm(0, 30)));
}

#[test]
fn test_leg_without_ground_speed_is_zero() {
    let result = plan_leg(&NavLegInput {
        distance_nm: 120.0,
        ground_speed_kt: 0.0,
        fuel_burn_rate_gph: 10.0,
        departure_time: Some(hm(12, 0)),
    });
    assert_eq!(result.time_enroute_minutes, 0.0);
    assert_eq!(result.fuel_required_gal, 0.0);
    assert_eq!(result.eta, None);
}

#[test]
fn test_route_chains_arrival_times() {
    let legs = [
        NavLegInput {
            distance_nm: 60.0,
            ground_speed_kt: 120.0,
            fuel_burn_rate_gph: 8.0,
            departure_time: Some(hm(10, 0)),
        },
        NavLegInput {
            distance_nm: 90.0,
            ground_speed_kt: 90.0,
            fuel_burn_rate_gph: 8.0,
            departure_time: None,
        },
    ];
    let route = plan_route(&legs);
    assert_eq!(route.legs.len(), 2);
    assert_eq!(route.legs[0].eta, Some(hm(10, 30)));
    assert_eq!(route.eta, Some(hm(11, 30)));
    assert_abs_diff_eq!(route.total_distance_nm, 150.0);
    assert_abs_diff_eq!(route.total_time_minutes, 90.0);
    assert_abs_diff_eq!(route.total_fuel_gal, 12.0);
}

#[test]
fn test_ground_speed_falls_back_to_wind_triangle() {
    let wind = WindTriangleInput::default();
    assert_eq!(GroundSpeed::explicit_or_wind(Some(95.0), wind).resolve(), 95.0);
    assert_eq!(GroundSpeed::explicit_or_wind(None, wind).resolve(), 109.0);

    let impossible = WindTriangleInput {
        true_airspeed_kt: 40.0,
        wind_speed_kt: 60.0,
        ..wind
    };
    assert_eq!(GroundSpeed::explicit_or_wind(None, impossible).resolve(), 0.0);
}

#[test]
fn test_climb_and_descent_are_symmetric() {
    let climb = ClimbDescentInput {
        start_altitude_ft: 1000.0,
        target_altitude_ft: 8500.0,
        vertical_speed_fpm: 500.0,
        ground_speed_kt: 100.0,
        fuel_burn_rate_gph: 10.0,
    };
    let up = plan_transition(&climb);
    assert_eq!(up.direction, VerticalDirection::Climb);
    assert_eq!(up.time_minutes, 15.0);
    assert_abs_diff_eq!(up.distance_nm, 25.0);
    assert_abs_diff_eq!(up.fuel_gal, 2.5);

    let down = plan_transition(&ClimbDescentInput {
        start_altitude_ft: 8500.0,
        target_altitude_ft: 1000.0,
        ..climb
    });
    assert_eq!(down.direction, VerticalDirection::Descent);
    assert_eq!(down.time_minutes, up.time_minutes);
    assert_abs_diff_eq!(down.distance_nm, up.distance_nm);
}

#[test]
fn test_level_and_zero_rate() {
    let level = plan_transition(&ClimbDescentInput {
        start_altitude_ft: 4500.0,
        target_altitude_ft: 4500.0,
        vertical_speed_fpm: 500.0,
        ground_speed_kt: 100.0,
        fuel_burn_rate_gph: 8.0,
    });
    assert_eq!(level.direction, VerticalDirection::Level);
    assert_eq!(level.time_minutes, 0.0);

    let stalled = plan_transition(&ClimbDescentInput {
        vertical_speed_fpm: 0.0,
        target_altitude_ft: 6500.0,
        start_altitude_ft: 4500.0,
        ground_speed_kt: 100.0,
        fuel_burn_rate_gph: 8.0,
    });
    assert_eq!(stalled.time_minutes, 0.0);
    assert_eq!(stalled.distance_nm, 0.0);
}
