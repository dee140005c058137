// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use e6b_core::performance::{compute_landing, compute_takeoff, RunwaySurface, TakeoffLandingInput};
use e6b_core::AircraftProfile;

fn at(density_altitude_ft: f64, weight_lb: f64, headwind_kt: f64) -> TakeoffLandingInput {
    TakeoffLandingInput {
        density_altitude_ft,
        weight_lb,
        headwind_component_kt: headwind_kt,
        surface: RunwaySurface::Paved,
    }
}

#[test]
fn test_reference_conditions_give_book_figures() {
    let aircraft = AircraftProfile::default();
    let takeoff = compute_takeoff(&at(0.0, 2300.0, 0.0), &aircraft.takeoff);
    assert_eq!(takeoff.ground_roll_ft, 950.0);
    assert_eq!(takeoff.total_distance_ft, 1650.0);
    assert_eq!(takeoff.reference_speed_kt, 55.0);

    let landing = compute_landing(&at(0.0, 2300.0, 0.0), &aircraft.landing);
    assert_eq!(landing.ground_roll_ft, 575.0);
    assert_eq!(landing.total_distance_ft, 1335.0);
    assert_eq!(landing.reference_speed_kt, 61.0);
}

#[test]
fn test_distance_grows_with_density_altitude_and_weight() {
    let c = AircraftProfile::default().takeoff;
    let mut previous = 0.0;
    for da in (0..=8000).step_by(1000) {
        let roll = compute_takeoff(&at(da as f64, 2300.0, 0.0), &c).ground_roll_ft;
        assert!(roll > previous);
        previous = roll;
    }

    let light = compute_takeoff(&at(2000.0, 2000.0, 0.0), &c);
    let heavy = compute_takeoff(&at(2000.0, 2400.0, 0.0), &c);
    assert!(heavy.total_distance_ft > light.total_distance_ft);
    assert!(heavy.reference_speed_kt > light.reference_speed_kt);
}

#[test]
fn test_tailwind_hurts_more_than_headwind_helps() {
    let c = AircraftProfile::default().takeoff;
    let calm = compute_takeoff(&at(0.0, 2300.0, 0.0), &c).ground_roll_ft;
    let head = compute_takeoff(&at(0.0, 2300.0, 5.0), &c).ground_roll_ft;
    let tail = compute_takeoff(&at(0.0, 2300.0, -5.0), &c).ground_roll_ft;
    assert!(head < calm);
    assert!(tail > calm);
    assert!(tail - calm > calm - head);
}

#[test]
fn test_surfaces_never_shorten_the_roll() {
    let aircraft = AircraftProfile::default();
    let paved_takeoff = compute_takeoff(&at(1000.0, 2300.0, 0.0), &aircraft.takeoff);
    let paved_landing = compute_landing(&at(1000.0, 2300.0, 0.0), &aircraft.landing);
    for surface in RunwaySurface::ALL {
        let input = TakeoffLandingInput {
            surface,
            ..at(1000.0, 2300.0, 0.0)
        };
        let takeoff = compute_takeoff(&input, &aircraft.takeoff);
        let landing = compute_landing(&input, &aircraft.landing);
        assert!(takeoff.ground_roll_ft >= paved_takeoff.ground_roll_ft);
        assert!(landing.ground_roll_ft >= paved_landing.ground_roll_ft);
        assert_eq!(surface.to_string().parse::<RunwaySurface>(), Ok(surface));
    }
}

#[test]
fn test_extreme_headwind_clamps_at_zero() {
    let c = AircraftProfile::default().takeoff;
    let result = compute_takeoff(&at(0.0, 2300.0, 120.0), &c);
    assert_eq!(result.ground_roll_ft, 0.0);
    assert_eq!(result.total_distance_ft, 0.0);
    assert!(result.fits_runway(0.0));
}

#[test]
fn test_runway_fit() {
    let c = AircraftProfile::default().takeoff;
    let result = compute_takeoff(&at(0.0, 2300.0, 0.0), &c);
    assert!(result.fits_runway(1650.0));
    assert!(!result.fits_runway(1649.0));
    assert!(!result.fits_runway(f64::NAN));
}
