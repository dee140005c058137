// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use e6b_core::wind::{solve, WindLimit, WindSolution, WindTriangleInput};

fn triangle(tas: f64, wind_dir: f64, wind_speed: f64, course: f64) -> WindTriangleInput {
    WindTriangleInput {
        true_airspeed_kt: tas,
        wind_speed_kt: wind_speed,
        wind_direction_deg_t: wind_dir,
        true_course_deg_t: course,
        magnetic_variation_deg: 0.0,
    }
}

#[test]
fn test_calm_wind_flies_the_course() {
    for course in [0.0, 45.0, 180.0, 275.0] {
        let r = solve(&triangle(120.0, 0.0, 0.0, course)).or_zero();
        assert_eq!(r.ground_speed_kt, 120.0);
        assert_eq!(r.wind_correction_angle_deg, 0.0);
        assert_eq!(r.true_heading_deg_t, course);
    }
}

#[test]
fn test_direct_headwind_and_tailwind() {
    let head = solve(&triangle(100.0, 360.0, 20.0, 360.0)).or_zero();
    assert_eq!(head.ground_speed_kt, 80.0);
    assert_eq!(head.headwind_component_kt, 20.0);
    assert_eq!(head.wind_correction_angle_deg, 0.0);

    let tail = solve(&triangle(100.0, 180.0, 20.0, 360.0)).or_zero();
    assert_eq!(tail.ground_speed_kt, 120.0);
    assert_eq!(tail.headwind_component_kt, -20.0);
}

#[test]
fn test_crosswind_stronger_than_airspeed_has_no_solution() {
    let solution = solve(&triangle(50.0, 90.0, 60.0, 0.0));
    assert_eq!(
        solution,
        WindSolution::NoSolution(WindLimit::CrosswindExceedsAirspeed)
    );
    assert_eq!(solution.ground_speed_kt(), None);
    assert_eq!(solution.or_zero().ground_speed_kt, 0.0);
}

#[test]
fn test_headwind_stronger_than_airspeed_has_no_solution() {
    assert_eq!(
        solve(&triangle(50.0, 0.0, 60.0, 0.0)),
        WindSolution::NoSolution(WindLimit::NoProgressAlongCourse)
    );
}

#[test]
fn test_heading_always_normalized() {
    for course in (0..360).step_by(15) {
        for wind_dir in (0..360).step_by(30) {
            let solution = solve(&triangle(110.0, wind_dir as f64, 25.0, course as f64));
            let r = solution
                .result()
                .unwrap_or_else(|| panic!("course {} wind {} unsolved", course, wind_dir));
            assert!((0.0..360.0).contains(&r.true_heading_deg_t));
            assert!((0.0..360.0).contains(&r.magnetic_heading_deg));
            assert!(r.ground_speed_kt > 0.0);
        }
    }
}

#[test]
fn test_mirrored_winds_mirror_the_correction() {
    let right = solve(&triangle(110.0, 130.0, 25.0, 90.0)).or_zero();
    let left = solve(&triangle(110.0, 50.0, 25.0, 90.0)).or_zero();
    assert_eq!(right.wind_correction_angle_deg, -left.wind_correction_angle_deg);
    assert_eq!(right.ground_speed_kt, left.ground_speed_kt);
    assert!(right.wind_correction_angle_deg > 0.0);
    assert!(right.crosswind_component_kt > 0.0);
    assert!(left.crosswind_component_kt < 0.0);
}

#[test]
fn test_solution_serializes_with_marker() {
    let json = serde_json::to_string(&solve(&triangle(50.0, 90.0, 60.0, 0.0))).unwrap();
    assert!(json.contains("CrosswindExceedsAirspeed"));
    assert!(!json.contains("NaN"));
}
