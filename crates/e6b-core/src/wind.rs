// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::units::{all_finite, normalize_degrees, round_to};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindTriangleInput {
    pub true_airspeed_kt: f64,
    pub wind_speed_kt: f64,
    /// Direction the wind blows from, degrees true.
    pub wind_direction_deg_t: f64,
    pub true_course_deg_t: f64,
    /// Signed variation, east positive.
    #[serde(default)]
    pub magnetic_variation_deg: f64,
}

impl Default for WindTriangleInput {
    fn default() -> Self {
        Self {
            true_airspeed_kt: 110.0,
            wind_speed_kt: 15.0,
            wind_direction_deg_t: 270.0,
            true_course_deg_t: 360.0,
            magnetic_variation_deg: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindTriangleResult {
    pub ground_speed_kt: f64,
    pub wind_correction_angle_deg: f64,
    pub true_heading_deg_t: f64,
    pub magnetic_heading_deg: f64,
    /// Positive is a headwind, negative a tailwind.
    pub headwind_component_kt: f64,
    /// Positive when the wind comes from the right of the course.
    pub crosswind_component_kt: f64,
}

/// Why a wind triangle cannot be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindLimit {
    /// The crosswind is stronger than the airspeed; no heading holds the course.
    CrosswindExceedsAirspeed,
    /// A heading exists but the aircraft makes no progress along the course.
    NoProgressAlongCourse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindSolution {
    /// Missing airspeed or a non-finite field; callers show zeros.
    Incomplete,
    Solved(WindTriangleResult),
    NoSolution(WindLimit),
}

impl WindSolution {
    pub fn result(&self) -> Option<&WindTriangleResult> {
        match self {
            WindSolution::Solved(result) => Some(result),
            _ => None,
        }
    }

    pub fn ground_speed_kt(&self) -> Option<f64> {
        self.result().map(|r| r.ground_speed_kt)
    }

    /// The solved result, or the all-zero result for incomplete or impossible input.
    pub fn or_zero(&self) -> WindTriangleResult {
        self.result().copied().unwrap_or_default()
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, WindSolution::Solved(_))
    }
}

/// Splits a wind into components along and across `reference_deg`.
/// Returns `(headwind, crosswind)`; headwind is negative for a tailwind,
/// crosswind is positive for wind from the right.
pub fn wind_components(wind_direction_deg: f64, wind_speed_kt: f64, reference_deg: f64) -> (f64, f64) {
    let angle = (wind_direction_deg - reference_deg).to_radians();
    (wind_speed_kt * angle.cos(), wind_speed_kt * angle.sin())
}

/// Resolves heading, ground speed and wind components for holding a true course.
pub fn solve(input: &WindTriangleInput) -> WindSolution {
    let WindTriangleInput {
        true_airspeed_kt: tas,
        wind_speed_kt: wind_speed,
        wind_direction_deg_t: wind_dir,
        true_course_deg_t: course,
        magnetic_variation_deg: variation,
    } = *input;

    if !all_finite(&[tas, wind_speed, wind_dir, course, variation]) || tas <= 0.0 {
        log::debug!(
            "Wind triangle input incomplete — tas={} wind={}@{} course={}",
            tas,
            wind_speed,
            wind_dir,
            course
        );
        return WindSolution::Incomplete;
    }

    let (headwind, crosswind) = wind_components(wind_dir, wind_speed, course);
    let angle_diff = (wind_dir - course).to_radians();

    let sine_wca = (wind_speed / tas) * angle_diff.sin();
    if sine_wca.abs() > 1.0 {
        log::debug!(
            "Wind triangle has no solution — crosswind ratio={:.3} tas={} wind={}@{}",
            sine_wca,
            tas,
            wind_speed,
            wind_dir
        );
        return WindSolution::NoSolution(WindLimit::CrosswindExceedsAirspeed);
    }

    let wca = sine_wca.asin();
    let ground_speed = tas * wca.cos() - headwind;
    if ground_speed <= 0.0 {
        log::debug!(
            "Wind triangle has no forward progress — ground_speed={:.1} tas={} headwind={:.1}",
            ground_speed,
            tas,
            headwind
        );
        return WindSolution::NoSolution(WindLimit::NoProgressAlongCourse);
    }

    let wca_deg = wca.to_degrees();
    let true_heading = course + wca_deg;
    let magnetic_heading = true_heading - variation;

    WindSolution::Solved(WindTriangleResult {
        ground_speed_kt: round_to(ground_speed, 0),
        wind_correction_angle_deg: round_to(wca_deg, 1),
        true_heading_deg_t: normalize_degrees(round_to(true_heading, 0)),
        magnetic_heading_deg: normalize_degrees(round_to(magnetic_heading, 0)),
        headwind_component_kt: round_to(headwind, 1),
        crosswind_component_kt: round_to(crosswind, 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(tas: f64, wind_dir: f64, wind_speed: f64, course: f64) -> WindTriangleInput {
        WindTriangleInput {
            true_airspeed_kt: tas,
            wind_speed_kt: wind_speed,
            wind_direction_deg_t: wind_dir,
            true_course_deg_t: course,
            magnetic_variation_deg: 0.0,
        }
    }

    #[test]
    fn test_left_crosswind_default_fields() {
        // Dashboard defaults: 110 kt TAS, 270 at 15, course 360
        let r = *solve(&WindTriangleInput::default()).result().unwrap();
        assert_eq!(r.ground_speed_kt, 109.0);
        assert_eq!(r.wind_correction_angle_deg, -7.8);
        assert_eq!(r.true_heading_deg_t, 352.0);
        assert_eq!(r.magnetic_heading_deg, 352.0);
        assert_eq!(r.headwind_component_kt, 0.0);
        assert_eq!(r.crosswind_component_kt, -15.0);
    }

    #[test]
    fn test_right_crosswind() {
        let r = solve(&input(100.0, 90.0, 20.0, 0.0)).or_zero();
        assert_eq!(r.wind_correction_angle_deg, 11.5);
        assert_eq!(r.true_heading_deg_t, 12.0);
        assert_eq!(r.ground_speed_kt, 98.0);
        assert_eq!(r.crosswind_component_kt, 20.0);
    }

    #[test]
    fn test_magnetic_variation_east_subtracts() {
        let mut i = input(120.0, 0.0, 0.0, 5.0);
        i.magnetic_variation_deg = 10.0;
        let r = solve(&i).or_zero();
        assert_eq!(r.true_heading_deg_t, 5.0);
        assert_eq!(r.magnetic_heading_deg, 355.0);

        i.magnetic_variation_deg = -10.0;
        assert_eq!(solve(&i).or_zero().magnetic_heading_deg, 15.0);
    }

    #[test]
    fn test_zero_airspeed_is_incomplete() {
        assert_eq!(solve(&input(0.0, 90.0, 10.0, 0.0)), WindSolution::Incomplete);
        assert_eq!(solve(&input(-5.0, 90.0, 10.0, 0.0)), WindSolution::Incomplete);
        assert_eq!(
            solve(&input(100.0, f64::NAN, 10.0, 0.0)).or_zero(),
            WindTriangleResult::default()
        );
    }

    #[test]
    fn test_wind_stronger_than_airspeed_abeam() {
        assert_eq!(
            solve(&input(50.0, 90.0, 60.0, 0.0)),
            WindSolution::NoSolution(WindLimit::CrosswindExceedsAirspeed)
        );
    }

    #[test]
    fn test_headwind_stronger_than_airspeed() {
        assert_eq!(
            solve(&input(50.0, 0.0, 60.0, 0.0)),
            WindSolution::NoSolution(WindLimit::NoProgressAlongCourse)
        );
        assert_eq!(solve(&input(50.0, 0.0, 60.0, 0.0)).ground_speed_kt(), None);
    }

    #[test]
    fn test_wind_components() {
        let (head, cross) = wind_components(310.0, 20.0, 270.0);
        assert!((head - 15.32).abs() < 0.01);
        assert!((cross - 12.86).abs() < 0.01);

        let (head, cross) = wind_components(90.0, 10.0, 270.0);
        assert!((head + 10.0).abs() < 1e-9);
        assert!(cross.abs() < 1e-9);
    }
}
