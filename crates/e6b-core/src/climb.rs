// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::units::{all_finite, round_to};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimbDescentInput {
    pub start_altitude_ft: f64,
    pub target_altitude_ft: f64,
    /// Rate of climb or descent, always positive.
    pub vertical_speed_fpm: f64,
    pub ground_speed_kt: f64,
    pub fuel_burn_rate_gph: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerticalDirection {
    Climb,
    Descent,
    #[default]
    Level,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClimbDescentResult {
    pub time_minutes: f64,
    pub distance_nm: f64,
    pub fuel_gal: f64,
    pub direction: VerticalDirection,
}

/// Time, ground distance and fuel to change altitude at a constant vertical speed.
pub fn plan_transition(input: &ClimbDescentInput) -> ClimbDescentResult {
    let ClimbDescentInput {
        start_altitude_ft,
        target_altitude_ft,
        vertical_speed_fpm,
        ground_speed_kt,
        fuel_burn_rate_gph,
    } = *input;

    if !all_finite(&[
        start_altitude_ft,
        target_altitude_ft,
        vertical_speed_fpm,
        ground_speed_kt,
        fuel_burn_rate_gph,
    ]) || vertical_speed_fpm <= 0.0
    {
        log::debug!(
            "Altitude change cannot be planned — from={} to={} rate={}",
            start_altitude_ft,
            target_altitude_ft,
            vertical_speed_fpm
        );
        return ClimbDescentResult::default();
    }

    let delta = target_altitude_ft - start_altitude_ft;
    let direction = if delta > 0.0 {
        VerticalDirection::Climb
    } else if delta < 0.0 {
        VerticalDirection::Descent
    } else {
        VerticalDirection::Level
    };

    // Distance and fuel follow the rounded minutes, as read off the time display
    let time_minutes = round_to(delta.abs() / vertical_speed_fpm, 0);
    let time_hours = time_minutes / 60.0;

    ClimbDescentResult {
        time_minutes,
        distance_nm: round_to(time_hours * ground_speed_kt, 1),
        fuel_gal: round_to(time_hours * fuel_burn_rate_gph, 1),
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_climb_to_cruise() {
        let r = plan_transition(&ClimbDescentInput {
            start_altitude_ft: 1000.0,
            target_altitude_ft: 8500.0,
            vertical_speed_fpm: 500.0,
            ground_speed_kt: 100.0,
            fuel_burn_rate_gph: 10.0,
        });
        assert_eq!(r.time_minutes, 15.0);
        assert_eq!(r.distance_nm, 25.0);
        assert_eq!(r.fuel_gal, 2.5);
        assert_eq!(r.direction, VerticalDirection::Climb);
    }

    #[test]
    fn test_descent_uses_absolute_difference() {
        let r = plan_transition(&ClimbDescentInput {
            start_altitude_ft: 9500.0,
            target_altitude_ft: 1500.0,
            vertical_speed_fpm: 500.0,
            ground_speed_kt: 140.0,
            fuel_burn_rate_gph: 6.0,
        });
        assert_eq!(r.time_minutes, 16.0);
        assert_eq!(r.distance_nm, 37.3);
        assert_eq!(r.fuel_gal, 1.6);
        assert_eq!(r.direction, VerticalDirection::Descent);
    }

    #[test]
    fn test_non_positive_rate_is_zeroed() {
        let mut input = ClimbDescentInput {
            start_altitude_ft: 0.0,
            target_altitude_ft: 3000.0,
            vertical_speed_fpm: 0.0,
            ground_speed_kt: 90.0,
            fuel_burn_rate_gph: 8.0,
        };
        assert_eq!(plan_transition(&input), ClimbDescentResult::default());
        input.vertical_speed_fpm = -500.0;
        assert_eq!(plan_transition(&input), ClimbDescentResult::default());
    }

    #[test]
    fn test_level_flight() {
        let r = plan_transition(&ClimbDescentInput {
            start_altitude_ft: 4500.0,
            target_altitude_ft: 4500.0,
            vertical_speed_fpm: 500.0,
            ground_speed_kt: 100.0,
            fuel_burn_rate_gph: 8.0,
        });
        assert_eq!(r.time_minutes, 0.0);
        assert_eq!(r.direction, VerticalDirection::Level);
    }
}
