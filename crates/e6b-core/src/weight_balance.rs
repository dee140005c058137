// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Loading computation and CG envelope checks.
//!
//! Stations are summed into a total weight and moment; the CG is checked either
//! against a plain forward/aft interval or against a polygon in (CG, weight)
//! space, which is how the certified envelope in a POH is actually drawn.

use crate::units::{all_finite, round_to, FUEL_LB_PER_GAL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightStation {
    pub name: String,
    pub weight_lb: f64,
    pub arm_in: f64,
}

impl WeightStation {
    pub fn new(name: impl Into<String>, weight_lb: f64, arm_in: f64) -> Self {
        Self {
            name: name.into(),
            weight_lb,
            arm_in,
        }
    }

    pub fn moment(&self) -> f64 {
        self.weight_lb * self.arm_in
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelLoad {
    pub gallons: f64,
    pub arm_in: f64,
}

impl FuelLoad {
    pub fn weight_lb(&self) -> f64 {
        self.gallons * FUEL_LB_PER_GAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopePoint {
    pub cg_in: f64,
    pub weight_lb: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CgEnvelope {
    /// Weight-independent limits, both inclusive.
    Range { forward_in: f64, aft_in: f64 },
    /// Vertices in order (either winding). Points on an edge are inside.
    Polygon { points: Vec<EnvelopePoint> },
}

impl Default for CgEnvelope {
    fn default() -> Self {
        CgEnvelope::Range {
            forward_in: 35.0,
            aft_in: 47.3,
        }
    }
}

impl CgEnvelope {
    pub fn polygon(points: &[(f64, f64)]) -> Self {
        CgEnvelope::Polygon {
            points: points
                .iter()
                .map(|&(cg_in, weight_lb)| EnvelopePoint { cg_in, weight_lb })
                .collect(),
        }
    }

    pub fn contains(&self, cg_in: f64, weight_lb: f64) -> bool {
        if !all_finite(&[cg_in, weight_lb]) {
            return false;
        }
        match self {
            CgEnvelope::Range { forward_in, aft_in } => cg_in >= *forward_in && cg_in <= *aft_in,
            CgEnvelope::Polygon { points } => polygon_contains(points, cg_in, weight_lb),
        }
    }
}

const EDGE_TOLERANCE: f64 = 1e-9;

fn polygon_contains(points: &[EnvelopePoint], x: f64, y: f64) -> bool {
    if points.len() < 3 {
        log::warn!(
            "CG envelope polygon is degenerate; nothing is inside — vertices={}",
            points.len()
        );
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (points[i].cg_in, points[i].weight_lb);
        let (xj, yj) = (points[j].cg_in, points[j].weight_lb);

        if on_segment(x, y, xi, yi, xj, yj) {
            return true;
        }

        // Even-odd ray cast towards +x
        if (yi > y) != (yj > y) {
            let x_cross = xi + (y - yi) * (xj - xi) / (yj - yi);
            if x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

fn on_segment(x: f64, y: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    let cross = (x - x1) * (y2 - y1) - (y - y1) * (x2 - x1);
    let scale = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt().max(1.0);
    if cross.abs() > EDGE_TOLERANCE * scale {
        return false;
    }
    x >= x1.min(x2) - EDGE_TOLERANCE
        && x <= x1.max(x2) + EDGE_TOLERANCE
        && y >= y1.min(y2) - EDGE_TOLERANCE
        && y <= y1.max(y2) + EDGE_TOLERANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightBalanceResult {
    pub total_weight_lb: f64,
    pub total_moment_lb_in: f64,
    /// 0 when the total weight is 0.
    pub center_of_gravity_in: f64,
    pub is_over_max_weight: bool,
    pub is_cg_within_envelope: bool,
    /// Remaining allowance below max takeoff weight; negative when overweight.
    pub margin_lb: f64,
}

/// Totals the stations plus fuel and checks the result against the limits.
///
/// Weight is reported to the nearest pound, moment to the nearest lb-in and CG
/// to two decimals. Both flags are evaluated on those reported figures.
pub fn resolve(
    stations: &[WeightStation],
    fuel: FuelLoad,
    max_takeoff_weight_lb: f64,
    envelope: &CgEnvelope,
) -> WeightBalanceResult {
    let fuel_weight = fuel.weight_lb();
    let mut weight = fuel_weight;
    let mut moment = fuel_weight * fuel.arm_in;
    for station in stations {
        weight += station.weight_lb;
        moment += station.moment();
    }

    if !all_finite(&[weight, moment, max_takeoff_weight_lb]) {
        log::debug!(
            "Loading inputs incomplete — stations={} fuel_gal={}",
            stations.len(),
            fuel.gallons
        );
        return WeightBalanceResult::default();
    }

    let total_weight_lb = round_to(weight, 0);
    let total_moment_lb_in = round_to(moment, 0);

    let (center_of_gravity_in, is_cg_within_envelope) = if weight == 0.0 {
        log::debug!("Total weight is zero; CG undefined");
        (0.0, false)
    } else {
        let cg = round_to(moment / weight, 2);
        (cg, envelope.contains(cg, total_weight_lb))
    };

    WeightBalanceResult {
        total_weight_lb,
        total_moment_lb_in,
        center_of_gravity_in,
        is_over_max_weight: total_weight_lb > max_takeoff_weight_lb,
        is_cg_within_envelope,
        margin_lb: round_to(max_takeoff_weight_lb - total_weight_lb, 0),
    }
}
