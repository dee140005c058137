// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::performance::PerformanceConstants;
use crate::weight_balance::{CgEnvelope, FuelLoad, WeightStation};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Type-specific figures the calculator pages fall back on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub name: String,
    pub empty_weight_lb: f64,
    pub empty_arm_in: f64,
    pub front_seat_arm_in: f64,
    pub rear_seat_arm_in: f64,
    #[serde(default = "default_baggage_arm")]
    pub baggage_arm_in: f64,
    pub fuel_arm_in: f64,
    #[serde(default = "default_usable_fuel")]
    pub usable_fuel_gal: f64,
    pub max_takeoff_weight_lb: f64,
    #[serde(default)]
    pub cg_envelope: CgEnvelope,
    pub takeoff: PerformanceConstants,
    pub landing: PerformanceConstants,
    #[serde(default = "default_cruise_tas")]
    pub cruise_tas_kt: f64,
    #[serde(default = "default_fuel_burn")]
    pub fuel_burn_gph: f64,
}

fn default_baggage_arm() -> f64 {
    95.0
}

fn default_usable_fuel() -> f64 {
    53.0
}

fn default_cruise_tas() -> f64 {
    110.0
}

fn default_fuel_burn() -> f64 {
    8.5
}

impl Default for AircraftProfile {
    /// Cessna 172 loading and performance pattern.
    fn default() -> Self {
        Self {
            name: "Cessna 172".to_string(),
            empty_weight_lb: 1650.0,
            empty_arm_in: 38.5,
            front_seat_arm_in: 37.0,
            rear_seat_arm_in: 73.0,
            baggage_arm_in: default_baggage_arm(),
            fuel_arm_in: 48.0,
            usable_fuel_gal: default_usable_fuel(),
            max_takeoff_weight_lb: 2400.0,
            cg_envelope: CgEnvelope::default(),
            takeoff: PerformanceConstants {
                base_roll_ft: 950.0,
                base_total_ft: 1650.0,
                base_ref_speed_kt: 55.0,
                reference_weight_lb: 2300.0,
            },
            landing: PerformanceConstants {
                base_roll_ft: 575.0,
                base_total_ft: 1335.0,
                base_ref_speed_kt: 61.0,
                reference_weight_lb: 2300.0,
            },
            cruise_tas_kt: default_cruise_tas(),
            fuel_burn_gph: default_fuel_burn(),
        }
    }
}

impl AircraftProfile {
    /// Empty aircraft plus the occupied stations, in loading-sheet order.
    pub fn stations(&self, front_lb: f64, rear_lb: f64, baggage_lb: f64) -> Vec<WeightStation> {
        vec![
            WeightStation::new("Empty aircraft", self.empty_weight_lb, self.empty_arm_in),
            WeightStation::new("Front seats", front_lb, self.front_seat_arm_in),
            WeightStation::new("Rear seats", rear_lb, self.rear_seat_arm_in),
            WeightStation::new("Baggage", baggage_lb, self.baggage_arm_in),
        ]
    }

    pub fn fuel(&self, gallons: f64) -> FuelLoad {
        FuelLoad {
            gallons,
            arm_in: self.fuel_arm_in,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AircraftStore {
    config_path: PathBuf,
}

impl AircraftStore {
    pub fn new(config_root: &Path) -> Self {
        Self {
            config_path: config_root.join("aircraft.json"),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<AircraftProfile> {
        if !self.config_path.exists() {
            log::debug!(
                "No aircraft profile on disk; using built-in default — path={}",
                self.config_path.display()
            );
            return Ok(AircraftProfile::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read aircraft.json")?;

        serde_json::from_str(&content).context("Failed to parse aircraft.json")
    }

    pub fn save(&self, profile: &AircraftProfile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(profile).context("Failed to serialize aircraft profile")?;

        fs::write(&self.config_path, content).context("Failed to write aircraft.json")?;
        log::info!(
            "Aircraft profile saved — name={} path={}",
            profile.name,
            self.config_path.display()
        );
        Ok(())
    }
}
