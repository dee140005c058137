// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Flight computer engine: pure calculations for VFR planning, plus the small
//! amount of state kept around them (aircraft profile, working checklist, checkpoints).
//!
//! Every calculation takes its inputs by value and returns a plain result. None
//! of them fail: incomplete input produces a zeroed result, and input with no
//! physical answer produces an explicit marker instead of NaN.

pub mod aircraft;
pub mod atmosphere;
pub mod calculator;
pub mod checklist;
pub mod checkpoint;
pub mod climb;
pub mod nav;
pub mod performance;
pub mod units;
pub mod weight_balance;
pub mod wind;

use std::path::PathBuf;

pub use aircraft::{AircraftProfile, AircraftStore};
pub use calculator::{CalculatorInputs, CalculatorReport};
pub use checklist::{Checklist, ChecklistStore};
pub use wind::{WindSolution, WindTriangleInput, WindTriangleResult};

/// Directory holding aircraft.json and checkpoints.json.
pub fn get_config_root() -> PathBuf {
    directories::ProjectDirs::from("org", "e6b", "E6B-Oxide")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
