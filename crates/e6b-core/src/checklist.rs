// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChecklistError {
    #[error("No checklist group at index {0}")]
    GroupOutOfRange(usize),
    #[error("No item at index {item} in group {group}")]
    ItemOutOfRange { group: usize, item: usize },
    #[error("Checklist text must not be empty")]
    EmptyText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistGroup {
    pub title: String,
    pub items: Vec<ChecklistItem>,
}

impl ChecklistGroup {
    pub fn progress(&self) -> (usize, usize) {
        let done = self.items.iter().filter(|i| i.completed).count();
        (done, self.items.len())
    }

    pub fn is_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|i| i.completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Checklist {
    pub groups: Vec<ChecklistGroup>,
}

impl Checklist {
    pub fn new(groups: Vec<ChecklistGroup>) -> Self {
        Self { groups }
    }

    /// Flips one item and returns its new state.
    pub fn toggle(&mut self, group: usize, item: usize) -> Result<bool, ChecklistError> {
        let entry = self.item_mut(group, item)?;
        entry.completed = !entry.completed;
        Ok(entry.completed)
    }

    pub fn reset_all(&mut self) {
        for item in self.groups.iter_mut().flat_map(|g| g.items.iter_mut()) {
            item.completed = false;
        }
    }

    /// Appends an empty group and returns its index.
    pub fn add_group(&mut self, title: &str) -> Result<usize, ChecklistError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ChecklistError::EmptyText);
        }
        self.groups.push(ChecklistGroup {
            title: title.to_string(),
            items: Vec::new(),
        });
        Ok(self.groups.len() - 1)
    }

    /// Appends an unchecked item and returns its id.
    pub fn add_item(&mut self, group: usize, text: &str) -> Result<String, ChecklistError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ChecklistError::EmptyText);
        }
        let id = self.next_id();
        let target = self
            .groups
            .get_mut(group)
            .ok_or(ChecklistError::GroupOutOfRange(group))?;
        target.items.push(ChecklistItem {
            id: id.clone(),
            text: text.to_string(),
            completed: false,
        });
        Ok(id)
    }

    pub fn delete_group(&mut self, group: usize) -> Result<ChecklistGroup, ChecklistError> {
        if group >= self.groups.len() {
            return Err(ChecklistError::GroupOutOfRange(group));
        }
        Ok(self.groups.remove(group))
    }

    pub fn delete_item(&mut self, group: usize, item: usize) -> Result<ChecklistItem, ChecklistError> {
        let target = self
            .groups
            .get_mut(group)
            .ok_or(ChecklistError::GroupOutOfRange(group))?;
        if item >= target.items.len() {
            return Err(ChecklistError::ItemOutOfRange { group, item });
        }
        Ok(target.items.remove(item))
    }

    pub fn group_progress(&self, group: usize) -> Result<(usize, usize), ChecklistError> {
        self.groups
            .get(group)
            .map(ChecklistGroup::progress)
            .ok_or(ChecklistError::GroupOutOfRange(group))
    }

    /// Completed and total item counts across all groups.
    pub fn progress(&self) -> (usize, usize) {
        self.groups.iter().fold((0, 0), |(done, total), g| {
            let (d, t) = g.progress();
            (done + d, total + t)
        })
    }

    fn item_mut(&mut self, group: usize, item: usize) -> Result<&mut ChecklistItem, ChecklistError> {
        self.groups
            .get_mut(group)
            .ok_or(ChecklistError::GroupOutOfRange(group))?
            .items
            .get_mut(item)
            .ok_or(ChecklistError::ItemOutOfRange { group, item })
    }

    /// One past the highest numeric id in use; ids like "e3" are ignored.
    fn next_id(&self) -> String {
        let max = self
            .groups
            .iter()
            .flat_map(|g| g.items.iter())
            .filter_map(|i| i.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Normal and emergency procedures for a single-engine piston trainer.
    pub fn preflight() -> Self {
        let mut next = 1u32;
        let mut emergency = 1u32;
        let mut group = |title: &str, items: &[&str]| {
            let is_emergency = title.starts_with("EMERGENCY");
            let items = items
                .iter()
                .map(|text| {
                    let id = if is_emergency {
                        emergency += 1;
                        format!("e{}", emergency - 1)
                    } else {
                        next += 1;
                        (next - 1).to_string()
                    };
                    ChecklistItem {
                        id,
                        text: text.to_string(),
                        completed: false,
                    }
                })
                .collect();
            ChecklistGroup {
                title: title.to_string(),
                items,
            }
        };

        let groups = vec![
            group(
                "Pre-Flight Inspection",
                &[
                    "Documents (ARROW) - On Board",
                    "Parking Brake - Set",
                    "Control Wheel Lock - Removed",
                    "Ignition Switch - OFF",
                    "Avionics Master - OFF",
                    "Master Switch - ON",
                    "Fuel Quantity - Check Indicators",
                    "Flaps - Extend for Inspection",
                    "Master Switch - OFF",
                    "Fuel Strainer/Sumps - Sample & Check",
                    "Oil Level - Check (Min 5qt, Max 8qt)",
                    "Propeller & Spinner - Check Condition",
                    "Pitot Tube - Cover Removed/Clear",
                    "Fuel Vents/Static Ports - Unobstructed",
                    "Control Surfaces/Hinges - Free & Secure",
                    "Tires/Struts/Brakes - Inspect",
                ],
            ),
            group(
                "Before Engine Start",
                &[
                    "Passenger Briefing - Complete",
                    "Seats & Seatbelts - Adjusted/Locked",
                    "Brakes - Test & Set",
                    "Fuel Selector - BOTH",
                    "Circuit Breakers - Check All IN",
                    "Mixture - FULL RICH",
                    "Propeller Area - CLEAR",
                ],
            ),
            group(
                "After Engine Start",
                &[
                    "Oil Pressure - Check Green (30s)",
                    "Amps/Volts - Charging",
                    "Avionics Master - ON",
                    "Flaps - Retract",
                ],
            ),
            group(
                "Run-Up",
                &[
                    "Parking Brake - Set",
                    "Flight Controls - Free & Correct",
                    "Throttle - 1700 RPM",
                    "Magnetos - Check Drop (Max 150)",
                    "Carburetor Heat - Test & Return",
                    "Engine Gauges - Check Green",
                    "Vacuum Gauge - 4.5 - 5.4 inHg",
                ],
            ),
            group(
                "Before Takeoff",
                &[
                    "Departure Briefing - Complete",
                    "Flaps - Set for Takeoff (0-10)",
                    "Trim - Set for Takeoff",
                    "Transponder - ALT Mode",
                    "Lights - Strobe & Landing ON",
                ],
            ),
            group(
                "Before Landing",
                &[
                    "Seatbelts & Harnesses - Secure",
                    "Fuel Selector - BOTH",
                    "Mixture - FULL RICH",
                    "Carburetor Heat - ON",
                    "Landing Light - ON",
                    "Flaps - As Required",
                ],
            ),
            group(
                "Engine Shutdown",
                &[
                    "Avionics Master - OFF",
                    "Mixture - Idle Cut-off",
                    "Ignition Switch - OFF (Key out)",
                    "Master Switch - OFF",
                    "Hobbs & Tach - Record",
                ],
            ),
            group(
                "EMERGENCY: Engine Failure (In-Flight)",
                &[
                    "Airspeed - 65 KIAS (Best Glide)",
                    "Landing Site - IDENTIFY",
                    "Fuel Selector - BOTH",
                    "Mixture - FULL RICH",
                    "Carburetor Heat - ON",
                    "Ignition Switch - BOTH/START",
                ],
            ),
            group(
                "EMERGENCY: Forced Landing (No Power)",
                &[
                    "Radio - 121.5 (MAYDAY x3)",
                    "Transponder - 7700",
                    "Seats/Belts - SECURE",
                    "Fuel Selector - OFF",
                    "Mixture - IDLE CUT-OFF",
                    "Master Switch - OFF (After flaps)",
                    "Doors - UNLATCHED (Prior to touchdown)",
                ],
            ),
        ];

        Self { groups }
    }
}

/// The working checklist, kept in checklist.json between runs.
#[derive(Debug, Clone)]
pub struct ChecklistStore {
    config_path: PathBuf,
}

impl ChecklistStore {
    pub fn new(config_root: &Path) -> Self {
        Self {
            config_path: config_root.join("checklist.json"),
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

    /// Falls back to the preflight checklist when nothing has been saved yet.
    pub fn load(&self) -> Result<Checklist> {
        if !self.config_path.exists() {
            log::debug!(
                "No saved checklist; starting from preflight — path={}",
                self.config_path.display()
            );
            return Ok(Checklist::preflight());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read checklist.json")?;

        serde_json::from_str(&content).context("Failed to parse checklist.json")
    }

    pub fn save(&self, checklist: &Checklist) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let content =
            serde_json::to_string_pretty(checklist).context("Failed to serialize checklist")?;

        fs::write(&self.config_path, content).context("Failed to write checklist.json")?;
        let (done, total) = checklist.progress();
        log::info!(
            "Checklist saved — done={} total={} path={}",
            done,
            total,
            self.config_path.display()
        );
        Ok(())
    }
}
