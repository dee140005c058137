// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::calculator::CalculatorInputs;
use crate::checklist::Checklist;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CURRENT_CHECKPOINT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum CheckpointError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid checkpoint file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No checkpoint with id {0}")]
    NotFound(u64),
}

/// A saved snapshot of calculator fields and checklist progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub inputs: CalculatorInputs,
    #[serde(default)]
    pub checklist: Checklist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CheckpointFile {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    next_id: u64,
    checkpoints: Vec<Checkpoint>,
}

impl Default for CheckpointFile {
    fn default() -> Self {
        Self {
            version: CURRENT_CHECKPOINT_VERSION,
            next_id: 1,
            checkpoints: Vec::new(),
        }
    }
}

pub struct CheckpointStore {
    path: PathBuf,
    file: CheckpointFile,
}

impl CheckpointStore {
    /// Opens the store at `path`; nothing is read until [`CheckpointStore::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: CheckpointFile::default(),
        }
    }

    pub fn in_config_root(config_root: &Path) -> Self {
        Self::new(config_root.join("checkpoints.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&mut self) -> Result<(), CheckpointError> {
        if !self.path.exists() {
            self.file = CheckpointFile::default();
            return Ok(());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: CheckpointFile = serde_json::from_str(&content)?;
        if file.version != CURRENT_CHECKPOINT_VERSION {
            log::warn!(
                "Ignoring checkpoints with unknown version — path={} version={}",
                self.path.display(),
                file.version
            );
            self.file = CheckpointFile::default();
            return Ok(());
        }

        self.file = file;
        // Older files may predate next_id
        let max_id = self.file.checkpoints.iter().map(|c| c.id).max().unwrap_or(0);
        self.file.next_id = self.file.next_id.max(max_id + 1);
        log::debug!(
            "Loaded checkpoints — path={} count={}",
            self.path.display(),
            self.file.checkpoints.len()
        );
        Ok(())
    }

    pub fn save(&self) -> Result<(), CheckpointError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.file)?;
        fs::write(&self.path, content)?;
        log::info!(
            "Checkpoints saved — path={} count={}",
            self.path.display(),
            self.file.checkpoints.len()
        );
        Ok(())
    }

    pub fn create(
        &mut self,
        name: &str,
        inputs: CalculatorInputs,
        checklist: Checklist,
    ) -> Checkpoint {
        self.create_at(name, inputs, checklist, Utc::now())
    }

    pub fn create_at(
        &mut self,
        name: &str,
        inputs: CalculatorInputs,
        checklist: Checklist,
        created_at: DateTime<Utc>,
    ) -> Checkpoint {
        let id = self.file.next_id;
        self.file.next_id += 1;

        let name = match name.trim() {
            "" => format!("Checkpoint {}", id),
            n => n.to_string(),
        };
        let checkpoint = Checkpoint {
            id,
            name,
            created_at,
            inputs,
            checklist,
        };
        self.file.checkpoints.push(checkpoint.clone());
        checkpoint
    }

    pub fn restore(&self, id: u64) -> Result<Checkpoint, CheckpointError> {
        self.file
            .checkpoints
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CheckpointError::NotFound(id))
    }

    pub fn delete(&mut self, id: u64) -> Result<Checkpoint, CheckpointError> {
        let index = self
            .file
            .checkpoints
            .iter()
            .position(|c| c.id == id)
            .ok_or(CheckpointError::NotFound(id))?;
        Ok(self.file.checkpoints.remove(index))
    }

    /// Newest first; ties keep the later-created checkpoint first.
    pub fn list(&self) -> Vec<&Checkpoint> {
        let mut sorted: Vec<&Checkpoint> = self.file.checkpoints.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        sorted
    }

    pub fn latest(&self) -> Option<&Checkpoint> {
        self.list().into_iter().next()
    }

    pub fn len(&self) -> usize {
        self.file.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.checkpoints.is_empty()
    }
}
