// Copyright 2025 the Boothplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boothplan Store: named-slot persistence for floor plans.
//!
//! A [`PlanStore`] is rooted at a directory and maps user-supplied slot
//! names to JSON files (`<name>.plan.json`). Only durable booth data goes to
//! disk: position, size, and color, in insertion order. Transient UI state
//! (selection, drag flags) is excluded on save and absent on load, so a
//! loaded plan always comes back with nothing selected.
//!
//! Failure never damages in-memory state: a failed save leaves the plan the
//! caller passed untouched (it is only read), and a failed load returns an
//! error instead of a plan.
//!
//! # Example
//!
//! ```no_run
//! use boothplan_floor::{Booth, ColorTag, FloorPlan};
//! use boothplan_geom::{Point, Size};
//! use boothplan_store::PlanStore;
//!
//! let store = PlanStore::new("saved_plans");
//! let mut plan = FloorPlan::new();
//! plan.add(Booth::new(Point::new(10, 10), Size::new(100, 60), ColorTag::new(0xcc6600)));
//! store.save("expo-hall-a", &plan)?;
//!
//! let restored = store.load("expo-hall-a")?;
//! assert_eq!(restored.len(), 1);
//! # Ok::<(), boothplan_store::StoreError>(())
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use boothplan_floor::{Booth, ColorTag, FloorPlan};
use boothplan_geom::{Point, Size};

/// File suffix for plan slots.
const SLOT_SUFFIX: &str = ".plan.json";

/// Errors from the persistence layer.
///
/// All recoverable; none of these leaves a plan half-written in memory.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The slot name was empty (or whitespace only), typically a cancelled
    /// name prompt. Short-circuits before any I/O.
    #[error("plan name is empty")]
    EmptyName,
    /// The slot name contains a path separator or refers outside the store
    /// directory.
    #[error("plan name {0:?} is not a valid slot name")]
    InvalidName(String),
    /// No slot with this name exists.
    #[error("no saved plan named {0:?}")]
    NotFound(String),
    /// A stored record violates the booth invariants (non-positive extent).
    #[error("saved plan contains an invalid booth record")]
    InvalidRecord,
    /// Underlying filesystem failure.
    #[error("plan storage I/O failed: {0}")]
    Io(#[from] io::Error),
    /// The slot exists but does not parse.
    #[error("saved plan is malformed: {0}")]
    Codec(#[from] serde_json::Error),
}

// Durable image of one booth. Deliberately not the in-memory type: flags
// must never reach disk, and the wire layout stays stable if Booth grows.
#[derive(Debug, Serialize, Deserialize)]
struct BoothRecord {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct PlanRecord {
    booths: Vec<BoothRecord>,
}

/// A directory of named plan slots.
#[derive(Clone, Debug)]
pub struct PlanStore {
    root: PathBuf,
}

impl PlanStore {
    /// A store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this store reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serialize `plan` into the named slot, creating or replacing it.
    ///
    /// Booths are written in insertion order; transient flags are dropped.
    pub fn save(&self, name: &str, plan: &FloorPlan) -> Result<(), StoreError> {
        let path = self.slot_path(name)?;
        let record = PlanRecord {
            booths: plan
                .iter()
                .map(|(_, b)| BoothRecord {
                    x: b.position().x,
                    y: b.position().y,
                    width: b.size().width,
                    height: b.size().height,
                    color: b.color().rgb(),
                })
                .collect(),
        };
        fs::create_dir_all(&self.root)?;
        let json = serde_json::to_vec_pretty(&record)?;
        fs::write(&path, json)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(name, booths = record.booths.len(), "plan saved");
        Ok(())
    }

    /// Rebuild a plan from the named slot.
    ///
    /// Booths come back in their original insertion order with all transient
    /// flags clear. The caller's existing plan, if any, is untouched on
    /// failure; a fresh plan is only returned on success.
    pub fn load(&self, name: &str) -> Result<FloorPlan, StoreError> {
        let path = self.slot_path(name)?;
        let json = fs::read(&path).map_err(|e| self.map_missing(e, name))?;
        let record: PlanRecord = serde_json::from_slice(&json)?;

        let mut plan = FloorPlan::new();
        for b in &record.booths {
            let size = Size::new(b.width, b.height);
            if !size.is_positive() {
                return Err(StoreError::InvalidRecord);
            }
            plan.add(Booth::new(
                Point::new(b.x, b.y),
                size,
                ColorTag::new(b.color),
            ));
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(name, booths = plan.len(), "plan loaded");
        Ok(plan)
    }

    /// Names of all saved slots, sorted.
    ///
    /// A store whose directory does not exist yet simply has no slots.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if let Some(name) = file_name.strip_suffix(SLOT_SUFFIX) {
                names.push(name.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Delete the named slot.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.slot_path(name)?;
        fs::remove_file(&path).map_err(|e| self.map_missing(e, name))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(name, "plan deleted");
        Ok(())
    }

    /// Whether the named slot exists.
    pub fn contains(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.slot_path(name)?;
        Ok(path.is_file())
    }

    fn slot_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        // Slot names are plain file stems; anything that could walk the
        // directory tree is rejected rather than sanitized.
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(StoreError::InvalidName(name.to_owned()));
        }
        Ok(self.root.join(format!("{name}{SLOT_SUFFIX}")))
    }

    fn map_missing(&self, e: io::Error, name: &str) -> StoreError {
        if e.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(name.to_owned())
        } else {
            StoreError::Io(e)
        }
    }
}
