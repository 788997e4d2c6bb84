//! TOML Selection Repository
//!
//! Persists every package's selection in one `selections.toml`. Writes are
//! serialized across processes with an exclusive lock on a sibling `.lock`
//! file; the last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::PackageSelection;
use crate::domain::ports::{SelectionStore, StoreError};
use crate::domain::value_objects::{NodeId, PackageId, PackageStatus};

pub const SELECTIONS_FILE: &str = "selections.toml";

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlSelection {
    package_id: PackageId,
    #[serde(default)]
    menu_ids: Vec<NodeId>,
    #[serde(default)]
    feature_ids: Vec<NodeId>,
    #[serde(default)]
    status: PackageStatus,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlSelections {
    version: u32,
    #[serde(default)]
    selections: Vec<TomlSelection>,
}

impl Default for TomlSelections {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            selections: Vec::new(),
        }
    }
}

pub struct TomlSelectionRepository {
    path: PathBuf,
}

impl TomlSelectionRepository {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Repository stored as `selections.toml` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_path(dir.join(SELECTIONS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<TomlSelections, StoreError> {
        if !self.path.exists() {
            return Ok(TomlSelections::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| StoreError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, file: &TomlSelections) -> Result<(), StoreError> {
        let content = toml::to_string(file).map_err(|e| StoreError::SerializationError {
            message: e.to_string(),
        })?;

        fs::write(&self.path, content).map_err(|e| StoreError::AccessError {
            message: e.to_string(),
        })
    }
}

impl SelectionStore for TomlSelectionRepository {
    fn fetch_selection(&self, package_id: PackageId) -> Result<PackageSelection, StoreError> {
        let file = self.load_from_disk()?;
        let selection = file
            .selections
            .into_iter()
            .find(|s| s.package_id == package_id)
            .map(from_toml)
            .unwrap_or_else(|| PackageSelection::empty(package_id));
        Ok(selection)
    }

    fn save_selection(&self, selection: &PackageSelection) -> Result<(), StoreError> {
        let access = |e: std::io::Error| StoreError::AccessError {
            message: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(access)?;
        }

        let lock_file = fs::File::create(self.lock_path()).map_err(access)?;
        lock_file.lock_exclusive().map_err(access)?;

        let result = self.load_from_disk().and_then(|mut file| {
            let entry = to_toml(selection, Utc::now());
            match file
                .selections
                .iter_mut()
                .find(|s| s.package_id == selection.package_id)
            {
                Some(existing) => *existing = entry,
                None => file.selections.push(entry),
            }
            file.version = FORMAT_VERSION;
            self.save_to_disk(&file)
        });

        let _ = lock_file.unlock();
        if result.is_ok() {
            debug!(path = %self.path.display(), package = %selection.package_id, "selection written");
        }
        result
    }
}

fn from_toml(entry: TomlSelection) -> PackageSelection {
    PackageSelection {
        package_id: entry.package_id,
        menu_ids: entry.menu_ids,
        feature_ids: entry.feature_ids,
        status: entry.status,
    }
}

fn to_toml(selection: &PackageSelection, updated_at: DateTime<Utc>) -> TomlSelection {
    TomlSelection {
        package_id: selection.package_id,
        menu_ids: selection.menu_ids.clone(),
        feature_ids: selection.feature_ids.clone(),
        status: selection.status,
        updated_at,
    }
}
