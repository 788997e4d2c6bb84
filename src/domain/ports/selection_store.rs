//! SelectionStore port
//!
//! Reads and writes the flattened [`PackageSelection`] of one package.

use std::path::PathBuf;

use crate::domain::entities::PackageSelection;
use crate::domain::value_objects::PackageId;

pub trait SelectionStore: Send + Sync {
    /// Saved selection for `package_id`; a package never saved yields an
    /// empty selection, not an error.
    fn fetch_selection(&self, package_id: PackageId) -> Result<PackageSelection, StoreError>;

    /// Persist `selection`, replacing whatever was stored for its package
    fn save_selection(&self, selection: &PackageSelection) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to access selection store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize selections: {message}")]
    SerializationError { message: String },

    #[error(
        "selection store corrupted: {path}\n  → Fix: restore it from backup or delete it to start over\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },
}
