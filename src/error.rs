//! Error types for RentVix
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{SourceError, StoreError};
use crate::domain::value_objects::PackageId;

/// Result type alias for RentVix operations
pub type RentvixResult<T> = Result<T, RentvixError>;

/// Main error type for RentVix operations
#[derive(Error, Debug)]
pub enum RentvixError {
    /// A tree or package fetch failed
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Reading or writing selections failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An edit arrived while no package session was ready
    #[error("no package is loaded - choose one before editing")]
    NotReady,

    /// The package id is not in the catalog
    #[error("unknown package {package_id} - run `rentvix packages` to list them")]
    UnknownPackage { package_id: PackageId },

    /// The config file could not be parsed
    #[error("invalid config in {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
