//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::{CoordinatorOptions, DEFAULT_DEBOUNCE_MS};
use crate::domain::value_objects::PackageStatus;

use super::loader::{self, ConfigWarning};

/// Where the JSON sources and the selection store live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Debounced autosave settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutosaveConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Status sent with every saved selection
    #[serde(default)]
    pub status: PackageStatus,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            status: PackageStatus::default(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Number of `-v` flags this level corresponds to
    pub fn as_count(self) -> u8 {
        match self {
            Verbosity::Quiet | Verbosity::Normal => 0,
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub autosave: AutosaveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from project config, user config, or defaults, then apply env
    pub fn load_or_default(project_root: Option<&Path>) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default(project_root)
    }

    /// Coordinator settings derived from `[autosave]`
    pub fn coordinator_options(&self) -> CoordinatorOptions {
        CoordinatorOptions::default()
            .with_debounce(Duration::from_millis(self.autosave.debounce_ms))
            .with_status(self.autosave.status)
    }
}
