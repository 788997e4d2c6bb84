//! Configuration module for RentVix
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RENTVIX_*)
//! 3. Project config (./rentvix.toml)
//! 4. User config (~/.config/rentvix/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{AutosaveConfig, Config, DataConfig, OutputConfig, Verbosity};
