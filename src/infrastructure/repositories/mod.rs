//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod json_source;
mod selection;

pub use json_source::{JsonTreeSource, FEATURES_FILE, MENUS_FILE, PACKAGES_FILE};
pub use selection::{TomlSelectionRepository, SELECTIONS_FILE};
