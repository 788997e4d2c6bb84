//! JSON File Tree Source
//!
//! Serves the menu tree, feature tree and package list from JSON files in a
//! data directory. The files hold exactly what the REST endpoints return, so
//! envelopes and field-name variants are left for the tree mapper.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::trace;

use crate::domain::ports::{PackageCatalog, SourceError, TreeSource};
use crate::domain::value_objects::PackageOption;

pub const MENUS_FILE: &str = "menus.json";
pub const FEATURES_FILE: &str = "features.json";
pub const PACKAGES_FILE: &str = "packages.json";

/// Fields that may wrap the package array
const PACKAGE_ENVELOPES: &[&str] = &["data", "packages"];

pub struct JsonTreeSource {
    dir: PathBuf,
}

impl JsonTreeSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, file: &str) -> Result<Value, SourceError> {
        let path = self.dir.join(file);
        trace!(path = %path.display(), "reading source file");

        let content = fs::read_to_string(&path).map_err(|e| {
            let message = match e.kind() {
                io::ErrorKind::NotFound => format!("{} does not exist", path.display()),
                _ => e.to_string(),
            };
            SourceError::unavailable(file, message)
        })?;

        serde_json::from_str(&content).map_err(|e| SourceError::malformed(file, e))
    }
}

impl TreeSource for JsonTreeSource {
    fn fetch_menu_tree(&self) -> Result<Value, SourceError> {
        self.read(MENUS_FILE)
    }

    fn fetch_feature_tree(&self) -> Result<Value, SourceError> {
        self.read(FEATURES_FILE)
    }
}

impl PackageCatalog for JsonTreeSource {
    fn fetch_packages(&self) -> Result<Vec<PackageOption>, SourceError> {
        let mut raw = self.read(PACKAGES_FILE)?;
        if let Value::Object(obj) = &mut raw {
            if let Some(inner) = PACKAGE_ENVELOPES.iter().find_map(|f| obj.remove(*f)) {
                raw = inner;
            }
        }
        serde_json::from_value(raw).map_err(|e| SourceError::malformed(PACKAGES_FILE, e))
    }
}
