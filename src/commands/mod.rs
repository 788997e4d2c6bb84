//! Command handlers for the `rentvix` binary

use std::path::PathBuf;

use anyhow::Result;

use rentvix::application::PackagesUseCase;
use rentvix::config::Config;
use rentvix::domain::value_objects::{PackageId, PackageOption};
use rentvix::presentation::factory;
use rentvix::presentation::RenderOptions;

pub mod edit;
pub mod packages;
pub mod show;
pub mod toggle;

/// Settings shared by every command
pub struct Context {
    pub data_dir: PathBuf,
    pub json: bool,
    pub render: RenderOptions,
    pub config: Config,
}

impl Context {
    pub fn packages(&self) -> PackagesUseCase {
        factory::create_packages_use_case(&self.data_dir)
    }

    /// Resolve a CLI package id against the catalog
    pub fn require_package(&self, package: i64) -> Result<PackageOption> {
        Ok(self.packages().require(PackageId::new(package))?)
    }
}
