//! Package listing use case

use std::sync::Arc;

use crate::domain::ports::PackageCatalog;
use crate::domain::value_objects::{PackageId, PackageOption};
use crate::error::{RentvixError, RentvixResult};

pub struct PackagesUseCase {
    catalog: Arc<dyn PackageCatalog>,
}

impl PackagesUseCase {
    pub fn new(catalog: Arc<dyn PackageCatalog>) -> Self {
        Self { catalog }
    }

    pub fn list(&self) -> RentvixResult<Vec<PackageOption>> {
        Ok(self.catalog.fetch_packages()?)
    }

    /// Look a package up, failing with `UnknownPackage` when absent
    pub fn require(&self, package_id: PackageId) -> RentvixResult<PackageOption> {
        self.list()?
            .into_iter()
            .find(|p| p.id == package_id)
            .ok_or(RentvixError::UnknownPackage { package_id })
    }
}
