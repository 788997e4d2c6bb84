//! PackageCatalog port

use crate::domain::ports::SourceError;
use crate::domain::value_objects::PackageOption;

/// Lists the packages an operator can pick from
pub trait PackageCatalog: Send + Sync {
    fn fetch_packages(&self) -> Result<Vec<PackageOption>, SourceError>;
}
