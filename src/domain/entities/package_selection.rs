//! Package Selection entity
//!
//! The persisted, flattened form of a builder session: which menu and
//! feature ids are enabled for one package. Order is irrelevant; the trees
//! themselves are never stored.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{NodeId, PackageId, PackageStatus, TreeDomain};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSelection {
    #[serde(alias = "packageId")]
    pub package_id: PackageId,
    #[serde(default, alias = "menuIds")]
    pub menu_ids: Vec<NodeId>,
    #[serde(default, alias = "featureIds")]
    pub feature_ids: Vec<NodeId>,
    #[serde(default)]
    pub status: PackageStatus,
}

impl PackageSelection {
    /// A selection with nothing enabled
    pub fn empty(package_id: PackageId) -> Self {
        Self {
            package_id,
            menu_ids: Vec::new(),
            feature_ids: Vec::new(),
            status: PackageStatus::default(),
        }
    }

    pub fn with_ids(mut self, domain: TreeDomain, ids: Vec<NodeId>) -> Self {
        match domain {
            TreeDomain::Menu => self.menu_ids = ids,
            TreeDomain::Feature => self.feature_ids = ids,
        }
        self
    }

    pub fn with_status(mut self, status: PackageStatus) -> Self {
        self.status = status;
        self
    }
}
