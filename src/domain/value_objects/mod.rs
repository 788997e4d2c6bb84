//! Domain Value Objects
//!
//! Immutable value types shared by the tree model, the cascade engine and
//! the selection coordinator.

mod node_id;
mod package;
mod tree_domain;

pub use node_id::NodeId;
pub use package::{PackageId, PackageOption, PackageStatus};
pub use tree_domain::TreeDomain;
