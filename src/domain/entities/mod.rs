//! Domain Entities
//!
//! - `TreeNode` - a selectable node of the menu or feature tree
//! - `PackageSelection` - the persisted set of enabled ids for a package

mod package_selection;
mod tree_node;

pub use package_selection::PackageSelection;
pub use tree_node::{
    count_enabled, count_nodes, find_in, FeatureKind, FeatureNode, MenuKind, MenuNode, NodeKind,
    SelectionState, TreeNode,
};
