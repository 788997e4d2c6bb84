//! RentVix - menu and feature entitlement builder
//!
//! Subscription packages grant access to a tree of menus and a tree of
//! features. This crate maps those trees from their REST shape, applies
//! cascading toggles, reconciles them with a package's saved selection and
//! autosaves edits through a debounced coordinator.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CoordinatorOptions, SaveReport, SelectionCoordinator, SessionPhase};
pub use config::Config;
pub use domain::entities::{FeatureNode, MenuNode, PackageSelection, TreeNode};
pub use domain::services::{cascade_toggle, collect_enabled_ids, map_tree, reconcile};
pub use domain::value_objects::{NodeId, PackageId, PackageStatus, TreeDomain};
pub use error::{RentvixError, RentvixResult};
