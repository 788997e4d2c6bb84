//! Domain Services
//!
//! Pure functions over tree entities. No I/O; safe to call from any thread.

pub mod cascade;
pub mod tree_mapper;

pub use cascade::{cascade_toggle, collect_enabled_ids, contains, reconcile, set_all};
pub use tree_mapper::{map_tree, map_tree_from};
