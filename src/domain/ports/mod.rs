//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod package_catalog;
pub mod selection_events;
pub mod selection_store;
pub mod tree_source;

pub use package_catalog::PackageCatalog;
pub use selection_events::{NoopEventSink, SelectionEvent, SelectionEventSink};
pub use selection_store::{SelectionStore, StoreError};
pub use tree_source::{SourceError, TreeSource};
