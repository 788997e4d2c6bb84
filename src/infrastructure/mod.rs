//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - JSON tree source and TOML selection store
//! - `events/` - Event sinks

pub mod events;
pub mod repositories;

pub use events::JsonEventSink;
pub use repositories::{JsonTreeSource, TomlSelectionRepository};
