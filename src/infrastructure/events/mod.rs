//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for automation
//!
//! The human-readable sink lives in `presentation::console`.

mod json;

pub use json::JsonEventSink;
