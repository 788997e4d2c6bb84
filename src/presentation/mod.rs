//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Text rendering of trees and results
//!
//! ## Structure
//!
//! - `cli` - Command-line definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `render` / `theme` - Plain-text output and design tokens
//! - `console` - Human-readable event sink

pub mod cli;
pub mod console;
pub mod factory;
pub mod render;
pub mod theme;

pub use cli::{Cli, Commands, ToggleState};
pub use console::ConsoleEventSink;
pub use render::RenderOptions;
