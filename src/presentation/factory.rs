//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{CoordinatorOptions, PackagesUseCase, SelectionCoordinator};
use crate::domain::ports::SelectionEventSink;
use crate::infrastructure::{JsonEventSink, JsonTreeSource, TomlSelectionRepository};

use super::console::ConsoleEventSink;
use super::render::RenderOptions;

/// Create a coordinator reading trees from, and saving selections into,
/// `data_dir`.
pub fn create_coordinator(
    data_dir: &Path,
    options: CoordinatorOptions,
    events: Arc<dyn SelectionEventSink>,
) -> SelectionCoordinator {
    let source = Arc::new(JsonTreeSource::new(data_dir));
    let store = Arc::new(TomlSelectionRepository::in_dir(data_dir));
    SelectionCoordinator::new(source, store, events, options)
}

/// Create the package listing use case for `data_dir`
pub fn create_packages_use_case(data_dir: &Path) -> PackagesUseCase {
    PackagesUseCase::new(Arc::new(JsonTreeSource::new(data_dir)))
}

/// NDJSON on stdout in JSON mode, human notices on stderr otherwise
pub fn create_event_sink(json: bool, opts: RenderOptions) -> Arc<dyn SelectionEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stderr(opts))
    }
}
