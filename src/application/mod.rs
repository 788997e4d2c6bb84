//! Application Layer
//!
//! Use cases that orchestrate domain services through ports.

pub mod packages;
pub mod selection;

pub use packages::PackagesUseCase;
pub use selection::{
    CoordinatorOptions, DebounceTimer, LoadOutcome, LoadResult, LoadTicket, Loader, SaveReport,
    SelectionCoordinator, SelectionSession, SessionPhase, DEFAULT_DEBOUNCE_MS,
};
