//! Package selection editing: session, debounce and coordinator

mod coordinator;
mod debounce;
mod session;

pub use coordinator::{
    CoordinatorOptions, LoadOutcome, LoadResult, LoadTicket, Loader, SaveReport,
    SelectionCoordinator, SessionPhase,
};
pub use debounce::{DebounceTimer, DEFAULT_DEBOUNCE_MS};
pub use session::SelectionSession;
