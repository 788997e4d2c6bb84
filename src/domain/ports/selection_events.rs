//! Selection Event Port
//!
//! Observable lifecycle of an editing session: loads, toggles, debounced
//! saves. Drives the NDJSON stream and the diagnostic log.

use crate::domain::value_objects::{NodeId, PackageId, TreeDomain};

/// Event emitted by the selection coordinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A package was chosen and its trees are being fetched
    LoadStarted { package_id: PackageId },

    /// Trees and saved selection reconciled; the session is editable
    Loaded {
        package_id: PackageId,
        menu_count: usize,
        feature_count: usize,
        menu_enabled: usize,
        feature_enabled: usize,
    },

    /// A fetch failed; the session returned to idle
    LoadFailed { package_id: PackageId, error: String },

    /// A fetch finished after the user moved on to another package
    LoadDiscarded { package_id: PackageId },

    /// A node was toggled (cascade already applied)
    Toggled {
        package_id: PackageId,
        domain: TreeDomain,
        id: NodeId,
        enabled: bool,
    },

    /// An autosave was (re)armed
    SaveScheduled { package_id: PackageId, delay_ms: u64 },

    /// A pending autosave was dropped by a package switch or close
    SaveCancelled { package_id: PackageId },

    /// The selection was persisted
    Saved {
        package_id: PackageId,
        menu_ids: usize,
        feature_ids: usize,
    },

    /// Persisting failed; in-memory state is kept as is
    SaveFailed { package_id: PackageId, error: String },

    /// The builder was closed
    Closed,
}

impl SelectionEvent {
    /// Stable snake_case name, used as the NDJSON `event` field
    pub fn name(&self) -> &'static str {
        match self {
            SelectionEvent::LoadStarted { .. } => "load_started",
            SelectionEvent::Loaded { .. } => "loaded",
            SelectionEvent::LoadFailed { .. } => "load_failed",
            SelectionEvent::LoadDiscarded { .. } => "load_discarded",
            SelectionEvent::Toggled { .. } => "toggled",
            SelectionEvent::SaveScheduled { .. } => "save_scheduled",
            SelectionEvent::SaveCancelled { .. } => "save_cancelled",
            SelectionEvent::Saved { .. } => "saved",
            SelectionEvent::SaveFailed { .. } => "save_failed",
            SelectionEvent::Closed => "closed",
        }
    }
}

/// Trait for receiving selection events
pub trait SelectionEventSink: Send + Sync {
    fn on_event(&self, event: SelectionEvent);
}

/// Discards every event
pub struct NoopEventSink;

impl SelectionEventSink for NoopEventSink {
    fn on_event(&self, _event: SelectionEvent) {}
}
