//! In-memory ports for driving a coordinator without files.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};

use rentvix::domain::ports::{
    SelectionEvent, SelectionEventSink, SelectionStore, SourceError, StoreError, TreeSource,
};
use rentvix::{CoordinatorOptions, PackageId, PackageSelection, SelectionCoordinator};

pub const DEBOUNCE: Duration = Duration::from_millis(600);

/// The three-level menu tree used across scenarios
pub fn menu_payload() -> Value {
    json!([
        {"id": "1", "title": "Fleet", "children": [
            {"id": "1-1", "title": "Vehicles"},
            {"id": "1-2", "title": "Bookings", "children": [
                {"id": "1-2-1", "title": "Calendar"}
            ]}
        ]}
    ])
}

pub struct StaticSource;

impl TreeSource for StaticSource {
    fn fetch_menu_tree(&self) -> Result<Value, SourceError> {
        Ok(menu_payload())
    }

    fn fetch_feature_tree(&self) -> Result<Value, SourceError> {
        Ok(json!([{"id": "gps", "title": "GPS"}, {"id": "billing", "title": "Billing"}]))
    }
}

/// Store that records every save call
#[derive(Default)]
pub struct RecordingStore {
    saved: Mutex<HashMap<PackageId, PackageSelection>>,
    calls: Mutex<Vec<PackageSelection>>,
}

impl RecordingStore {
    pub fn seed(&self, selection: PackageSelection) {
        self.saved
            .lock()
            .unwrap()
            .insert(selection.package_id, selection);
    }

    pub fn calls(&self) -> Vec<PackageSelection> {
        self.calls.lock().unwrap().clone()
    }
}

impl SelectionStore for RecordingStore {
    fn fetch_selection(&self, package_id: PackageId) -> Result<PackageSelection, StoreError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .get(&package_id)
            .cloned()
            .unwrap_or_else(|| PackageSelection::empty(package_id)))
    }

    fn save_selection(&self, selection: &PackageSelection) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(selection.clone());
        self.seed(selection.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct EventLog(Mutex<Vec<SelectionEvent>>);

impl EventLog {
    pub fn names(&self) -> Vec<&'static str> {
        self.0.lock().unwrap().iter().map(|e| e.name()).collect()
    }
}

impl SelectionEventSink for EventLog {
    fn on_event(&self, event: SelectionEvent) {
        self.0.lock().unwrap().push(event);
    }
}

pub struct Harness {
    pub coordinator: SelectionCoordinator,
    pub store: Arc<RecordingStore>,
    pub events: Arc<EventLog>,
}

pub fn harness() -> Harness {
    let store = Arc::new(RecordingStore::default());
    let events = Arc::new(EventLog::default());
    let coordinator = SelectionCoordinator::new(
        Arc::new(StaticSource),
        store.clone(),
        events.clone(),
        CoordinatorOptions::default().with_debounce(DEBOUNCE),
    );
    Harness {
        coordinator,
        store,
        events,
    }
}
