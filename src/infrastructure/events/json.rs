//! JSON Event Sink
//!
//! Outputs selection events as NDJSON for automation consumption.

use crate::domain::ports::{SelectionEvent, SelectionEventSink};
use serde_json::json;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON body of an event, without the `event` name field
fn event_fields(event: &SelectionEvent) -> serde_json::Value {
    match event {
        SelectionEvent::LoadStarted { package_id } | SelectionEvent::LoadDiscarded { package_id } => {
            json!({ "package_id": package_id })
        }

        SelectionEvent::Loaded {
            package_id,
            menu_count,
            feature_count,
            menu_enabled,
            feature_enabled,
        } => json!({
            "package_id": package_id,
            "menus": { "total": menu_count, "enabled": menu_enabled },
            "features": { "total": feature_count, "enabled": feature_enabled },
        }),

        SelectionEvent::LoadFailed { package_id, error }
        | SelectionEvent::SaveFailed { package_id, error } => json!({
            "package_id": package_id,
            "error": error,
        }),

        SelectionEvent::Toggled {
            package_id,
            domain,
            id,
            enabled,
        } => json!({
            "package_id": package_id,
            "domain": domain,
            "id": id,
            "enabled": enabled,
        }),

        SelectionEvent::SaveScheduled {
            package_id,
            delay_ms,
        } => json!({ "package_id": package_id, "delay_ms": delay_ms }),

        SelectionEvent::SaveCancelled { package_id } => json!({ "package_id": package_id }),

        SelectionEvent::Saved {
            package_id,
            menu_ids,
            feature_ids,
        } => json!({
            "package_id": package_id,
            "menu_ids": menu_ids,
            "feature_ids": feature_ids,
        }),

        SelectionEvent::Closed => json!({}),
    }
}

impl SelectionEventSink for JsonEventSink {
    fn on_event(&self, event: SelectionEvent) {
        let mut value = event_fields(&event);
        if let Some(obj) = value.as_object_mut() {
            obj.insert("event".to_string(), json!(event.name()));
        }
        self.write_event(value);
    }
}
