//! Console Event Sink
//!
//! Human-readable notices for the events an operator must see: loads that
//! failed and saves that succeeded or failed. Everything else goes to the
//! tracing log only.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{SelectionEvent, SelectionEventSink};

use super::render::RenderOptions;
use super::theme::{colors, Glyphs};

pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    opts: RenderOptions,
}

impl ConsoleEventSink {
    /// Console sink writing to stderr
    pub fn stderr(opts: RenderOptions) -> Self {
        Self::with_writer(io::stderr(), opts)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, opts: RenderOptions) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            opts,
        }
    }

    fn line(&self, glyph: &str, color: crossterm::style::Color, message: String) {
        let glyph = if self.opts.color {
            crossterm::style::Stylize::with(glyph, color).to_string()
        } else {
            glyph.to_string()
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{glyph} {message}");
            let _ = writer.flush();
        }
    }
}

impl SelectionEventSink for ConsoleEventSink {
    fn on_event(&self, event: SelectionEvent) {
        let glyphs = Glyphs::new(self.opts.unicode);
        match event {
            SelectionEvent::Loaded {
                package_id,
                menu_count,
                feature_count,
                menu_enabled,
                feature_enabled,
            } => self.line(
                glyphs.success,
                colors::INFO,
                format!(
                    "loaded package {package_id} ({menu_enabled}/{menu_count} menus, {feature_enabled}/{feature_count} features)"
                ),
            ),
            SelectionEvent::LoadFailed { package_id, error } => self.line(
                glyphs.error,
                colors::ERROR,
                format!("could not load package {package_id}: {error}"),
            ),
            SelectionEvent::Saved {
                package_id,
                menu_ids,
                feature_ids,
            } => self.line(
                glyphs.success,
                colors::SUCCESS,
                format!("saved package {package_id}: {menu_ids} menus, {feature_ids} features"),
            ),
            SelectionEvent::SaveFailed { package_id, error } => self.line(
                glyphs.error,
                colors::ERROR,
                format!("save failed for package {package_id}: {error} (will retry on next change or on exit)"),
            ),
            SelectionEvent::SaveCancelled { package_id } => self.line(
                glyphs.warning,
                colors::WARNING,
                format!("discarded unsaved changes for package {package_id}"),
            ),
            _ => {}
        }
    }
}
