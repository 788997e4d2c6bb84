//! Cancellable trailing-edge debounce timer
//!
//! The timer owns no thread and no callback. The host feeds it `Instant`s and
//! asks whether the deadline passed, which keeps the coordinator synchronous
//! and lets tests drive time explicitly.

use std::time::{Duration, Instant};

/// Autosave delay used by both builder domains
pub const DEFAULT_DEBOUNCE_MS: u64 = 600;

#[derive(Debug, Clone)]
pub struct DebounceTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm (or re-arm) the timer to fire `delay` after `now`.
    ///
    /// Rescheduling pushes the deadline back, so a burst of calls fires once.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Disarm the timer. Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }

    /// Disarm and return `true` if the deadline has passed
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Time left before firing; `None` when disarmed
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }
}
