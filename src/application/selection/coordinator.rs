//! Selection Coordinator
//!
//! Owns the editing session of one package at a time:
//!
//! ```text
//! Idle ──begin_load──▶ Loading ──complete_load(ok)──▶ Ready ──toggle──▶ Ready (save armed)
//!   ▲                     │                             │
//!   └──── fetch failed ───┘◀──────── begin_load ────────┘
//! ```
//!
//! Every `begin_load` bumps a generation counter. A load that completes with
//! an older ticket is discarded, and the pending autosave of the previous
//! session is cancelled before the new load starts, so a late save can never
//! write one package's ids over another's.
//!
//! The coordinator is synchronous and single-owner. Hosts drive time by
//! calling [`SelectionCoordinator::poll`] and may run fetches elsewhere through
//! a [`Loader`].

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::entities::{FeatureNode, MenuNode, PackageSelection};
use crate::domain::ports::{
    SelectionEvent, SelectionEventSink, SelectionStore, SourceError, StoreError, TreeSource,
};
use crate::domain::services::{map_tree, reconcile};
use crate::domain::value_objects::{NodeId, PackageId, PackageStatus, TreeDomain};
use crate::error::{RentvixError, RentvixResult};

use super::debounce::DEFAULT_DEBOUNCE_MS;
use super::session::SelectionSession;

/// Coordinator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatorOptions {
    /// Trailing-edge autosave delay
    pub debounce: Duration,
    /// Status written with every saved selection
    pub status: PackageStatus,
}

impl Default for CoordinatorOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            status: PackageStatus::default(),
        }
    }
}

impl CoordinatorOptions {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_status(mut self, status: PackageStatus) -> Self {
        self.status = status;
        self
    }
}

/// Observable lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading(PackageId),
    Ready(PackageId),
}

/// Handle tying a fetch to the `begin_load` that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    package_id: PackageId,
    generation: u64,
}

impl LoadTicket {
    pub fn package_id(&self) -> PackageId {
        self.package_id
    }
}

/// Raw results of the three fetches behind one load
#[derive(Debug)]
pub struct LoadOutcome {
    pub menu_tree: Result<Value, SourceError>,
    pub feature_tree: Result<Value, SourceError>,
    pub selection: Result<PackageSelection, StoreError>,
}

/// What `complete_load` did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadResult {
    /// Trees reconciled; the session is editable
    Ready,
    /// The ticket was superseded; the outcome was dropped
    Stale,
}

/// Result of a save attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReport {
    Saved(PackageSelection),
    Failed {
        package_id: PackageId,
        error: StoreError,
    },
}

impl SaveReport {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveReport::Saved(_))
    }
}

/// Fetches everything a load needs. Cheap to clone and `Send`, so hosts can
/// run it off the thread that owns the coordinator.
#[derive(Clone)]
pub struct Loader {
    source: Arc<dyn TreeSource>,
    store: Arc<dyn SelectionStore>,
}

impl Loader {
    pub fn new(source: Arc<dyn TreeSource>, store: Arc<dyn SelectionStore>) -> Self {
        Self { source, store }
    }

    /// Run the menu, feature and selection fetches concurrently and wait
    /// for all three.
    pub fn fetch(&self, package_id: PackageId) -> LoadOutcome {
        thread::scope(|scope| {
            let menus = scope.spawn(|| self.source.fetch_tree(TreeDomain::Menu));
            let features = scope.spawn(|| self.source.fetch_tree(TreeDomain::Feature));
            let selection = self.store.fetch_selection(package_id);
            LoadOutcome {
                menu_tree: join_fetch(menus, "menus"),
                feature_tree: join_fetch(features, "features"),
                selection,
            }
        })
    }
}

fn join_fetch(
    handle: thread::ScopedJoinHandle<'_, Result<Value, SourceError>>,
    resource: &str,
) -> Result<Value, SourceError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(SourceError::unavailable(resource, "fetch thread panicked")))
}

enum State {
    Idle,
    Loading(LoadTicket),
    Ready(SelectionSession),
}

pub struct SelectionCoordinator {
    loader: Loader,
    store: Arc<dyn SelectionStore>,
    events: Arc<dyn SelectionEventSink>,
    options: CoordinatorOptions,
    state: State,
    generation: u64,
}

impl SelectionCoordinator {
    pub fn new(
        source: Arc<dyn TreeSource>,
        store: Arc<dyn SelectionStore>,
        events: Arc<dyn SelectionEventSink>,
        options: CoordinatorOptions,
    ) -> Self {
        Self {
            loader: Loader::new(source, store.clone()),
            store,
            events,
            options,
            state: State::Idle,
            generation: 0,
        }
    }

    pub fn options(&self) -> CoordinatorOptions {
        self.options
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.state {
            State::Idle => SessionPhase::Idle,
            State::Loading(ticket) => SessionPhase::Loading(ticket.package_id),
            State::Ready(session) => SessionPhase::Ready(session.package_id()),
        }
    }

    /// The ready session, if any
    pub fn session(&self) -> Option<&SelectionSession> {
        match &self.state {
            State::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn menu_tree(&self) -> &[MenuNode] {
        self.session().map(|s| s.menu_tree()).unwrap_or_default()
    }

    pub fn feature_tree(&self) -> &[FeatureNode] {
        self.session().map(|s| s.feature_tree()).unwrap_or_default()
    }

    /// When the pending autosave fires, if one is armed
    pub fn time_to_save(&self, now: Instant) -> Option<Duration> {
        self.session().and_then(|s| s.pending_save().remaining(now))
    }

    /// A handle for running fetches on another thread
    pub fn loader(&self) -> Loader {
        self.loader.clone()
    }

    /// Start loading `package_id`, abandoning the current session.
    ///
    /// Any pending autosave is cancelled, not flushed, and any in-flight load
    /// becomes stale.
    pub fn begin_load(&mut self, package_id: PackageId) -> LoadTicket {
        self.abandon_session();
        self.generation += 1;
        let ticket = LoadTicket {
            package_id,
            generation: self.generation,
        };
        self.state = State::Loading(ticket);
        debug!(package = %package_id, generation = self.generation, "load started");
        self.events.on_event(SelectionEvent::LoadStarted { package_id });
        ticket
    }

    /// Reconcile fetched trees against the saved selection.
    ///
    /// Reconciliation only happens once every fetch succeeded. On any
    /// failure the coordinator returns to idle and the error is returned.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        outcome: LoadOutcome,
    ) -> RentvixResult<LoadResult> {
        let current = matches!(&self.state, State::Loading(t) if *t == ticket);
        if !current {
            debug!(
                package = %ticket.package_id,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale load"
            );
            self.events.on_event(SelectionEvent::LoadDiscarded {
                package_id: ticket.package_id,
            });
            return Ok(LoadResult::Stale);
        }

        let package_id = ticket.package_id;
        match build_session(package_id, outcome, self.options.debounce) {
            Ok(session) => {
                let (menu_count, menu_enabled) = session.counts(TreeDomain::Menu);
                let (feature_count, feature_enabled) = session.counts(TreeDomain::Feature);
                info!(
                    package = %package_id,
                    menu_count,
                    menu_enabled,
                    feature_count,
                    feature_enabled,
                    "package loaded"
                );
                self.state = State::Ready(session);
                self.events.on_event(SelectionEvent::Loaded {
                    package_id,
                    menu_count,
                    feature_count,
                    menu_enabled,
                    feature_enabled,
                });
                Ok(LoadResult::Ready)
            }
            Err(err) => {
                warn!(package = %package_id, error = %err, "load failed");
                self.state = State::Idle;
                self.events.on_event(SelectionEvent::LoadFailed {
                    package_id,
                    error: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Load `package_id` on the calling thread (fetches still run in parallel)
    pub fn select_package(&mut self, package_id: PackageId) -> RentvixResult<LoadResult> {
        let ticket = self.begin_load(package_id);
        let outcome = self.loader.fetch(package_id);
        self.complete_load(ticket, outcome)
    }

    /// Cascade a user toggle and arm the autosave.
    ///
    /// Returns `Ok(false)` when `id` is not in the tree; nothing changes and
    /// no save is scheduled.
    pub fn toggle(
        &mut self,
        domain: TreeDomain,
        id: &NodeId,
        enabled: bool,
        now: Instant,
    ) -> RentvixResult<bool> {
        let State::Ready(session) = &mut self.state else {
            return Err(RentvixError::NotReady);
        };
        if !session.toggle(domain, id, enabled) {
            debug!(domain = %domain, id = %id, "toggle ignored, node not in tree");
            return Ok(false);
        }
        let package_id = session.package_id();
        debug!(package = %package_id, domain = %domain, id = %id, enabled, "toggled");
        self.events.on_event(SelectionEvent::Toggled {
            package_id,
            domain,
            id: id.clone(),
            enabled,
        });
        self.schedule_save(now);
        Ok(true)
    }

    /// Enable or disable every node of a domain, then arm the autosave
    pub fn set_all(&mut self, domain: TreeDomain, enabled: bool, now: Instant) -> RentvixResult<()> {
        let State::Ready(session) = &mut self.state else {
            return Err(RentvixError::NotReady);
        };
        session.set_all(domain, enabled);
        debug!(package = %session.package_id(), domain = %domain, enabled, "set all");
        self.schedule_save(now);
        Ok(())
    }

    fn schedule_save(&mut self, now: Instant) {
        let State::Ready(session) = &mut self.state else {
            return;
        };
        let delay = session.schedule_save(now);
        let package_id = session.package_id();
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        debug!(package = %package_id, delay_ms, "save scheduled");
        self.events
            .on_event(SelectionEvent::SaveScheduled { package_id, delay_ms });
    }

    /// Fire the autosave if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<SaveReport> {
        let State::Ready(session) = &mut self.state else {
            return None;
        };
        if !session.pending_save_mut().take_due(now) {
            return None;
        }
        self.save_now()
    }

    /// Send unsaved changes immediately.
    ///
    /// Covers both an armed autosave and state left behind by a failed save.
    pub fn flush(&mut self) -> Option<SaveReport> {
        let State::Ready(session) = &mut self.state else {
            return None;
        };
        let unsaved = session.has_unsaved_changes();
        session.pending_save_mut().cancel();
        if !unsaved {
            return None;
        }
        self.save_now()
    }

    /// Drop the session and any pending autosave; go idle
    pub fn close(&mut self) {
        self.abandon_session();
        self.generation += 1;
        self.state = State::Idle;
        debug!("builder closed");
        self.events.on_event(SelectionEvent::Closed);
    }

    fn save_now(&mut self) -> Option<SaveReport> {
        let State::Ready(session) = &mut self.state else {
            return None;
        };
        // Collected from the latest trees at fire time, not at schedule time.
        let payload = session.snapshot(self.options.status);
        let package_id = payload.package_id;

        let result = self.store.save_selection(&payload);
        session.record_save(result.is_ok());

        match result {
            Ok(()) => {
                info!(
                    package = %package_id,
                    menu_ids = payload.menu_ids.len(),
                    feature_ids = payload.feature_ids.len(),
                    "selection saved"
                );
                self.events.on_event(SelectionEvent::Saved {
                    package_id,
                    menu_ids: payload.menu_ids.len(),
                    feature_ids: payload.feature_ids.len(),
                });
                Some(SaveReport::Saved(payload))
            }
            Err(error) => {
                // Local state is kept and stays unsaved until a save succeeds.
                warn!(package = %package_id, error = %error, "save failed");
                self.events.on_event(SelectionEvent::SaveFailed {
                    package_id,
                    error: error.to_string(),
                });
                Some(SaveReport::Failed { package_id, error })
            }
        }
    }

    fn abandon_session(&mut self) {
        if let State::Ready(session) = &mut self.state {
            let unsaved = session.has_unsaved_changes();
            session.pending_save_mut().cancel();
            if unsaved {
                let package_id = session.package_id();
                debug!(package = %package_id, "pending save cancelled");
                self.events
                    .on_event(SelectionEvent::SaveCancelled { package_id });
            }
        }
    }
}

fn build_session(
    package_id: PackageId,
    outcome: LoadOutcome,
    debounce: Duration,
) -> RentvixResult<SelectionSession> {
    let menus = outcome.menu_tree?;
    let features = outcome.feature_tree?;
    let selection = outcome.selection?;

    let menu_ids: HashSet<NodeId> = selection.menu_ids.into_iter().collect();
    let feature_ids: HashSet<NodeId> = selection.feature_ids.into_iter().collect();
    let menu_tree: Vec<MenuNode> = reconcile(&map_tree(&menus), &menu_ids);
    let feature_tree: Vec<FeatureNode> = reconcile(&map_tree(&features), &feature_ids);

    Ok(SelectionSession::new(package_id, menu_tree, feature_tree, debounce))
}
