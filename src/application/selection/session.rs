//! Selection session
//!
//! Everything that belongs to the package currently being edited. Dropping
//! the session on a package switch is what discards its trees and its
//! pending autosave together.

use std::time::{Duration, Instant};

use crate::domain::entities::{count_enabled, count_nodes, FeatureNode, MenuNode, PackageSelection};
use crate::domain::services::{cascade_toggle, collect_enabled_ids, contains, set_all};
use crate::domain::value_objects::{NodeId, PackageId, PackageStatus, TreeDomain};

use super::debounce::DebounceTimer;

#[derive(Debug, Clone)]
pub struct SelectionSession {
    package_id: PackageId,
    menu_tree: Vec<MenuNode>,
    feature_tree: Vec<FeatureNode>,
    pending_save: DebounceTimer,
    /// Set when the last save attempt failed; cleared by the next success
    save_failed: bool,
}

impl SelectionSession {
    pub fn new(
        package_id: PackageId,
        menu_tree: Vec<MenuNode>,
        feature_tree: Vec<FeatureNode>,
        debounce: Duration,
    ) -> Self {
        Self {
            package_id,
            menu_tree,
            feature_tree,
            pending_save: DebounceTimer::new(debounce),
            save_failed: false,
        }
    }

    pub fn package_id(&self) -> PackageId {
        self.package_id
    }

    pub fn menu_tree(&self) -> &[MenuNode] {
        &self.menu_tree
    }

    pub fn feature_tree(&self) -> &[FeatureNode] {
        &self.feature_tree
    }

    pub fn pending_save(&self) -> &DebounceTimer {
        &self.pending_save
    }

    pub(crate) fn pending_save_mut(&mut self) -> &mut DebounceTimer {
        &mut self.pending_save
    }

    /// Edits not yet persisted: an armed autosave or a failed last save
    pub fn has_unsaved_changes(&self) -> bool {
        self.pending_save.is_pending() || self.save_failed
    }

    pub(crate) fn record_save(&mut self, succeeded: bool) {
        self.save_failed = !succeeded;
    }

    /// Cascade `enabled` onto `id` and its subtree.
    ///
    /// Returns `false` (and changes nothing) when `id` is not in the tree.
    pub fn toggle(&mut self, domain: TreeDomain, id: &NodeId, enabled: bool) -> bool {
        match domain {
            TreeDomain::Menu => {
                if !contains(&self.menu_tree, id) {
                    return false;
                }
                self.menu_tree = cascade_toggle(&self.menu_tree, id, enabled);
            }
            TreeDomain::Feature => {
                if !contains(&self.feature_tree, id) {
                    return false;
                }
                self.feature_tree = cascade_toggle(&self.feature_tree, id, enabled);
            }
        }
        true
    }

    /// Enable or disable a whole domain
    pub fn set_all(&mut self, domain: TreeDomain, enabled: bool) {
        match domain {
            TreeDomain::Menu => self.menu_tree = set_all(&self.menu_tree, enabled),
            TreeDomain::Feature => self.feature_tree = set_all(&self.feature_tree, enabled),
        }
    }

    /// Arm the autosave; returns the configured delay
    pub fn schedule_save(&mut self, now: Instant) -> Duration {
        self.pending_save.schedule(now);
        self.pending_save.delay()
    }

    /// Flatten both current trees into the persisted payload
    pub fn snapshot(&self, status: PackageStatus) -> PackageSelection {
        PackageSelection::empty(self.package_id)
            .with_ids(TreeDomain::Menu, collect_enabled_ids(&self.menu_tree))
            .with_ids(TreeDomain::Feature, collect_enabled_ids(&self.feature_tree))
            .with_status(status)
    }

    /// `(total, enabled)` node counts for one domain
    pub fn counts(&self, domain: TreeDomain) -> (usize, usize) {
        match domain {
            TreeDomain::Menu => (count_nodes(&self.menu_tree), count_enabled(&self.menu_tree)),
            TreeDomain::Feature => (
                count_nodes(&self.feature_tree),
                count_enabled(&self.feature_tree),
            ),
        }
    }
}
