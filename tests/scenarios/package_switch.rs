//! Scenario: Switch package while an autosave is pending
//!
//! Journey: an admin edits package A, then picks package B from the
//! dropdown before A's debounce fires, and keeps editing B.
//!
//! Success Criteria:
//! - A's pending save never fires, not even with B's trees
//! - A load that finishes after a newer one started is ignored
//! - Only B's edits produce save calls

use std::time::{Duration, Instant};

use rentvix::application::LoadResult;
use rentvix::{NodeId, PackageId, SessionPhase, TreeDomain};

use crate::support::{harness, DEBOUNCE};

#[test]
fn scenario_switch_cancels_pending_save() {
    let mut h = harness();
    let a = PackageId::new(1);
    let b = PackageId::new(2);
    let t0 = Instant::now();

    h.coordinator.select_package(a).unwrap();
    h.coordinator
        .toggle(TreeDomain::Menu, &NodeId::new("1"), true, t0)
        .unwrap();
    assert!(h.coordinator.time_to_save(Instant::now()).is_some());

    h.coordinator.select_package(b).unwrap();
    assert_eq!(h.coordinator.phase(), SessionPhase::Ready(b));
    assert!(h.coordinator.time_to_save(Instant::now()).is_none());

    // Well past A's deadline: nothing to send.
    assert!(h.coordinator.poll(t0 + DEBOUNCE * 3).is_none());
    assert!(h.store.calls().is_empty());

    let t1 = t0 + DEBOUNCE * 4;
    h.coordinator
        .toggle(TreeDomain::Feature, &NodeId::new("billing"), true, t1)
        .unwrap();
    h.coordinator.poll(t1 + DEBOUNCE).unwrap();

    let calls = h.store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].package_id, b);
    assert!(calls[0].menu_ids.is_empty());
    assert_eq!(calls[0].feature_ids, vec![NodeId::new("billing")]);
    assert!(h.events.names().contains(&"save_cancelled"));
}

#[test]
fn scenario_late_load_of_previous_package_is_discarded() {
    let mut h = harness();
    let a = PackageId::new(1);
    let b = PackageId::new(2);

    let ticket_a = h.coordinator.begin_load(a);
    let outcome_a = h.coordinator.loader().fetch(a);
    let ticket_b = h.coordinator.begin_load(b);
    let outcome_b = h.coordinator.loader().fetch(b);

    // B lands first, then A's slower response arrives.
    assert_eq!(
        h.coordinator.complete_load(ticket_b, outcome_b).unwrap(),
        LoadResult::Ready
    );
    assert_eq!(
        h.coordinator.complete_load(ticket_a, outcome_a).unwrap(),
        LoadResult::Stale
    );
    assert_eq!(h.coordinator.phase(), SessionPhase::Ready(b));

    let t0 = Instant::now();
    h.coordinator
        .toggle(TreeDomain::Menu, &NodeId::new("1-1"), true, t0)
        .unwrap();
    h.coordinator.poll(t0 + DEBOUNCE + Duration::from_millis(1));

    let calls = h.store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].package_id, b);
}

#[test]
fn scenario_close_drops_pending_save() {
    let mut h = harness();
    let t0 = Instant::now();
    h.coordinator.select_package(PackageId::new(1)).unwrap();
    h.coordinator
        .toggle(TreeDomain::Menu, &NodeId::new("1-2"), true, t0)
        .unwrap();

    h.coordinator.close();

    assert_eq!(h.coordinator.phase(), SessionPhase::Idle);
    assert!(h.coordinator.poll(t0 + DEBOUNCE).is_none());
    assert!(h.store.calls().is_empty());
}
