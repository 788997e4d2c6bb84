//! Scenario: Reopen a package with a partial saved selection
//!
//! Journey: a package was saved with Vehicles and Calendar enabled but not
//! their parents. Reopening it must show exactly that, without re-cascading.
//!
//! Success Criteria:
//! - Saved ids are enabled, their parents are not
//! - Loading alone never schedules or sends a save

use std::time::{Duration, Instant};

use rentvix::domain::entities::{find_in, SelectionState};
use rentvix::{NodeId, PackageId, PackageSelection, SessionPhase, TreeDomain};

use crate::support::harness;

#[test]
fn scenario_reopen_keeps_partial_state() {
    let mut h = harness();
    let package = PackageId::new(3);
    h.store.seed(PackageSelection::empty(package).with_ids(
        TreeDomain::Menu,
        vec![NodeId::new("1-1"), NodeId::new("1-2-1")],
    ));

    h.coordinator.select_package(package).unwrap();
    assert_eq!(h.coordinator.phase(), SessionPhase::Ready(package));

    let tree = h.coordinator.menu_tree();
    let state = |id: &str| find_in(tree, &NodeId::new(id)).unwrap();
    assert!(!state("1").enabled);
    assert!(state("1-1").enabled);
    assert!(!state("1-2").enabled);
    assert!(state("1-2-1").enabled);
    assert_eq!(state("1-2").selection_state(), SelectionState::Partial);

    assert!(h.coordinator.time_to_save(Instant::now()).is_none());
    assert!(h
        .coordinator
        .poll(Instant::now() + Duration::from_secs(5))
        .is_none());
    assert!(h.store.calls().is_empty());
    assert_eq!(h.events.names(), ["load_started", "loaded"]);
}
