//! Scenario: Enable a module with everything under it
//!
//! Journey: an admin opens an empty package and ticks "Bookings".
//!
//! Success Criteria:
//! - Bookings and its Calendar menu are enabled
//! - The Fleet group and the sibling Vehicles module are not
//! - One save fires after the debounce with exactly those two ids

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rentvix::domain::entities::find_in;
use rentvix::{collect_enabled_ids, NodeId, PackageId, TreeDomain};

use crate::support::{harness, DEBOUNCE};

fn enabled(tree: &[rentvix::MenuNode], id: &str) -> bool {
    find_in(tree, &NodeId::new(id)).unwrap().enabled
}

#[test]
fn scenario_enable_module_cascades_down_only() {
    let mut h = harness();
    let package = PackageId::new(1);
    h.coordinator.select_package(package).unwrap();

    let t0 = Instant::now();
    let found = h
        .coordinator
        .toggle(TreeDomain::Menu, &NodeId::new("1-2"), true, t0)
        .unwrap();
    assert!(found);

    let tree = h.coordinator.menu_tree();
    assert!(enabled(tree, "1-2"));
    assert!(enabled(tree, "1-2-1"));
    assert!(!enabled(tree, "1"));
    assert!(!enabled(tree, "1-1"));

    let ids: HashSet<NodeId> = collect_enabled_ids(tree).into_iter().collect();
    assert_eq!(ids, HashSet::from([NodeId::new("1-2"), NodeId::new("1-2-1")]));

    // Nothing is sent before the debounce elapses.
    assert!(h.coordinator.poll(t0 + Duration::from_millis(599)).is_none());
    let report = h.coordinator.poll(t0 + DEBOUNCE).unwrap();
    assert!(report.is_saved());

    let calls = h.store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].package_id, package);
    assert_eq!(calls[0].menu_ids, vec![NodeId::new("1-2"), NodeId::new("1-2-1")]);
    assert!(calls[0].feature_ids.is_empty());
}

#[test]
fn scenario_rapid_toggles_coalesce_into_one_save() {
    let mut h = harness();
    h.coordinator.select_package(PackageId::new(1)).unwrap();

    let t0 = Instant::now();
    let step = Duration::from_millis(200);
    h.coordinator
        .toggle(TreeDomain::Menu, &NodeId::new("1"), true, t0)
        .unwrap();
    h.coordinator
        .toggle(TreeDomain::Menu, &NodeId::new("1-1"), false, t0 + step)
        .unwrap();
    h.coordinator
        .toggle(TreeDomain::Feature, &NodeId::new("gps"), true, t0 + step * 2)
        .unwrap();

    // The deadline trails the last toggle, not the first.
    assert!(h.coordinator.poll(t0 + DEBOUNCE).is_none());
    assert!(h.coordinator.poll(t0 + step * 2 + DEBOUNCE).is_some());

    let calls = h.store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].menu_ids,
        vec![NodeId::new("1"), NodeId::new("1-2"), NodeId::new("1-2-1")]
    );
    assert_eq!(calls[0].feature_ids, vec![NodeId::new("gps")]);
}
