//! Property tests for the cascade engine.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::sample::Index;

use rentvix::domain::entities::count_enabled;
use rentvix::{cascade_toggle, collect_enabled_ids, reconcile, NodeId};

use crate::forest::{flatten, forest, subtree_ids};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a toggle sets the whole target subtree and nothing else.
    #[test]
    fn property_cascade_sets_subtree_only(
        tree in forest(),
        pick in any::<Index>(),
        enabled in any::<bool>()
    ) {
        let nodes = flatten(&tree);
        let target = nodes[pick.index(nodes.len())].id.clone();
        let inside: HashSet<NodeId> = subtree_ids(&tree, &target).into_iter().collect();

        let toggled = cascade_toggle(&tree, &target, enabled);

        for (before, after) in nodes.iter().zip(flatten(&toggled)) {
            prop_assert_eq!(&before.id, &after.id);
            if inside.contains(&after.id) {
                prop_assert_eq!(after.enabled, enabled, "node {} inside subtree", after.id);
            } else {
                prop_assert_eq!(after.enabled, before.enabled, "node {} outside subtree", after.id);
            }
        }
    }

    /// PROPERTY: toggling the same node to the same value twice changes nothing more.
    #[test]
    fn property_cascade_is_idempotent(
        tree in forest(),
        pick in any::<Index>(),
        enabled in any::<bool>()
    ) {
        let nodes = flatten(&tree);
        let target = nodes[pick.index(nodes.len())].id.clone();

        let once = cascade_toggle(&tree, &target, enabled);
        let twice = cascade_toggle(&once, &target, enabled);

        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: collect-then-reconcile restores every node's enabled flag.
    #[test]
    fn property_collect_then_reconcile_is_identity(tree in forest()) {
        let ids: HashSet<NodeId> = collect_enabled_ids(&tree).into_iter().collect();

        prop_assert_eq!(reconcile(&tree, &ids), tree);
    }

    /// PROPERTY: reconcile enables exactly the listed ids, regardless of structure.
    #[test]
    fn property_reconcile_is_per_node_membership(
        tree in forest(),
        raw_ids in prop::collection::hash_set(1u32..64, 0..24)
    ) {
        let ids: HashSet<NodeId> = raw_ids.iter().map(|i| NodeId::new(i.to_string())).collect();

        let reconciled = reconcile(&tree, &ids);

        for node in flatten(&reconciled) {
            prop_assert_eq!(node.enabled, ids.contains(&node.id), "node {}", node.id);
        }
    }

    /// PROPERTY: an id that is not in the forest leaves it untouched.
    #[test]
    fn property_unknown_target_is_noop(tree in forest(), enabled in any::<bool>()) {
        let toggled = cascade_toggle(&tree, &NodeId::new("nonexistent-id"), enabled);

        prop_assert_eq!(toggled, tree);
    }

    /// PROPERTY: collected ids are unique and match the enabled count.
    #[test]
    fn property_collect_reports_each_enabled_node_once(tree in forest()) {
        let ids = collect_enabled_ids(&tree);
        let unique: HashSet<&NodeId> = ids.iter().collect();

        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(ids.len(), count_enabled(&tree));
    }
}
