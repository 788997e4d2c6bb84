//! Property tests for the tree mapper.

use proptest::prelude::*;

use rentvix::domain::entities::MenuNode;
use rentvix::domain::services::set_all;
use rentvix::map_tree;

use crate::forest::forest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: mapping a serialized forest keeps ids, titles, kinds and
    /// levels, and comes back with everything disabled.
    #[test]
    fn property_mapper_preserves_shape_and_disables(tree in forest()) {
        let raw = serde_json::to_value(&tree).unwrap();

        let mapped: Vec<MenuNode> = map_tree(&raw);

        prop_assert_eq!(mapped, set_all(&tree, false));
    }

    /// PROPERTY: arbitrary JSON scalars and strings never make mapping panic.
    #[test]
    fn property_mapper_is_total_on_scalars(text in ".{0,32}", number in any::<i64>()) {
        let string_forest: Vec<MenuNode> = map_tree(&serde_json::Value::String(text));
        let number_forest: Vec<MenuNode> = map_tree(&serde_json::json!(number));

        prop_assert!(string_forest.is_empty());
        prop_assert!(number_forest.is_empty());
    }
}
