//! Forest generators shared by the property tests.

use proptest::prelude::*;

use rentvix::domain::entities::{MenuKind, MenuNode, NodeKind};
use rentvix::NodeId;

#[derive(Debug, Clone)]
struct Shape {
    enabled: bool,
    children: Vec<Shape>,
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = any::<bool>().prop_map(|enabled| Shape {
        enabled,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 48, 4, |inner| {
        (any::<bool>(), prop::collection::vec(inner, 0..4))
            .prop_map(|(enabled, children)| Shape { enabled, children })
    })
}

/// Forests of one to three roots with unique numeric ids and random
/// enabled flags (partial states included)
pub fn forest() -> impl Strategy<Value = Vec<MenuNode>> {
    prop::collection::vec(shape(), 1..4).prop_map(|shapes| {
        let mut next = 0;
        shapes.iter().map(|s| build(s, 1, &mut next)).collect()
    })
}

fn build(shape: &Shape, level: u32, next: &mut u32) -> MenuNode {
    *next += 1;
    let id = next.to_string();
    let mut node = MenuNode::new(
        id.clone(),
        format!("Node {id}"),
        MenuKind::for_level(level),
        level,
    )
    .with_enabled(shape.enabled);
    node.children = shape
        .children
        .iter()
        .map(|child| build(child, level + 1, next))
        .collect();
    node
}

/// Every node, pre-order
pub fn flatten(forest: &[MenuNode]) -> Vec<&MenuNode> {
    fn walk<'a>(node: &'a MenuNode, out: &mut Vec<&'a MenuNode>) {
        out.push(node);
        for child in &node.children {
            walk(child, out);
        }
    }
    let mut out = Vec::new();
    for node in forest {
        walk(node, &mut out);
    }
    out
}

/// Ids in the subtree rooted at `id` (including `id`)
pub fn subtree_ids(forest: &[MenuNode], id: &NodeId) -> Vec<NodeId> {
    let root = rentvix::domain::entities::find_in(forest, id).expect("id is in the forest");
    flatten(std::slice::from_ref(root))
        .into_iter()
        .map(|n| n.id.clone())
        .collect()
}
