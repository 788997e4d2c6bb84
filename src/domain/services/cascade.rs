//! Cascade Engine
//!
//! Pure operations over a forest of [`TreeNode`]s. Every function takes an
//! immutable forest and returns a fresh one, so callers can keep the previous
//! snapshot for re-render diffing or undo.
//!
//! Two update rules coexist on purpose:
//! - [`cascade_toggle`] forces a whole subtree to one value (user clicks).
//! - [`reconcile`] is a per-node membership test with no cascading (loading a
//!   saved selection restores partial states exactly as they were saved).

use std::collections::HashSet;

use crate::domain::entities::{NodeKind, TreeNode};
use crate::domain::value_objects::NodeId;

/// Set `target` and every descendant to `enabled`.
///
/// Ancestors and unrelated branches are left untouched. An unknown `target`
/// returns an identical forest; toggles racing a tree reload are expected.
pub fn cascade_toggle<K: NodeKind>(
    forest: &[TreeNode<K>],
    target: &NodeId,
    enabled: bool,
) -> Vec<TreeNode<K>> {
    forest
        .iter()
        .map(|node| toggle_node(node, target, enabled))
        .collect()
}

fn toggle_node<K: NodeKind>(node: &TreeNode<K>, target: &NodeId, enabled: bool) -> TreeNode<K> {
    if &node.id == target {
        return fill_subtree(node, enabled);
    }
    let children = node
        .children
        .iter()
        .map(|c| toggle_node(c, target, enabled))
        .collect();
    rebuild(node, node.enabled, children)
}

fn fill_subtree<K: NodeKind>(node: &TreeNode<K>, enabled: bool) -> TreeNode<K> {
    let children = node
        .children
        .iter()
        .map(|c| fill_subtree(c, enabled))
        .collect();
    rebuild(node, enabled, children)
}

/// Set every node of the forest to `enabled` (select all / select none)
pub fn set_all<K: NodeKind>(forest: &[TreeNode<K>], enabled: bool) -> Vec<TreeNode<K>> {
    forest.iter().map(|n| fill_subtree(n, enabled)).collect()
}

/// Ids of every enabled node, at any depth, in pre-order.
///
/// Parents and children contribute independently. Duplicate ids (only
/// possible when a caller glues forests together) are reported once.
pub fn collect_enabled_ids<K: NodeKind>(forest: &[TreeNode<K>]) -> Vec<NodeId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for node in forest {
        collect_into(node, &mut seen, &mut ids);
    }
    ids
}

fn collect_into<K: NodeKind>(node: &TreeNode<K>, seen: &mut HashSet<NodeId>, out: &mut Vec<NodeId>) {
    if node.enabled && seen.insert(node.id.clone()) {
        out.push(node.id.clone());
    }
    for child in &node.children {
        collect_into(child, seen, out);
    }
}

/// Overwrite every node's `enabled` with `allowed.contains(id)`.
///
/// A full per-node overwrite: a node's result never depends on its parent's
/// or children's membership.
pub fn reconcile<K: NodeKind>(forest: &[TreeNode<K>], allowed: &HashSet<NodeId>) -> Vec<TreeNode<K>> {
    forest.iter().map(|n| reconcile_node(n, allowed)).collect()
}

fn reconcile_node<K: NodeKind>(node: &TreeNode<K>, allowed: &HashSet<NodeId>) -> TreeNode<K> {
    let children = node
        .children
        .iter()
        .map(|c| reconcile_node(c, allowed))
        .collect();
    rebuild(node, allowed.contains(&node.id), children)
}

/// Whether `id` exists anywhere in the forest
pub fn contains<K: NodeKind>(forest: &[TreeNode<K>], id: &NodeId) -> bool {
    forest.iter().any(|n| n.find(id).is_some())
}

fn rebuild<K: NodeKind>(node: &TreeNode<K>, enabled: bool, children: Vec<TreeNode<K>>) -> TreeNode<K> {
    TreeNode {
        id: node.id.clone(),
        title: node.title.clone(),
        kind: node.kind,
        icon: node.icon.clone(),
        enabled,
        level: node.level,
        children,
    }
}
