//! Tree Mapper
//!
//! Normalizes the nested payloads returned by the menu and feature endpoints
//! into canonical [`TreeNode`]s. Sources disagree on field names (`children`
//! vs `recursiveChildren` vs `items`, `title` vs `name` vs `menu_title`), so
//! every concern is resolved through a short ordered list of candidates.
//!
//! Mapping is total: missing or oddly typed fields degrade to defaults and
//! never fail. The mapper assigns levels and leaves every node disabled;
//! enablement is the cascade engine's job.

use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::entities::{NodeKind, TreeNode};
use crate::domain::value_objects::NodeId;

/// Candidate fields holding a node's children, in priority order
pub const CHILDREN_FIELDS: &[&str] = &["children", "recursiveChildren", "recursive_children", "items"];

/// Candidate fields holding a node's display text, in priority order
pub const TITLE_FIELDS: &[&str] = &["title", "name", "menu_title", "menuTitle"];

/// Candidate fields holding a node's id
pub const ID_FIELDS: &[&str] = &["id", "menu_id", "menuId", "feature_id", "featureId"];

/// Candidate fields holding a node's role tag
pub const TYPE_FIELDS: &[&str] = &["type", "menu_type", "menuType"];

/// Candidate fields holding a node's icon name
pub const ICON_FIELDS: &[&str] = &["icon", "menu_icon", "menuIcon"];

/// Fields that wrap the actual forest in REST envelopes (`{"data": [...]}`)
pub const ENVELOPE_FIELDS: &[&str] = &["data", "menus", "features"];

/// Title used when no title candidate holds text
pub const UNTITLED: &str = "Untitled";

/// Level given to the first rendered rank
pub const BASE_LEVEL: u32 = 1;

/// Marks synthetic ids so they never collide with backend ids
pub const SYNTHETIC_ID_PREFIX: char = '~';

/// Map a raw payload into a forest, with root nodes at [`BASE_LEVEL`]
pub fn map_tree<K: NodeKind>(raw: &Value) -> Vec<TreeNode<K>> {
    map_tree_from(raw, BASE_LEVEL)
}

/// Map a raw payload into a forest, with root nodes at `base_level`.
///
/// Accepts a bare array, an envelope object (`{"data": [...]}`), or a single
/// node object. Anything else maps to an empty forest.
pub fn map_tree_from<K: NodeKind>(raw: &Value, base_level: u32) -> Vec<TreeNode<K>> {
    match unwrap_envelope(raw) {
        Value::Array(items) => map_children(items, base_level, None),
        Value::Object(obj) => vec![map_node(obj, base_level, synthetic_id(None, 0))],
        other => {
            trace!(kind = value_kind(other), "tree payload is not an array or object");
            Vec::new()
        }
    }
}

fn unwrap_envelope(raw: &Value) -> &Value {
    let mut current = raw;
    while let Value::Object(obj) = current {
        // A node object has its own title/children; only unwrap true envelopes.
        if has_any(obj, TITLE_FIELDS) || has_any(obj, ID_FIELDS) {
            break;
        }
        match ENVELOPE_FIELDS
            .iter()
            .find_map(|f| obj.get(*f).filter(|v| v.is_array() || v.is_object()))
        {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

fn map_children<K: NodeKind>(
    items: &[Value],
    level: u32,
    parent_id: Option<&NodeId>,
) -> Vec<TreeNode<K>> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(obj) => Some(map_node(obj, level, synthetic_id(parent_id, index))),
            other => {
                trace!(depth = level, index, kind = value_kind(other), "skipping non-object tree entry");
                None
            }
        })
        .collect()
}

/// Positional id for a node without one: `~<index>` at the root,
/// `~<parent>.<index>` below it.
fn synthetic_id(parent_id: Option<&NodeId>, index: usize) -> NodeId {
    match parent_id {
        Some(parent) => {
            let parent = parent.as_str().trim_start_matches(SYNTHETIC_ID_PREFIX);
            NodeId::new(format!("{SYNTHETIC_ID_PREFIX}{parent}.{index}"))
        }
        None => NodeId::new(format!("{SYNTHETIC_ID_PREFIX}{index}")),
    }
}

fn map_node<K: NodeKind>(obj: &Map<String, Value>, level: u32, fallback_id: NodeId) -> TreeNode<K> {
    let id = ID_FIELDS
        .iter()
        .find_map(|f| obj.get(*f).and_then(NodeId::from_json))
        .unwrap_or(fallback_id);

    let title = first_text(obj, TITLE_FIELDS).unwrap_or_else(|| UNTITLED.to_string());

    let kind = first_text(obj, TYPE_FIELDS)
        .and_then(|tag| K::parse(&tag))
        .unwrap_or_else(|| K::for_level(level));

    let icon = first_text(obj, ICON_FIELDS);

    let children = CHILDREN_FIELDS
        .iter()
        .find_map(|f| obj.get(*f).and_then(Value::as_array))
        .map(|items| map_children(items, level + 1, Some(&id)))
        .unwrap_or_default();

    TreeNode {
        id,
        title,
        kind,
        icon,
        enabled: false,
        level,
        children,
    }
}

/// First candidate holding a non-blank string (numbers are stringified)
fn first_text(obj: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|f| match obj.get(*f) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn has_any(obj: &Map<String, Value>, fields: &[&str]) -> bool {
    fields.iter().any(|f| obj.contains_key(*f))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
