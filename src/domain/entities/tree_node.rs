//! Tree Node entity
//!
//! A hierarchical, selectable node shared by the menu tree and the feature
//! tree. The only state that changes during an editing session is `enabled`;
//! shape, titles and levels are fixed once the tree is mapped from its source.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{NodeId, TreeDomain};

/// Closed set of node roles for one tree domain.
///
/// Kinds drive display and filtering only; the cascade engine never looks
/// at them.
pub trait NodeKind: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Domain whose nodes carry this kind
    const DOMAIN: TreeDomain;

    /// Parse an explicit `type` tag from the source payload
    fn parse(tag: &str) -> Option<Self>;

    /// Kind implied by depth when the source gives no usable tag
    fn for_level(level: u32) -> Self;

    /// Lowercase tag, as written by the backend
    fn as_str(&self) -> &'static str;
}

/// Roles in the menu-access tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Group,
    Module,
    Menu,
    Submenu,
}

impl NodeKind for MenuKind {
    const DOMAIN: TreeDomain = TreeDomain::Menu;

    fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "group" | "menu_group" | "menugroup" => Some(MenuKind::Group),
            "module" => Some(MenuKind::Module),
            "menu" => Some(MenuKind::Menu),
            "submenu" | "sub_menu" | "sub-menu" => Some(MenuKind::Submenu),
            _ => None,
        }
    }

    fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => MenuKind::Group,
            2 => MenuKind::Module,
            3 => MenuKind::Menu,
            _ => MenuKind::Submenu,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            MenuKind::Group => "group",
            MenuKind::Module => "module",
            MenuKind::Menu => "menu",
            MenuKind::Submenu => "submenu",
        }
    }
}

/// Roles in the feature-entitlement tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Category,
    Feature,
    Subfeature,
}

impl NodeKind for FeatureKind {
    const DOMAIN: TreeDomain = TreeDomain::Feature;

    fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "category" | "feature_category" => Some(FeatureKind::Category),
            "feature" => Some(FeatureKind::Feature),
            "subfeature" | "sub_feature" | "sub-feature" => Some(FeatureKind::Subfeature),
            _ => None,
        }
    }

    fn for_level(level: u32) -> Self {
        match level {
            0 | 1 => FeatureKind::Category,
            2 => FeatureKind::Feature,
            _ => FeatureKind::Subfeature,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Category => "category",
            FeatureKind::Feature => "feature",
            FeatureKind::Subfeature => "subfeature",
        }
    }
}

/// Display-only summary of a node and its subtree (●, ◐, ○).
///
/// Derived on demand; never written back into `enabled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Node and every descendant enabled
    Selected,
    /// Node and every descendant disabled
    Unselected,
    /// Anything in between
    Partial,
}

/// A node in a menu or feature tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode<K> {
    pub id: NodeId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: K,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub enabled: bool,
    /// Depth from the root, starting at 1; used for indentation only
    pub level: u32,
    pub children: Vec<TreeNode<K>>,
}

/// A node of the menu-access tree
pub type MenuNode = TreeNode<MenuKind>;

/// A node of the feature-entitlement tree
pub type FeatureNode = TreeNode<FeatureKind>;

impl<K: NodeKind> TreeNode<K> {
    /// Create a disabled leaf node
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>, kind: K, level: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            icon: None,
            enabled: false,
            level,
            children: Vec::new(),
        }
    }

    /// Builder-style child attachment
    pub fn with_child(mut self, child: TreeNode<K>) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style enabled flag
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Depth-first search for `id` in this subtree (including self)
    pub fn find(&self, id: &NodeId) -> Option<&TreeNode<K>> {
        if &self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Number of nodes in this subtree (including self)
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Number of enabled nodes in this subtree (including self)
    pub fn enabled_count(&self) -> usize {
        usize::from(self.enabled) + self.children.iter().map(|c| c.enabled_count()).sum::<usize>()
    }

    /// Summarize this subtree for rendering
    pub fn selection_state(&self) -> SelectionState {
        let enabled = self.enabled_count();
        if enabled == 0 {
            SelectionState::Unselected
        } else if enabled == self.node_count() {
            SelectionState::Selected
        } else {
            SelectionState::Partial
        }
    }
}

/// Find `id` anywhere in a forest
pub fn find_in<'a, K: NodeKind>(forest: &'a [TreeNode<K>], id: &NodeId) -> Option<&'a TreeNode<K>> {
    forest.iter().find_map(|n| n.find(id))
}

/// Count all nodes in a forest
pub fn count_nodes<K: NodeKind>(forest: &[TreeNode<K>]) -> usize {
    forest.iter().map(|n| n.node_count()).sum()
}

/// Count enabled nodes in a forest
pub fn count_enabled<K: NodeKind>(forest: &[TreeNode<K>]) -> usize {
    forest.iter().map(|n| n.enabled_count()).sum()
}
