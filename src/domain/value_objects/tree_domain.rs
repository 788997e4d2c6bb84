//! TreeDomain value object - which entitlement tree a node belongs to

use serde::{Deserialize, Serialize};

/// The two trees edited by the package builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TreeDomain {
    /// Menu access: groups, modules, menus, submenus
    #[serde(alias = "menus")]
    Menu,
    /// Feature entitlements: categories, features, subfeatures
    #[serde(alias = "features")]
    Feature,
}

impl TreeDomain {
    /// Both domains, in the order they are loaded and rendered
    pub const ALL: [TreeDomain; 2] = [TreeDomain::Menu, TreeDomain::Feature];

    /// Short identifier used in CLI arguments and event payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            TreeDomain::Menu => "menu",
            TreeDomain::Feature => "feature",
        }
    }

    /// Heading shown above a rendered tree
    pub fn display_name(&self) -> &'static str {
        match self {
            TreeDomain::Menu => "Menus",
            TreeDomain::Feature => "Features",
        }
    }

    /// Parse a loose user-supplied name (`menu`, `menus`, `features`, ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "menu" | "menus" | "m" => Some(TreeDomain::Menu),
            "feature" | "features" | "f" => Some(TreeDomain::Feature),
            _ => None,
        }
    }
}

impl std::fmt::Display for TreeDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
