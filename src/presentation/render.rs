//! Plain-text rendering of trees, packages and session summaries.
//!
//! Every function returns a `String`; callers decide where it goes.

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};

use crate::domain::entities::{count_enabled, count_nodes, NodeKind, SelectionState, TreeNode};
use crate::domain::value_objects::{PackageId, PackageOption};

use super::theme::{colors, Glyphs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub color: bool,
}

impl RenderOptions {
    pub fn plain() -> Self {
        Self {
            unicode: true,
            color: false,
        }
    }

    fn glyphs(&self) -> Glyphs {
        Glyphs::new(self.unicode)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Render a forest under a heading with its enabled/total count.
///
/// Indentation follows depth within the forest, two spaces per rank.
pub fn render_tree<K: NodeKind>(heading: &str, forest: &[TreeNode<K>], opts: RenderOptions) -> String {
    let mut out = format!(
        "{heading} ({}/{} enabled)\n",
        count_enabled(forest),
        count_nodes(forest)
    );
    if forest.is_empty() {
        out.push_str(&opts.paint("  (empty)", colors::DIM));
        out.push('\n');
    }
    for node in forest {
        render_node(&mut out, node, 0, opts);
    }
    out
}

fn render_node<K: NodeKind>(out: &mut String, node: &TreeNode<K>, depth: usize, opts: RenderOptions) {
    let glyphs = opts.glyphs();
    let glyph = match node.selection_state() {
        SelectionState::Selected => opts.paint(glyphs.selected, colors::SUCCESS),
        SelectionState::Partial => opts.paint(glyphs.partial, colors::WARNING),
        SelectionState::Unselected => opts.paint(glyphs.unselected, colors::DIM),
    };
    let meta = opts.paint(&format!("{} #{}", node.kind.as_str(), node.id), colors::DIM);
    let _ = writeln!(out, "{}{} {}  {}", "  ".repeat(depth), glyph, node.title, meta);
    for child in &node.children {
        render_node(out, child, depth + 1, opts);
    }
}

/// One-line summary of a loaded package
pub fn render_summary(
    package_id: PackageId,
    menus: (usize, usize),
    features: (usize, usize),
    save_pending: bool,
) -> String {
    let autosave = if save_pending { "pending" } else { "idle" };
    format!(
        "package {package_id}: menus {}/{}, features {}/{}, autosave {autosave}\n",
        menus.1, menus.0, features.1, features.0
    )
}

pub fn render_packages(packages: &[PackageOption], opts: RenderOptions) -> String {
    if packages.is_empty() {
        return format!("{}\n", opts.paint("No packages found", colors::DIM));
    }
    let width = packages
        .iter()
        .map(|p| p.id.to_string().len())
        .max()
        .unwrap_or(1);
    packages
        .iter()
        .map(|p| format!("{:>width$}  {}\n", p.id.to_string(), p.name))
        .collect()
}

pub fn render_warning(message: &str, opts: RenderOptions) -> String {
    format!("{} {message}\n", opts.paint(opts.glyphs().warning, colors::WARNING))
}
