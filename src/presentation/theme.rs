//! Design tokens for the builder CLI.
//!
//! All glyphs and colors come from this module.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";

    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";
}

/// Glyph set picked once per output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
    pub partial: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                success: icons::SUCCESS,
                error: icons::ERROR,
                warning: icons::WARNING,
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                partial: icons::PARTIAL,
            }
        } else {
            Self {
                success: icons_ascii::SUCCESS,
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                partial: icons_ascii::PARTIAL,
            }
        }
    }
}
