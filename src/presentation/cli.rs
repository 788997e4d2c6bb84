//! CLI Argument Parsing
//!
//! Global flags (--data, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::TreeDomain;

/// RentVix - menu and feature entitlement builder for subscription packages
#[derive(Parser, Debug)]
#[command(name = "rentvix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding menus.json, features.json, packages.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Output NDJSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List packages
    Packages,

    /// Show a package's menu and feature trees
    Show {
        /// Package id
        #[arg(short, long)]
        package: i64,

        /// Only show one tree
        #[arg(short, long, value_enum)]
        domain: Option<TreeDomain>,
    },

    /// Toggle a node (and its subtree) and save immediately
    Toggle {
        /// Package id
        #[arg(short, long)]
        package: i64,

        /// Tree the node belongs to
        #[arg(short, long, value_enum)]
        domain: TreeDomain,

        /// Node id
        #[arg(long)]
        id: String,

        #[command(flatten)]
        state: ToggleState,
    },

    /// Edit a package interactively from stdin, with debounced autosave
    Edit {
        /// Package id to start with
        #[arg(short, long)]
        package: i64,
    },
}

/// Exactly one of `--on` / `--off`
#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct ToggleState {
    /// Enable the node and its descendants
    #[arg(long)]
    pub on: bool,

    /// Disable the node and its descendants
    #[arg(long)]
    pub off: bool,
}

impl ToggleState {
    pub fn enabled(&self) -> bool {
        self.on
    }
}
