//! RentVix CLI - menu and feature entitlement builder
//!
//! Usage: rentvix <COMMAND>
//!
//! Commands:
//!   packages  List packages
//!   show      Show a package's menu and feature trees
//!   toggle    Toggle a node (and its subtree) and save immediately
//!   edit      Edit a package from stdin with debounced autosave

use is_terminal::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use rentvix::config::Config;
use rentvix::presentation::render::render_warning;
use rentvix::presentation::{Cli, Commands, RenderOptions};

mod commands;
mod logging;

use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(Some(&cwd));
    logging::setup_logging(cli.verbose, config.output.verbosity);

    let render = RenderOptions {
        unicode: config.output.unicode,
        color: !cli.json && std::io::stdout().is_terminal(),
    };
    for warning in &warnings {
        eprint!("{}", render_warning(&warning.to_string(), render));
    }

    let ctx = Context {
        data_dir: cli.data.clone().unwrap_or_else(|| resolve(&cwd, &config.data.dir)),
        json: cli.json,
        render,
        config,
    };
    tracing::debug!(data_dir = %ctx.data_dir.display(), "resolved data directory");

    match cli.command {
        Commands::Packages => commands::packages::cmd_packages(&ctx),
        Commands::Show { package, domain } => commands::show::cmd_show(&ctx, package, domain),
        Commands::Toggle {
            package,
            domain,
            id,
            state,
        } => commands::toggle::cmd_toggle(&ctx, package, domain, &id, state.enabled()),
        Commands::Edit { package } => commands::edit::cmd_edit(&ctx, package),
    }
}

fn resolve(cwd: &std::path::Path, dir: &std::path::Path) -> PathBuf {
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        cwd.join(dir)
    }
}
