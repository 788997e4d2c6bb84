//! Toggle command handler
//!
//! One-shot edit: load, cascade, save without waiting for the debounce.

use std::time::Instant;

use anyhow::{bail, Result};

use rentvix::domain::value_objects::{NodeId, TreeDomain};
use rentvix::presentation::factory;
use rentvix::SaveReport;

use super::show::render_domain;
use super::Context;

pub fn cmd_toggle(
    ctx: &Context,
    package: i64,
    domain: TreeDomain,
    id: &str,
    enabled: bool,
) -> Result<()> {
    let option = ctx.require_package(package)?;
    let events = factory::create_event_sink(ctx.json, ctx.render);
    let mut coordinator =
        factory::create_coordinator(&ctx.data_dir, ctx.config.coordinator_options(), events);
    coordinator.select_package(option.id)?;

    let node = NodeId::new(id.trim());
    if !coordinator.toggle(domain, &node, enabled, Instant::now())? {
        bail!("node '{node}' is not in the {domain} tree of package {}", option.id);
    }

    let report = coordinator.flush();
    if !ctx.json {
        print!("{}", render_domain(&coordinator, domain, ctx));
    }
    coordinator.close();

    if let Some(SaveReport::Failed { error, .. }) = report {
        bail!(error);
    }
    Ok(())
}
