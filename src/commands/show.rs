//! Show command handler
//!
//! Loads a package exactly as the editor would and prints its trees.

use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use rentvix::domain::ports::NoopEventSink;
use rentvix::domain::value_objects::TreeDomain;
use rentvix::presentation::factory;
use rentvix::presentation::render::render_tree;
use rentvix::SelectionCoordinator;

use super::Context;

pub fn cmd_show(ctx: &Context, package: i64, domain: Option<TreeDomain>) -> Result<()> {
    let option = ctx.require_package(package)?;
    let mut coordinator = factory::create_coordinator(
        &ctx.data_dir,
        ctx.config.coordinator_options(),
        Arc::new(NoopEventSink),
    );
    coordinator.select_package(option.id)?;

    let domains: Vec<TreeDomain> = match domain {
        Some(d) => vec![d],
        None => TreeDomain::ALL.to_vec(),
    };

    if ctx.json {
        println!("{}", tree_json(&coordinator, &domains));
        return Ok(());
    }

    println!("{} · {}", option.id, option.name);
    for d in domains {
        println!();
        print!("{}", render_domain(&coordinator, d, ctx));
    }
    Ok(())
}

pub(crate) fn render_domain(coordinator: &SelectionCoordinator, domain: TreeDomain, ctx: &Context) -> String {
    match domain {
        TreeDomain::Menu => render_tree(domain.display_name(), coordinator.menu_tree(), ctx.render),
        TreeDomain::Feature => {
            render_tree(domain.display_name(), coordinator.feature_tree(), ctx.render)
        }
    }
}

pub(crate) fn tree_json(coordinator: &SelectionCoordinator, domains: &[TreeDomain]) -> serde_json::Value {
    let mut value = json!({ "event": "trees" });
    if let Some(session) = coordinator.session() {
        value["package_id"] = json!(session.package_id());
    }
    for domain in domains {
        let key = domain.display_name().to_lowercase();
        value[key.as_str()] = match domain {
            TreeDomain::Menu => json!(coordinator.menu_tree()),
            TreeDomain::Feature => json!(coordinator.feature_tree()),
        };
    }
    value
}
