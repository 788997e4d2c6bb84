//! Packages command handler

use anyhow::Result;
use serde_json::json;

use rentvix::presentation::render::render_packages;

use super::Context;

pub fn cmd_packages(ctx: &Context) -> Result<()> {
    let packages = ctx.packages().list()?;

    if ctx.json {
        println!("{}", json!({ "event": "packages", "packages": packages }));
        return Ok(());
    }

    print!("{}", render_packages(&packages, ctx.render));
    Ok(())
}
