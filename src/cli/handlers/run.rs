use crate::graphql::{DEMO_QUERY, execute};
use anyhow::{Context, Result};

use super::CommandContext;
use super::utils::{block_on, to_json};

pub fn handle_run(ctx: &CommandContext) -> Result<()> {
    tracing::info!("Graphql tut");

    let schema = ctx.schema();
    let response = block_on(execute(&schema, DEMO_QUERY, Default::default()))?
        .context("Failed to execute demonstration query")?;

    println!("{}", to_json(&response, ctx.config.output.pretty)?);
    Ok(())
}
