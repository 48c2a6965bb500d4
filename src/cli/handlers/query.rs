use crate::graphql::execute;
use anyhow::{Context, Result};

use super::CommandContext;
use super::utils::{block_on, to_json};

pub fn handle_query(
    ctx: &CommandContext,
    query: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = ctx.schema();

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Failed to parse --variables as a JSON object")?
    } else {
        async_graphql::Variables::default()
    };

    let response = block_on(execute(&schema, &query, vars))??;

    println!("{}", to_json(&response, ctx.config.output.pretty)?);
    Ok(())
}
