use crate::error::TutgraphError;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_tutorial;

pub fn handle_show(ctx: &CommandContext, id: i32, json: bool) -> Result<()> {
    let tutorial = ctx.catalog.get(id).ok_or(TutgraphError::NotFound(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(tutorial)?);
    } else {
        print_tutorial(tutorial);
    }
    Ok(())
}
