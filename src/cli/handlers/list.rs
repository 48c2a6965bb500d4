use anyhow::Result;

use super::CommandContext;
use super::utils::print_tutorial_list;

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let tutorials = ctx.catalog.list();

    if json {
        println!("{}", serde_json::to_string_pretty(tutorials)?);
    } else {
        print_tutorial_list(tutorials);
    }
    Ok(())
}
