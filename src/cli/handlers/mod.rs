mod context;
mod list;
mod query;
mod run;
mod schema;
mod show;
mod utils;

pub use context::CommandContext;
pub use list::handle_list;
pub use query::handle_query;
pub use run::handle_run;
pub use schema::handle_schema;
pub use show::handle_show;
