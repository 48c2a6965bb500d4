use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tutgraph")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL schema over tutorials, authors and comments"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (searches upward for .tutgraph.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file
    #[arg(long, global = true, env = "TUTGRAPH_LOG_FILE")]
    pub log_file: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demonstration query and print the result
    Run,

    /// Execute a GraphQL query against the tutorial schema
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL form
    Schema,

    /// List all tutorials
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single tutorial
    Show {
        /// Tutorial ID
        id: i32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
