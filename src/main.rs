use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tutgraph::cli::handlers::{
    CommandContext, handle_list, handle_query, handle_run, handle_schema, handle_show,
};
use tutgraph::cli::{Cli, Commands};
use tutgraph::config::TutgraphConfig;
use tutgraph::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging depends on config, so a config error is reported once logging is up.
    let (config, root, config_error) = match load_config(cli.config.as_deref()) {
        Ok((config, root)) => (config, root, None),
        Err(e) => (TutgraphConfig::default(), None, Some(e)),
    };

    let verbose = cli.verbose || config.logging.verbose;
    let log_file = cli
        .log_file
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.log_path(root.as_deref()));
    let logging_result =
        logging::init(verbose, log_file).context("Failed to initialize logging");

    let result = match (config_error, logging_result) {
        (Some(e), _) | (None, Err(e)) => Err(e),
        (None, Ok(())) => run(cli, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, mut config: TutgraphConfig) -> Result<()> {
    config.output.pretty |= cli.pretty;
    let ctx = CommandContext::new(config);

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => handle_run(&ctx),
        Commands::Query { query, variables } => handle_query(&ctx, query, variables),
        Commands::Schema => handle_schema(&ctx),
        Commands::List { json } => handle_list(&ctx, json),
        Commands::Show { id, json } => handle_show(&ctx, id, json),
    }
}

fn load_config(explicit: Option<&str>) -> Result<(TutgraphConfig, Option<PathBuf>)> {
    let cwd = std::env::current_dir()?;
    TutgraphConfig::load(&cwd, explicit.map(Path::new))
        .context("Failed to load tutgraph configuration")
}
