//! docqa CLI entry point.

use anyhow::Result;
use clap::Parser;

use docqa::cli::{Cli, Commands};
use docqa::infrastructure::config::ConfigLoader;
use docqa::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        docqa::cli::handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config.as_deref() {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let mut log_config = LogConfig::from(&config.logging);
    if cli.verbose {
        log_config = log_config.with_level("debug");
    }
    let _logger = LoggerImpl::init(&log_config)?;

    match cli.command {
        Commands::Ask(args) => docqa::cli::commands::ask::execute(args, &config, cli.json).await,
        Commands::Search(args) => {
            docqa::cli::commands::search::execute(args, &config, cli.json).await
        }
        Commands::Chunks(args) => {
            docqa::cli::commands::chunks::execute(args, &config, cli.json).await
        }
        Commands::Config(args) => {
            docqa::cli::commands::config::execute(args, &config, cli.json).await
        }
    }
}
