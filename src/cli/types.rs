//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::ask::AskArgs;
use super::commands::chunks::ChunksArgs;
use super::commands::config::ConfigArgs;
use super::commands::search::SearchArgs;

#[derive(Parser, Debug)]
#[command(name = "docqa")]
#[command(about = "docqa - answer questions from a single document", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (replaces .docqa/config.yaml and .docqa/local.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a question using passages retrieved from a document
    Ask(AskArgs),

    /// Show the fragments nearest to a query
    Search(SearchArgs),

    /// List the fragments a document is split into
    Chunks(ChunksArgs),

    /// Show the effective configuration or write a default one
    Config(ConfigArgs),
}
