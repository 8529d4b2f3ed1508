//! Implementation of the `docqa search` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use super::load_service;
use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, Source};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text document to search
    pub document: PathBuf,

    /// Search query
    pub query: String,

    /// Number of fragments to return (defaults to retrieval.top_k)
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub results: Vec<Source>,
}

impl CommandOutput for SearchOutput {
    fn to_human(&self) -> String {
        if self.results.is_empty() {
            return "No matching fragments.".to_string();
        }
        TableFormatter::new().format_sources(&self.results)
    }
}

pub async fn execute(args: SearchArgs, config: &Config, json_mode: bool) -> Result<()> {
    let (service, _) = load_service(config, &args.document, json_mode).await?;

    let results = service
        .retrieve(&args.query, args.top_k)
        .await
        .context("Search failed")?;

    output(
        &SearchOutput {
            query: args.query,
            results,
        },
        json_mode,
    );
    Ok(())
}
