//! Implementation of the `docqa chunks` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{Config, Segment};
use crate::domain::ports::DocumentSource;
use crate::infrastructure::document::TextFileSource;
use crate::infrastructure::vector::ParagraphChunker;

#[derive(Args, Debug)]
pub struct ChunksArgs {
    /// Text document to split
    pub document: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ChunksOutput {
    pub source: String,
    pub count: usize,
    pub fragments: Vec<Segment>,
}

impl CommandOutput for ChunksOutput {
    fn to_human(&self) -> String {
        if self.fragments.is_empty() {
            return format!("No fragments found in {}.", self.source);
        }
        format!(
            "{} fragments in {}:\n{}",
            console::style(self.count).bold(),
            self.source,
            TableFormatter::new().format_segments(&self.fragments)
        )
    }
}

/// Show how a document is split, without embedding anything
pub async fn execute(args: ChunksArgs, config: &Config, json_mode: bool) -> Result<()> {
    let chunker = ParagraphChunker::with_config(config.chunking.clone())
        .context("Invalid chunking configuration")?;

    let source = TextFileSource::new(&args.document);
    let text = source
        .read_text()
        .await
        .with_context(|| format!("Failed to read {}", args.document.display()))?;

    let fragments = chunker.chunk(&text);
    output(
        &ChunksOutput {
            source: source.describe(),
            count: fragments.len(),
            fragments,
        },
        json_mode,
    );
    Ok(())
}
