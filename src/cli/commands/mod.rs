//! CLI command implementations.

pub mod ask;
pub mod chunks;
pub mod config;
pub mod search;

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::output::create_spinner;
use crate::domain::models::{Config, LoadSummary};
use crate::infrastructure::document::TextFileSource;
use crate::infrastructure::setup::build_adapters;
use crate::services::QaService;

/// Build the service from configuration and index `document`.
pub(crate) async fn load_service(
    config: &Config,
    document: &Path,
    json_mode: bool,
) -> Result<(QaService, LoadSummary)> {
    let (embedder, generator) = build_adapters(config)?;
    let service = QaService::new(config.clone(), embedder, generator)
        .context("Invalid context configuration")?;

    let spinner = create_spinner(format!("Indexing {}", document.display()), json_mode);
    let loaded = service
        .load_document(&TextFileSource::new(document))
        .await
        .with_context(|| format!("Failed to index {}", document.display()));
    spinner.finish_and_clear();

    Ok((service, loaded?))
}
