//! Wiring and project setup
//!
//! Builds the concrete adapters named by a [`Config`] and writes the
//! default project configuration file.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::models::{Config, EmbeddingConfig, EmbeddingProviderKind, GenerationConfig};
use crate::domain::ports::{EmbeddingProvider, GenerationClient};
use crate::infrastructure::config::loader::PROJECT_CONFIG_PATH;
use crate::infrastructure::generation::HttpGenerationClient;
use crate::infrastructure::http::api_key_from_env;
use crate::infrastructure::vector::{HashingEmbeddingProvider, HttpEmbeddingProvider};

/// Default configuration template content
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# docqa configuration
# Override settings by editing this file, adding .docqa/local.yaml, or
# setting environment variables with the DOCQA_ prefix.
#
# Example environment variables:
#   export DOCQA_RETRIEVAL__TOP_K=5
#   export DOCQA_EMBEDDING__PROVIDER=http
#   export DOCQA_LOGGING__LEVEL=debug

# Splitting the document into fragments
chunking:
  # Paragraph separator
  separator: "\n\n"
  # Whitespace-only fragments: drop or keep
  blank_policy: drop
  # Trim surrounding whitespace from each fragment
  trim: true
  # Optional upper bound on fragment length in characters
  # max_chars: 2000

retrieval:
  # Fragments returned per question
  top_k: 3
  # Concurrent embedding calls while indexing
  embed_concurrency: 8

embedding:
  # hashing (local, no network) or http (OpenAI-compatible /embeddings)
  provider: hashing
  model: "sentence-transformers/all-MiniLM-L6-v2"
  dimension: 384
  base_url: "http://localhost:8080/v1"
  # api_key_env: EMBEDDING_API_KEY
  timeout_secs: 30

generation:
  # OpenAI-compatible /completions endpoint
  base_url: "http://localhost:8000/v1"
  model: "EleutherAI/gpt-j-6B"
  max_tokens: 200
  # api_key_env: GENERATION_API_KEY
  timeout_secs: 300
  max_retries: 3
  initial_backoff_ms: 1000
  max_backoff_ms: 30000

context:
  # Placed between retrieved fragments
  separator: " "
  template: "Based on this document: {context}\nAnswer the question: {question}"
  # max_chars: 4000

logging:
  # trace, debug, info, warn, error
  level: "warn"
  # json, pretty
  format: "pretty"
  # log_dir: ".docqa/logs"
  # daily, hourly, never
  rotation: "daily"
"#;

/// Construct the embedding adapter selected by `config.provider`
pub fn build_embedding_provider(config: &EmbeddingConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    let provider: Arc<dyn EmbeddingProvider> = match config.provider {
        EmbeddingProviderKind::Hashing => Arc::new(
            HashingEmbeddingProvider::new(config.dimension)
                .context("Failed to create hashing embedding provider")?,
        ),
        EmbeddingProviderKind::Http => {
            let api_key = api_key_from_env(config.api_key_env.as_deref());
            Arc::new(
                HttpEmbeddingProvider::new(config, api_key)
                    .context("Failed to create HTTP embedding provider")?,
            )
        }
    };

    tracing::debug!(
        provider = provider.name(),
        dimension = provider.dimension(),
        "embedding provider ready"
    );
    Ok(provider)
}

/// Construct the completion client
pub fn build_generation_client(config: &GenerationConfig) -> Result<Arc<dyn GenerationClient>> {
    let api_key = api_key_from_env(config.api_key_env.as_deref());
    let client = HttpGenerationClient::new(config, api_key)
        .context("Failed to create generation client")?;
    Ok(Arc::new(client))
}

/// Both adapters for a full configuration
pub fn build_adapters(
    config: &Config,
) -> Result<(Arc<dyn EmbeddingProvider>, Arc<dyn GenerationClient>)> {
    Ok((
        build_embedding_provider(&config.embedding)?,
        build_generation_client(&config.generation)?,
    ))
}

/// Location of the project config file under `root`
pub fn project_config_path(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_PATH)
}

/// Write the default config file under `root`.
///
/// Returns `Ok(false)` when the file already exists and `force` is unset.
pub fn create_config_file(root: &Path, force: bool) -> Result<bool> {
    let path = project_config_path(root);
    if path.exists() && !force {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    fs::write(&path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;

    Ok(true)
}
