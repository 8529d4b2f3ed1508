use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::{Config, EmbeddingProviderKind};
use crate::domain::models::PromptTemplate;

/// Project-local configuration file, created by hand or by `docqa config --init`
pub const PROJECT_CONFIG_PATH: &str = ".docqa/config.yaml";

/// Optional local overrides (not meant to be committed)
pub const LOCAL_CONFIG_PATH: &str = ".docqa/local.yaml";

/// Environment variable prefix; nested keys use `__`
pub const ENV_PREFIX: &str = "DOCQA_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid top_k: {0}. Must be at least 1")]
    InvalidTopK(usize),

    #[error("Invalid embed_concurrency: {0}. Must be at least 1")]
    InvalidConcurrency(usize),

    #[error("Invalid embedding dimension: {0}. Must be at least 1")]
    InvalidDimension(usize),

    #[error("{0} base_url cannot be empty")]
    EmptyBaseUrl(&'static str),

    #[error("Invalid max_tokens: {0}. Must be at least 1")]
    InvalidMaxTokens(u32),

    #[error(
        "Invalid backoff configuration: initial_backoff_ms ({0}) must not exceed max_backoff_ms ({1})"
    )]
    InvalidBackoff(u64, u64),

    #[error("Invalid chunking configuration: {0}")]
    InvalidChunking(String),

    #[error("Invalid prompt template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid context max_chars: must be greater than 0")]
    InvalidContextLimit,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .docqa/config.yaml (project config)
    /// 3. .docqa/local.yaml (project local overrides, optional)
    /// 4. Environment variables (DOCQA_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(PROJECT_CONFIG_PATH))
            .merge(Yaml::file(LOCAL_CONFIG_PATH))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        anyhow::ensure!(path.exists(), "Config file not found: {}", path.display());

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Retrieval
        if config.retrieval.top_k == 0 {
            return Err(ConfigError::InvalidTopK(config.retrieval.top_k));
        }
        if config.retrieval.embed_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency(
                config.retrieval.embed_concurrency,
            ));
        }

        // Chunking
        config
            .chunking
            .validate()
            .map_err(ConfigError::InvalidChunking)?;

        // Embedding
        if config.embedding.dimension == 0 {
            return Err(ConfigError::InvalidDimension(config.embedding.dimension));
        }
        if config.embedding.provider == EmbeddingProviderKind::Http
            && config.embedding.base_url.trim().is_empty()
        {
            return Err(ConfigError::EmptyBaseUrl("embedding"));
        }

        // Generation
        if config.generation.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl("generation"));
        }
        if config.generation.max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens(config.generation.max_tokens));
        }
        if config.generation.initial_backoff_ms > config.generation.max_backoff_ms {
            return Err(ConfigError::InvalidBackoff(
                config.generation.initial_backoff_ms,
                config.generation.max_backoff_ms,
            ));
        }

        // Context
        PromptTemplate::parse(config.context.template.as_str())
            .map_err(ConfigError::InvalidTemplate)?;
        if config.context.max_chars == Some(0) {
            return Err(ConfigError::InvalidContextLimit);
        }

        // Logging
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        Ok(())
    }
}
