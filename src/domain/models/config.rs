use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::chunking::ChunkingConfig;

/// Main configuration structure for docqa
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Document chunking configuration
    #[serde(default)]
    pub chunking: ChunkingConfig,

    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Embedding provider configuration
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Text generation configuration
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Context assembly and prompt configuration
    #[serde(default)]
    pub context: ContextConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Retrieval configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetrievalConfig {
    /// Number of fragments returned per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Maximum number of in-flight embedding calls while building the index
    #[serde(default = "default_embed_concurrency")]
    pub embed_concurrency: usize,
}

const fn default_top_k() -> usize {
    3
}

const fn default_embed_concurrency() -> usize {
    8
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            embed_concurrency: default_embed_concurrency(),
        }
    }
}

/// Which embedding adapter to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbeddingProviderKind {
    /// Local deterministic feature-hashing embedder
    #[default]
    Hashing,
    /// OpenAI-compatible embeddings endpoint
    Http,
}

impl std::fmt::Display for EmbeddingProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hashing => write!(f, "hashing"),
            Self::Http => write!(f, "http"),
        }
    }
}

/// Embedding provider configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EmbeddingConfig {
    /// Adapter to use
    #[serde(default)]
    pub provider: EmbeddingProviderKind,

    /// Model identifier sent to the embedding endpoint
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Embedding dimension D
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Base URL of the embedding API (http provider only)
    #[serde(default = "default_embedding_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the API key, if any
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_embedding_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_embedding_model() -> String {
    "sentence-transformers/all-MiniLM-L6-v2".to_string()
}

const fn default_dimension() -> usize {
    384
}

fn default_embedding_base_url() -> String {
    "http://localhost:8080/v1".to_string()
}

const fn default_embedding_timeout_secs() -> u64 {
    30
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::default(),
            model: default_embedding_model(),
            dimension: default_dimension(),
            base_url: default_embedding_base_url(),
            api_key_env: None,
            timeout_secs: default_embedding_timeout_secs(),
        }
    }
}

/// Text generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GenerationConfig {
    /// Base URL of the completion API
    #[serde(default = "default_generation_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_generation_model")]
    pub model: String,

    /// Maximum number of tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Name of the environment variable holding the API key, if any
    #[serde(default)]
    pub api_key_env: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_generation_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum number of retry attempts for transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,
}

fn default_generation_base_url() -> String {
    "http://localhost:8000/v1".to_string()
}

fn default_generation_model() -> String {
    "EleutherAI/gpt-j-6B".to_string()
}

const fn default_max_tokens() -> u32 {
    200
}

const fn default_generation_timeout_secs() -> u64 {
    300
}

const fn default_max_retries() -> u32 {
    3
}

const fn default_initial_backoff_ms() -> u64 {
    1_000
}

const fn default_max_backoff_ms() -> u64 {
    30_000
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_generation_base_url(),
            model: default_generation_model(),
            max_tokens: default_max_tokens(),
            api_key_env: None,
            timeout_secs: default_generation_timeout_secs(),
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
        }
    }
}

/// Context assembly and prompt configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContextConfig {
    /// Separator placed between retrieved fragments
    #[serde(default = "default_context_separator")]
    pub separator: String,

    /// Prompt template with `{context}` and `{question}` placeholders
    #[serde(default = "default_template")]
    pub template: String,

    /// Optional cap on the assembled context length, in characters
    #[serde(default)]
    pub max_chars: Option<usize>,
}

fn default_context_separator() -> String {
    " ".to_string()
}

/// Default prompt template
pub const DEFAULT_PROMPT_TEMPLATE: &str =
    "Based on this document: {context}\nAnswer the question: {question}";

fn default_template() -> String {
    DEFAULT_PROMPT_TEMPLATE.to_string()
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            separator: default_context_separator(),
            template: default_template(),
            max_chars: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation for file output: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
