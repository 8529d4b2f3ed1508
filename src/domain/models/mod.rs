//! Domain models

pub mod answer;
pub mod chunking;
pub mod config;
pub mod fragment;
pub mod prompt;
pub mod retrieval;

pub use answer::{Answer, LoadSummary, PreparedPrompt, Source};
pub use chunking::{BlankFragmentPolicy, ChunkingConfig, Segment, PAGE_BREAK};
pub use config::{
    Config, ContextConfig, EmbeddingConfig, EmbeddingProviderKind, GenerationConfig,
    LoggingConfig, RetrievalConfig, DEFAULT_PROMPT_TEMPLATE,
};
pub use fragment::{Fragment, Query};
pub use prompt::PromptTemplate;
pub use retrieval::{RetrievalResult, ScoredFragment};
