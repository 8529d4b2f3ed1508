//! docqa - single-document question answering
//!
//! Splits one document into paragraph fragments, embeds them, and answers
//! questions by retrieving the nearest fragments with an exact flat
//! Euclidean search and handing them to a text generation model.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): models, errors, and the ports for
//!   embedding, generation and document sources
//! - **Service Layer** (`services`): retriever, context assembly and the
//!   question-answering orchestration
//! - **Infrastructure Layer** (`infrastructure`): chunker, vector index,
//!   HTTP adapters, configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use docqa::infrastructure::setup::build_adapters;
//! use docqa::{Config, QaService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let (embedder, generator) = build_adapters(&config)?;
//!     let qa = QaService::new(config, embedder, generator)?;
//!
//!     qa.load_text("Refunds take five days.\n\nShipping is free.").await?;
//!     let answer = qa.answer("How long do refunds take?", None).await?;
//!     println!("{}", answer.text);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Answer, ChunkingConfig, Config, Fragment, LoadSummary, PreparedPrompt, PromptTemplate, Query,
    RetrievalResult, ScoredFragment, Segment, Source,
};
pub use domain::ports::{DocumentSource, EmbeddingProvider, GenerationClient};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::vector::{ParagraphChunker, VectorIndex};
pub use services::{ContextAssembler, QaService, Retriever};
