//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - EmbeddingProvider: text to vector
//! - GenerationClient: prompt to completion
//! - DocumentSource: raw document text
//!
//! These traits keep the retrieval core independent of any model runtime,
//! HTTP API or storage backend.

pub mod document;
pub mod embedding;
pub mod generation;

pub use document::DocumentSource;
pub use embedding::EmbeddingProvider;
pub use generation::GenerationClient;
