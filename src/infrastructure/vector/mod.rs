//! Vector infrastructure components
//!
//! Provides text chunking, embedding adapters and the exact flat vector
//! index used for retrieval.

pub mod chunker;
pub mod embedding_service;
pub mod flat_index;
pub mod http_embedding;

pub use chunker::ParagraphChunker;
pub use embedding_service::HashingEmbeddingProvider;
pub use flat_index::{squared_euclidean, VectorIndex};
pub use http_embedding::HttpEmbeddingProvider;
