//! Embedding provider port for semantic vector generation.
//!
//! Defines the trait for embedding providers that convert text into
//! dense vector representations for similarity search.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Trait for embedding providers.
///
/// The dimension is fixed for the lifetime of a provider and every call
/// must return vectors of exactly that length.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Provider name (e.g., "hashing", "http").
    fn name(&self) -> &'static str;

    /// Embedding dimension for this provider/model.
    fn dimension(&self) -> usize;

    /// Generate an embedding for a single text.
    async fn embed(&self, text: &str) -> DomainResult<Vec<f32>>;
}
