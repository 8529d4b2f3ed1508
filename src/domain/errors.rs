//! Domain errors for the docqa retrieval pipeline.

use thiserror::Error;

/// Domain-level errors that can occur while building or querying an index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cannot build an index from an empty corpus")]
    EmptyCorpus,

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Got {embeddings} embeddings for {fragments} fragments")]
    EmbeddingCountMismatch { fragments: usize, embeddings: usize },

    #[error("Embedding failed: {0}")]
    Embedding(String),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("Document could not be read: {0}")]
    Document(String),

    #[error("No document has been loaded")]
    NotInitialized,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Returns true for failures reported by an external collaborator
    /// (embedding, generation or document acquisition).
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::Embedding(_) | Self::Generation(_) | Self::Document(_)
        )
    }
}
