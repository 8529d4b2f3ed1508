//! Retriever service
//!
//! Owns the index built from one document together with the embedder
//! that produced it, so query vectors always come from the same model as
//! the fragment vectors.

use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ChunkingConfig, Config, Query, RetrievalResult};
use crate::domain::ports::EmbeddingProvider;
use crate::infrastructure::vector::{ParagraphChunker, VectorIndex};

/// Query-to-fragment retrieval over a single document
///
/// A `Retriever` only exists once its index has been built, so there is
/// no "query before initialize" state to guard against. It is immutable
/// and can be shared across tasks behind an `Arc`.
pub struct Retriever {
    index: VectorIndex,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl Retriever {
    /// Chunk `raw_text`, embed every fragment and build the index.
    ///
    /// Embedding calls run concurrently, at most
    /// `config.retrieval.embed_concurrency` at a time; results keep
    /// fragment order. The first embedding failure aborts the build.
    ///
    /// # Errors
    /// * `EmptyCorpus` when the document yields no fragments
    /// * `Embedding` when the embedder fails
    /// * `DimensionMismatch` when the embedder returns inconsistent widths
    pub async fn initialize(
        config: &Config,
        embedder: Arc<dyn EmbeddingProvider>,
        raw_text: &str,
    ) -> DomainResult<Self> {
        Self::initialize_with(
            &config.chunking,
            config.retrieval.embed_concurrency,
            embedder,
            raw_text,
        )
        .await
    }

    /// Same as [`Retriever::initialize`] with explicit settings
    pub async fn initialize_with(
        chunking: &ChunkingConfig,
        embed_concurrency: usize,
        embedder: Arc<dyn EmbeddingProvider>,
        raw_text: &str,
    ) -> DomainResult<Self> {
        let chunker = ParagraphChunker::with_config(chunking.clone())?;
        let segments = chunker.chunk(raw_text);

        if segments.is_empty() {
            return Err(DomainError::EmptyCorpus);
        }

        tracing::info!(
            fragments = segments.len(),
            embedder = embedder.name(),
            concurrency = embed_concurrency,
            "embedding document fragments"
        );

        let embeddings: Vec<Vec<f32>> = stream::iter(segments.iter())
            .map(|segment| embedder.embed(&segment.text))
            .buffered(embed_concurrency.max(1))
            .try_collect()
            .await?;

        let index = VectorIndex::build(segments, embeddings)?;

        Ok(Self { index, embedder })
    }

    /// Embed a question with the index's embedder
    pub async fn embed_query(&self, text: &str) -> DomainResult<Query> {
        let embedding = self.embedder.embed(text).await?;
        Ok(Query::new(text, embedding))
    }

    /// Embed `text` and return the `top_k` nearest fragments.
    ///
    /// `top_k` larger than the corpus returns every fragment; `0` returns
    /// an empty result.
    pub async fn query(&self, text: &str, top_k: usize) -> DomainResult<RetrievalResult<'_>> {
        let query = self.embed_query(text).await?;
        self.search_embedding(&query, top_k)
    }

    /// Search with an already embedded query
    pub fn search_embedding(
        &self,
        query: &Query,
        top_k: usize,
    ) -> DomainResult<RetrievalResult<'_>> {
        let result = self.index.search(&query.embedding, top_k)?;

        tracing::debug!(
            top_k,
            returned = result.len(),
            best_distance = result.top().map(|hit| hit.distance),
            "retrieval complete"
        );

        Ok(result)
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }

    pub fn embedder(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedder
    }
}

impl std::fmt::Debug for Retriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Retriever")
            .field("fragments", &self.index.len())
            .field("dimension", &self.index.dimension())
            .field("embedder", &self.embedder.name())
            .finish()
    }
}
