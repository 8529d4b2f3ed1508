//! Flat vector index
//!
//! Exact nearest-neighbor search by squared Euclidean distance. Every
//! query scans every stored embedding; there is no approximation or
//! pruning, so rankings are exact and reproducible.

use std::cmp::Ordering;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Fragment, RetrievalResult, ScoredFragment, Segment};

/// Squared Euclidean distance between two vectors of equal length.
#[inline]
pub fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Immutable in-memory index over one document's fragments.
///
/// Row `i` holds fragment `i`; all embeddings share one dimension. There
/// are no insert, update or delete operations. Rebuilding means building
/// a new index.
#[derive(Debug, Clone)]
pub struct VectorIndex {
    dimension: usize,
    fragments: Vec<Fragment>,
}

impl VectorIndex {
    /// Build an index from segments and their embeddings (same order).
    pub fn build(segments: Vec<Segment>, embeddings: Vec<Vec<f32>>) -> DomainResult<Self> {
        if segments.is_empty() {
            return Err(DomainError::EmptyCorpus);
        }

        if segments.len() != embeddings.len() {
            return Err(DomainError::EmbeddingCountMismatch {
                fragments: segments.len(),
                embeddings: embeddings.len(),
            });
        }

        let dimension = embeddings[0].len();
        if let Some(bad) = embeddings.iter().find(|e| e.len() != dimension) {
            return Err(DomainError::DimensionMismatch {
                expected: dimension,
                actual: bad.len(),
            });
        }

        let fragments: Vec<Fragment> = segments
            .into_iter()
            .zip(embeddings)
            .enumerate()
            .map(|(id, (segment, embedding))| {
                Fragment::new(id, segment.text, segment.page, embedding)
            })
            .collect();

        tracing::info!(fragments = fragments.len(), dimension, "built vector index");

        Ok(Self {
            dimension,
            fragments,
        })
    }

    /// Return the `top_k` fragments nearest to `query`, closest first.
    ///
    /// `top_k` is clamped to the corpus size and `0` yields an empty
    /// result. Equal distances are ordered by ascending fragment id.
    pub fn search(&self, query: &[f32], top_k: usize) -> DomainResult<RetrievalResult<'_>> {
        if query.len() != self.dimension {
            return Err(DomainError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let k = top_k.min(self.fragments.len());
        if k == 0 {
            return Ok(RetrievalResult::empty());
        }

        let mut scored: Vec<(f32, usize)> = self
            .fragments
            .iter()
            .map(|fragment| {
                let distance = squared_euclidean(query, &fragment.embedding);
                // NaN ranks after every real distance
                let distance = if distance.is_nan() {
                    f32::INFINITY
                } else {
                    distance
                };
                (distance, fragment.id)
            })
            .collect();

        if k < scored.len() {
            scored.select_nth_unstable_by(k - 1, rank);
            scored.truncate(k);
        }
        scored.sort_unstable_by(rank);

        let hits = scored
            .into_iter()
            .map(|(distance, id)| ScoredFragment::new(&self.fragments[id], distance))
            .collect();

        Ok(RetrievalResult::new(hits))
    }

    /// Embedding dimension D
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of fragments in the index
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always false for a successfully built index
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// All fragments in extraction order
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Fragment by id
    pub fn get(&self, id: usize) -> Option<&Fragment> {
        self.fragments.get(id)
    }
}

fn rank(a: &(f32, usize), b: &(f32, usize)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1))
}
