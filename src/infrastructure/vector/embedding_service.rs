//! Local hashing embedder
//!
//! Deterministic, dependency-free embeddings for offline use and tests.
//! Each lowercase alphanumeric token is hashed (FNV-1a) into one of `D`
//! buckets with a sign taken from the hash, and the resulting vector is
//! L2-normalized. Texts that share words land close together, which is
//! enough for lexical retrieval over a single document.

use async_trait::async_trait;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::EmbeddingProvider;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Feature-hashing embedding provider
#[derive(Debug, Clone)]
pub struct HashingEmbeddingProvider {
    dimension: usize,
}

impl HashingEmbeddingProvider {
    pub fn new(dimension: usize) -> DomainResult<Self> {
        if dimension == 0 {
            return Err(DomainError::InvalidConfig(
                "embedding dimension must be greater than 0".to_string(),
            ));
        }

        Ok(Self { dimension })
    }

    /// Generate the embedding synchronously
    pub fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0_f32; self.dimension];

        for token in tokens(text) {
            let hash = fnv1a(token.as_bytes());
            let bucket = usize::try_from(hash % self.dimension as u64).unwrap_or(0);
            let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
            embedding[bucket] += sign;
        }

        // f64 accumulation avoids drift with wide vectors
        let magnitude = embedding
            .iter()
            .map(|x| f64::from(*x) * f64::from(*x))
            .sum::<f64>()
            .sqrt();

        if magnitude > 1e-10 {
            for val in &mut embedding {
                *val = (f64::from(*val) / magnitude) as f32;
            }
        } else {
            // No tokens (or all cancelled): uniform unit vector
            let uniform_val = 1.0 / (self.dimension as f32).sqrt();
            embedding.fill(uniform_val);
        }

        embedding
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(FNV_PRIME)
    })
}

#[async_trait]
impl EmbeddingProvider for HashingEmbeddingProvider {
    fn name(&self) -> &'static str {
        "hashing"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> DomainResult<Vec<f32>> {
        Ok(self.embed_sync(text))
    }
}
