//! OpenAI-compatible embeddings adapter
//!
//! `POST {base_url}/embeddings` with `{ "model", "input" }`, reading
//! `data[0].embedding` from the response. Works with hosted APIs and with
//! local servers such as text-embeddings-inference.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::EmbeddingConfig;
use crate::domain::ports::EmbeddingProvider;
use crate::infrastructure::http::{self, HttpApiError, RetryPolicy};

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// HTTP embedding provider
pub struct HttpEmbeddingProvider {
    client: Client,
    endpoint: String,
    model: String,
    dimension: usize,
    api_key: Option<String>,
    retry_policy: RetryPolicy,
}

impl HttpEmbeddingProvider {
    /// Create a provider from configuration and an already-resolved API key
    pub fn new(config: &EmbeddingConfig, api_key: Option<String>) -> anyhow::Result<Self> {
        anyhow::ensure!(config.dimension > 0, "embedding dimension must be greater than 0");

        Ok(Self {
            client: http::build_client(config.timeout_secs)?,
            endpoint: format!("{}/embeddings", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            dimension: config.dimension,
            api_key,
            retry_policy: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    async fn request(&self, text: &str) -> Result<Vec<f32>, HttpApiError> {
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response: EmbeddingResponse = http::post_json(
            &self.client,
            &self.endpoint,
            self.api_key.as_deref(),
            &body,
        )
        .await?;

        response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| HttpApiError::InvalidResponse("empty embedding list".to_string()))
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    fn name(&self) -> &'static str {
        "http"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    async fn embed(&self, text: &str) -> DomainResult<Vec<f32>> {
        let embedding = self
            .retry_policy
            .execute(|| self.request(text))
            .await
            .map_err(|e| DomainError::Embedding(e.to_string()))?;

        if embedding.len() != self.dimension {
            return Err(DomainError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }

        Ok(embedding)
    }
}
