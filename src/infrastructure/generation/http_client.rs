//! OpenAI-compatible completion client
//!
//! `POST {base_url}/completions` with `{ "model", "prompt", "max_tokens" }`
//! and reads `choices[0].text`. Transient failures are retried with
//! exponential backoff according to `GenerationConfig`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::GenerationConfig;
use crate::domain::ports::GenerationClient;
use crate::infrastructure::http::{self, HttpApiError, RetryPolicy};

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// HTTP text generation client
pub struct HttpGenerationClient {
    client: Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    api_key: Option<String>,
    retry_policy: RetryPolicy,
}

impl HttpGenerationClient {
    /// Create a client from configuration and an already-resolved API key
    pub fn new(config: &GenerationConfig, api_key: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: http::build_client(config.timeout_secs)?,
            endpoint: format!("{}/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            api_key,
            retry_policy: RetryPolicy::new(
                config.max_retries,
                config.initial_backoff_ms,
                config.max_backoff_ms,
            ),
        })
    }

    async fn request(&self, prompt: &str) -> Result<String, HttpApiError> {
        let body = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
        };

        let response: CompletionResponse = http::post_json(
            &self.client,
            &self.endpoint,
            self.api_key.as_deref(),
            &body,
        )
        .await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| HttpApiError::InvalidResponse("no completion choices".to_string()))
    }
}

#[async_trait]
impl GenerationClient for HttpGenerationClient {
    fn name(&self) -> &'static str {
        "http"
    }

    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.len()))]
    async fn generate(&self, prompt: &str) -> DomainResult<String> {
        let text = self
            .retry_policy
            .execute(|| self.request(prompt))
            .await
            .map_err(|e| DomainError::Generation(e.to_string()))?;

        debug!(completion_chars = text.len(), "generation complete");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn config(base_url: String) -> GenerationConfig {
        GenerationConfig {
            base_url,
            model: "gpt-j".to_string(),
            max_tokens: 64,
            timeout_secs: 5,
            max_retries: 2,
            initial_backoff_ms: 1,
            max_backoff_ms: 2,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_reads_first_choice() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/completions")
            .match_body(Matcher::Json(serde_json::json!({
                "model": "gpt-j",
                "prompt": "Based on this document: x\nAnswer the question: y",
                "max_tokens": 64
            })))
            .with_status(200)
            .with_body(r#"{"choices":[{"text":" 42"},{"text":"ignored"}]}"#)
            .create_async()
            .await;

        let client = HttpGenerationClient::new(&config(server.url()), None).unwrap();
        let text = client
            .generate("Based on this document: x\nAnswer the question: y")
            .await
            .unwrap();

        assert_eq!(text, " 42");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_errors_are_retried() {
        let mut server = Server::new_async().await;
        let failing = server
            .mock("POST", "/completions")
            .with_status(503)
            .expect(3)
            .create_async()
            .await;

        let client = HttpGenerationClient::new(&config(server.url()), None).unwrap();
        let err = client.generate("prompt").await.unwrap_err();

        assert!(matches!(err, DomainError::Generation(_)));
        failing.assert_async().await;
    }

    #[tokio::test]
    async fn test_bad_request_fails_immediately() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/completions")
            .with_status(400)
            .with_body("prompt too long")
            .expect(1)
            .create_async()
            .await;

        let client = HttpGenerationClient::new(&config(server.url()), None).unwrap();
        match client.generate("prompt").await {
            Err(DomainError::Generation(msg)) => assert!(msg.contains("prompt too long")),
            other => panic!("expected generation error, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_no_choices_is_an_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = HttpGenerationClient::new(&config(server.url()), None).unwrap();
        assert!(matches!(
            client.generate("prompt").await,
            Err(DomainError::Generation(_))
        ));
    }
}
