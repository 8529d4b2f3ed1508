//! Shared HTTP plumbing for the embedding and completion adapters
//!
//! - Status classification (`HttpApiError`)
//! - Exponential backoff (`RetryPolicy`)
//! - JSON POST helper with optional bearer authentication

pub mod errors;
pub mod retry;

pub use errors::HttpApiError;
pub use retry::RetryPolicy;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Build a pooled reqwest client with the given timeout
pub fn build_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .pool_max_idle_per_host(10)
        .tcp_nodelay(true)
        .build()
        .context("Failed to build HTTP client")
}

/// Read an API key from the environment variable named in configuration.
///
/// Returns `None` when no variable is configured or it is unset.
pub fn api_key_from_env(var_name: Option<&str>) -> Option<String> {
    var_name
        .and_then(|name| std::env::var(name).ok())
        .filter(|key| !key.is_empty())
}

/// POST `body` as JSON to `url` and decode a JSON response
pub(crate) async fn post_json<B, T>(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
    body: &B,
) -> Result<T, HttpApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let mut request = client.post(url).json(body);
    if let Some(key) = api_key {
        request = request.bearer_auth(key);
    }

    let response = request.send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        tracing::warn!("API error ({}) from {}: {}", status, url, body);
        return Err(HttpApiError::from_status(status, body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| HttpApiError::InvalidResponse(e.to_string()))
}
