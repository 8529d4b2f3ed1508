//! Text generation port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Trait for clients that turn a prompt into generated text.
///
/// Retry and timeout policy belong to the implementation.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Client name used in logs.
    fn name(&self) -> &'static str;

    /// Generate a completion for `prompt`.
    async fn generate(&self, prompt: &str) -> DomainResult<String>;
}
