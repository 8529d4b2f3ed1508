//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and test utilities used across
//! multiple integration test files.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use docqa::domain::errors::DomainResult;
use docqa::domain::ports::{EmbeddingProvider, GenerationClient};
use docqa::infrastructure::vector::HashingEmbeddingProvider;

/// Three pages of a small returns policy; pages are separated by form feeds
#[allow(dead_code)]
pub const POLICY_DOCUMENT: &str = "Returns Policy\n\n\
Refunds are processed within five business days of receiving the item.\n\n\
Items must be returned in their original packaging.\x0c\
Shipping is free for orders over fifty dollars.\n\n\
Express delivery arrives the next business day.\x0c\
Support is available by email around the clock.\n\n";

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `text` to `name` inside a fresh temp directory
#[allow(dead_code)]
pub fn write_document(name: &str, text: &str) -> (TempDir, PathBuf) {
    let dir = temp_dir();
    let path = dir.path().join(name);
    std::fs::write(&path, text).expect("Failed to write test document");
    (dir, path)
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Deterministic local embedder
#[allow(dead_code)]
pub fn hashing_embedder(dimension: usize) -> Arc<dyn EmbeddingProvider> {
    Arc::new(HashingEmbeddingProvider::new(dimension).expect("valid dimension"))
}

/// Generation client that echoes a fixed reply and records every prompt
#[allow(dead_code)]
#[derive(Default)]
pub struct StubGenerator {
    pub reply: String,
    pub prompts: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl StubGenerator {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }
}

#[async_trait]
impl GenerationClient for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> DomainResult<String> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());
        Ok(self.reply.clone())
    }
}
