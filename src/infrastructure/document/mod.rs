//! Document sources
//!
//! The core only consumes plain text. `TextFileSource` reads extracted text
//! from disk (for example the output of `pdftotext`, which separates pages
//! with form feeds); `InlineSource` wraps text already in memory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::DocumentSource;

/// UTF-8 text file on the local filesystem
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentSource for TextFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_text(&self) -> DomainResult<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| DomainError::Document(format!("{}: {e}", self.path.display())))?;

        String::from_utf8(bytes).map_err(|e| {
            DomainError::Document(format!("{} is not valid UTF-8: {e}", self.path.display()))
        })
    }
}

/// Text supplied directly by the caller
#[derive(Debug, Clone)]
pub struct InlineSource {
    name: String,
    text: String,
}

impl InlineSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for InlineSource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    async fn read_text(&self) -> DomainResult<String> {
        Ok(self.text.clone())
    }
}
