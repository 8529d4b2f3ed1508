//! Document acquisition port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Supplies the raw extracted text of the reference document.
///
/// Implementations deal with storage and byte formats; callers only ever
/// see plain text. Page breaks, when known, are encoded as form feeds.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable description of where the text comes from.
    fn describe(&self) -> String;

    /// Read the whole document as text.
    async fn read_text(&self) -> DomainResult<String>;
}
