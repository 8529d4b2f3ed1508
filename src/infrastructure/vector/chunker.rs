//! Paragraph chunker
//!
//! Splits extracted document text on a structural delimiter (a blank line
//! by default). Form feeds are treated as page breaks so every segment
//! knows which page it came from.

use std::borrow::Cow;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{BlankFragmentPolicy, ChunkingConfig, Segment, PAGE_BREAK};

/// Structural text chunker
///
/// No sentence or topic detection is attempted. An input with no
/// extractable text yields an empty corpus, which is not an error.
#[derive(Debug, Clone, Default)]
pub struct ParagraphChunker {
    config: ChunkingConfig,
}

impl ParagraphChunker {
    /// Create a new chunker with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new chunker with custom configuration
    pub fn with_config(config: ChunkingConfig) -> DomainResult<Self> {
        config
            .validate()
            .map_err(|e| DomainError::InvalidConfig(format!("chunking: {e}")))?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Split `text` into ordered segments
    pub fn chunk(&self, text: &str) -> Vec<Segment> {
        let text = normalize_newlines(text);
        let mut segments = Vec::new();

        for (page_index, page) in text.split(PAGE_BREAK).enumerate() {
            let page_number = u32::try_from(page_index + 1).unwrap_or(u32::MAX);

            for raw in page.split(self.config.separator.as_str()) {
                if raw.is_empty() {
                    continue;
                }

                if raw.trim().is_empty() {
                    // Kept blank segments are stored verbatim; trimming would erase them
                    if self.config.blank_policy == BlankFragmentPolicy::Keep {
                        segments.push(Segment::new(raw, page_number));
                    }
                    continue;
                }

                let piece = if self.config.trim { raw.trim() } else { raw };
                if piece.is_empty() {
                    continue;
                }

                match self.config.max_chars {
                    Some(max_chars) => segments.extend(
                        split_long(piece, max_chars)
                            .into_iter()
                            .map(|part| Segment::new(part, page_number)),
                    ),
                    None => segments.push(Segment::new(piece, page_number)),
                }
            }
        }

        tracing::debug!(
            segments = segments.len(),
            separator = ?self.config.separator,
            "chunked document"
        );

        segments
    }
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split `text` into pieces of at most `max_chars` characters, preferring
/// to break on the last whitespace inside each window.
fn split_long(text: &str, max_chars: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;

    while let Some((window_end, _)) = rest.char_indices().nth(max_chars) {
        let window = &rest[..window_end];
        let cut = if rest[window_end..].starts_with(char::is_whitespace) {
            window_end
        } else {
            match window.rfind(char::is_whitespace) {
                Some(pos) if pos > 0 => pos,
                _ => window_end,
            }
        };

        let piece = rest[..cut].trim_end();
        if !piece.is_empty() {
            pieces.push(piece);
        }
        rest = rest[cut..].trim_start();
    }

    if !rest.is_empty() {
        pieces.push(rest);
    }

    pieces
}
