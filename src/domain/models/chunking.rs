//! Text chunking domain models
//!
//! Models for splitting a document into paragraph fragments before
//! embedding.

use serde::{Deserialize, Serialize};

/// Page break marker emitted by common PDF text extractors.
pub const PAGE_BREAK: char = '\x0c';

/// What to do with segments that contain only whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankFragmentPolicy {
    /// Filter whitespace-only segments before they reach the embedder
    #[default]
    Drop,
    /// Keep whitespace-only segments as fragments
    Keep,
}

/// Configuration for document chunking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChunkingConfig {
    /// Structural delimiter between fragments (paragraph break by default)
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whitespace-only segment handling
    #[serde(default)]
    pub blank_policy: BlankFragmentPolicy,

    /// Trim surrounding whitespace from every kept segment
    #[serde(default = "default_trim")]
    pub trim: bool,

    /// Split segments longer than this many characters
    #[serde(default)]
    pub max_chars: Option<usize>,
}

fn default_separator() -> String {
    "\n\n".to_string()
}

const fn default_trim() -> bool {
    true
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            blank_policy: BlankFragmentPolicy::default(),
            trim: default_trim(),
            max_chars: None,
        }
    }
}

impl ChunkingConfig {
    /// Settings that reproduce plain blank-line splitting with no cleanup.
    pub fn raw() -> Self {
        Self {
            separator: default_separator(),
            blank_policy: BlankFragmentPolicy::Keep,
            trim: false,
            max_chars: None,
        }
    }

    /// Validate the chunking configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.separator.is_empty() {
            return Err("separator cannot be empty".to_string());
        }

        if self.max_chars == Some(0) {
            return Err("max_chars must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// A piece of document text produced by the chunker, before embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment text
    pub text: String,

    /// 1-based page the segment was extracted from
    pub page: u32,
}

impl Segment {
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self {
            text: text.into(),
            page,
        }
    }
}
