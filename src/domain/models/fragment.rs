//! Fragment and query models
//!
//! A fragment is the atomic retrievable unit: one chunk of document text
//! together with its embedding.

use serde::Serialize;

/// One chunk of document text and its embedding.
///
/// Fragments are created while an index is built and never change
/// afterwards. The `id` is the fragment's position in extraction order
/// and doubles as the tie-break key when two distances are equal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    /// Ordinal position in the corpus
    pub id: usize,

    /// Fragment text
    pub text: String,

    /// 1-based source page
    pub page: u32,

    /// Embedding vector (dimension fixed by the embedding provider)
    #[serde(skip_serializing)]
    pub embedding: Vec<f32>,
}

impl Fragment {
    pub(crate) fn new(id: usize, text: String, page: u32, embedding: Vec<f32>) -> Self {
        Self {
            id,
            text,
            page,
            embedding,
        }
    }

    /// Embedding dimension of this fragment
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}

/// A question together with its embedding, derived once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub text: String,
    pub embedding: Vec<f32>,
}

impl Query {
    pub fn new(text: impl Into<String>, embedding: Vec<f32>) -> Self {
        Self {
            text: text.into(),
            embedding,
        }
    }
}
