//! Owned results handed back to callers of the question-answering service

use serde::{Deserialize, Serialize};

use super::retrieval::{RetrievalResult, ScoredFragment};

/// Outcome of loading a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Human-readable document name
    pub source: String,
    /// Number of indexed fragments
    pub fragments: usize,
    /// Embedding dimension of the index
    pub dimension: usize,
}

/// A retrieved fragment, detached from the index that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: usize,
    pub page: u32,
    pub distance: f32,
    pub score: f32,
    pub text: String,
}

impl From<&ScoredFragment<'_>> for Source {
    fn from(hit: &ScoredFragment<'_>) -> Self {
        Self {
            id: hit.fragment.id,
            page: hit.fragment.page,
            distance: hit.distance,
            score: hit.score(),
            text: hit.fragment.text.clone(),
        }
    }
}

impl Source {
    pub fn from_result(result: &RetrievalResult<'_>) -> Vec<Self> {
        result.iter().map(Self::from).collect()
    }
}

/// Context and prompt prepared for a question, before generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedPrompt {
    pub question: String,
    pub context: String,
    pub prompt: String,
    pub sources: Vec<Source>,
}

/// Generated answer with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub text: String,
    pub prompt: String,
    pub sources: Vec<Source>,
}

impl Answer {
    pub fn from_prepared(prepared: PreparedPrompt, text: String) -> Self {
        Self {
            question: prepared.question,
            text,
            prompt: prepared.prompt,
            sources: prepared.sources,
        }
    }
}
