//! Context assembly and prompt construction
//!
//! Joins retrieved fragment texts, in rank order, into one grounding
//! context string and places it with the question into a prompt.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{ContextConfig, PromptTemplate, RetrievalResult};

/// Builds grounding context and prompts from retrieval results
#[derive(Debug, Clone)]
pub struct ContextAssembler {
    separator: String,
    template: PromptTemplate,
    max_chars: Option<usize>,
}

impl Default for ContextAssembler {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            template: PromptTemplate::default(),
            max_chars: None,
        }
    }
}

impl ContextAssembler {
    /// Create an assembler from configuration
    ///
    /// # Errors
    /// `InvalidConfig` when the template lacks a placeholder or
    /// `max_chars` is zero.
    pub fn new(config: &ContextConfig) -> DomainResult<Self> {
        let template = PromptTemplate::parse(config.template.as_str())
            .map_err(DomainError::InvalidConfig)?;

        if config.max_chars == Some(0) {
            return Err(DomainError::InvalidConfig(
                "context max_chars must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            separator: config.separator.clone(),
            template,
            max_chars: config.max_chars,
        })
    }

    /// Concatenate fragment texts in result order.
    ///
    /// An empty result yields an empty string. With `max_chars` set,
    /// whole fragments are appended while they fit; the top fragment is
    /// always present, cut at the limit if it is longer on its own.
    pub fn assemble(&self, result: &RetrievalResult<'_>) -> String {
        let Some(limit) = self.max_chars else {
            return result.texts().join(&self.separator);
        };

        let separator_len = self.separator.chars().count();
        let mut context = String::new();
        let mut used = 0;

        for (i, text) in result.texts().into_iter().enumerate() {
            let text_len = text.chars().count();

            if i == 0 {
                if text_len > limit {
                    context.extend(text.chars().take(limit));
                    break;
                }
                context.push_str(text);
                used = text_len;
                continue;
            }

            if used + separator_len + text_len > limit {
                break;
            }
            context.push_str(&self.separator);
            context.push_str(text);
            used += separator_len + text_len;
        }

        context
    }

    /// Place context and question into the prompt template
    pub fn build_prompt(&self, context: &str, question: &str) -> String {
        self.template.render(context, question)
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }
}
