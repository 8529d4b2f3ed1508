//! Prompt template model

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_PROMPT_TEMPLATE;

const CONTEXT_PLACEHOLDER: &str = "{context}";
const QUESTION_PLACEHOLDER: &str = "{question}";

/// Template combining grounding context and a question into one prompt.
///
/// Must contain `{context}` followed (later in the text) by `{question}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Parse and validate a template string
    pub fn parse(template: impl Into<String>) -> Result<Self, String> {
        let template = template.into();

        let context_at = template
            .find(CONTEXT_PLACEHOLDER)
            .ok_or_else(|| format!("template is missing {CONTEXT_PLACEHOLDER}"))?;
        let question_at = template
            .find(QUESTION_PLACEHOLDER)
            .ok_or_else(|| format!("template is missing {QUESTION_PLACEHOLDER}"))?;

        if question_at < context_at {
            return Err(format!(
                "{CONTEXT_PLACEHOLDER} must appear before {QUESTION_PLACEHOLDER}"
            ));
        }

        Ok(Self { template })
    }

    /// Substitute context and question.
    ///
    /// Substitution is single-pass: placeholder-like text inside the context
    /// is never expanded.
    pub fn render(&self, context: &str, question: &str) -> String {
        let mut out = String::with_capacity(self.template.len() + context.len() + question.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            if let Some(after) = tail.strip_prefix(CONTEXT_PLACEHOLDER) {
                out.push_str(context);
                rest = after;
            } else if let Some(after) = tail.strip_prefix(QUESTION_PLACEHOLDER) {
                out.push_str(question);
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }
        out.push_str(rest);

        out
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl TryFrom<String> for PromptTemplate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PromptTemplate> for String {
    fn from(value: PromptTemplate) -> Self {
        value.template
    }
}
