//! Question-answering service
//!
//! Orchestrates the full pipeline for one document at a time:
//! document text → retriever → context assembly → generation.
//! Loading a new document replaces the previous index.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Answer, Config, LoadSummary, PreparedPrompt, Source};
use crate::domain::ports::{DocumentSource, EmbeddingProvider, GenerationClient};
use crate::services::context_assembler::ContextAssembler;
use crate::services::retriever::Retriever;

/// Document question answering over a single loaded document
pub struct QaService {
    config: Config,
    embedder: Arc<dyn EmbeddingProvider>,
    generator: Arc<dyn GenerationClient>,
    assembler: ContextAssembler,
    retriever: RwLock<Option<Arc<Retriever>>>,
}

impl QaService {
    /// Create a service with no document loaded
    ///
    /// # Errors
    /// `InvalidConfig` when the context settings are invalid.
    pub fn new(
        config: Config,
        embedder: Arc<dyn EmbeddingProvider>,
        generator: Arc<dyn GenerationClient>,
    ) -> DomainResult<Self> {
        let assembler = ContextAssembler::new(&config.context)?;

        Ok(Self {
            config,
            embedder,
            generator,
            assembler,
            retriever: RwLock::new(None),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read a document and index it.
    ///
    /// On failure the previously loaded document, if any, stays active.
    pub async fn load_document(&self, source: &dyn DocumentSource) -> DomainResult<LoadSummary> {
        let name = source.describe();
        let text = source.read_text().await?;
        self.load_named(name, &text).await
    }

    /// Index text already in memory
    pub async fn load_text(&self, text: &str) -> DomainResult<LoadSummary> {
        self.load_named("<inline>".to_string(), text).await
    }

    async fn load_named(&self, name: String, text: &str) -> DomainResult<LoadSummary> {
        let retriever =
            Retriever::initialize(&self.config, Arc::clone(&self.embedder), text).await?;

        let summary = LoadSummary {
            source: name,
            fragments: retriever.index().len(),
            dimension: retriever.index().dimension(),
        };

        *self.retriever.write().await = Some(Arc::new(retriever));

        tracing::info!(
            source = %summary.source,
            fragments = summary.fragments,
            dimension = summary.dimension,
            "document loaded"
        );

        Ok(summary)
    }

    /// The active retriever
    ///
    /// # Errors
    /// `NotInitialized` before a document was loaded.
    pub async fn retriever(&self) -> DomainResult<Arc<Retriever>> {
        self.retriever
            .read()
            .await
            .as_ref()
            .map(Arc::clone)
            .ok_or(DomainError::NotInitialized)
    }

    pub async fn is_loaded(&self) -> bool {
        self.retriever.read().await.is_some()
    }

    fn resolve_top_k(&self, top_k: Option<usize>) -> usize {
        top_k.unwrap_or(self.config.retrieval.top_k)
    }

    /// Fragments nearest to `question`; `top_k` defaults to the configured value
    pub async fn retrieve(&self, question: &str, top_k: Option<usize>) -> DomainResult<Vec<Source>> {
        let retriever = self.retriever().await?;
        let result = retriever.query(question, self.resolve_top_k(top_k)).await?;
        Ok(Source::from_result(&result))
    }

    /// Retrieve, assemble context and build the prompt without generating
    pub async fn prepare(
        &self,
        question: &str,
        top_k: Option<usize>,
    ) -> DomainResult<PreparedPrompt> {
        let retriever = self.retriever().await?;
        let result = retriever.query(question, self.resolve_top_k(top_k)).await?;

        let context = self.assembler.assemble(&result);
        let prompt = self.assembler.build_prompt(&context, question);

        Ok(PreparedPrompt {
            question: question.to_string(),
            context,
            prompt,
            sources: Source::from_result(&result),
        })
    }

    /// Answer `question` from the loaded document
    pub async fn answer(&self, question: &str, top_k: Option<usize>) -> DomainResult<Answer> {
        let prepared = self.prepare(question, top_k).await?;

        tracing::debug!(
            generator = self.generator.name(),
            prompt_chars = prepared.prompt.chars().count(),
            sources = prepared.sources.len(),
            "requesting generation"
        );

        let text = self.generator.generate(&prepared.prompt).await?;
        Ok(Answer::from_prepared(prepared, text))
    }
}
