//! End-to-end tests for document question answering
//!
//! Covers document file → chunker → hashing embedder → flat index →
//! context assembly → generation, with both a stub generator and the
//! HTTP completion client against a mock server.

use mockito::{Matcher, Server};
use std::sync::Arc;

use docqa::domain::models::{Config, GenerationConfig};
use docqa::infrastructure::document::TextFileSource;
use docqa::infrastructure::generation::HttpGenerationClient;
use docqa::{DomainError, QaService};

mod common;

use common::{hashing_embedder, write_document, StubGenerator, POLICY_DOCUMENT};

fn service_with(generator: Arc<StubGenerator>) -> QaService {
    QaService::new(Config::default(), hashing_embedder(384), generator)
        .expect("default config is valid")
}

#[tokio::test]
async fn test_load_policy_document_from_file() {
    common::setup_test_logging();
    let (_dir, path) = write_document("policy.txt", POLICY_DOCUMENT);
    let qa = service_with(StubGenerator::replying("ok"));

    let summary = qa
        .load_document(&TextFileSource::new(&path))
        .await
        .unwrap();

    assert_eq!(summary.fragments, 6);
    assert_eq!(summary.dimension, 384);
    assert_eq!(summary.source, path.display().to_string());

    let retriever = qa.retriever().await.unwrap();
    let pages: Vec<u32> = retriever
        .index()
        .fragments()
        .iter()
        .map(|f| f.page)
        .collect();
    assert_eq!(pages, vec![1, 1, 1, 2, 2, 3]);
}

#[tokio::test]
async fn test_questions_retrieve_their_paragraph() {
    let (_dir, path) = write_document("policy.txt", POLICY_DOCUMENT);
    let qa = service_with(StubGenerator::replying("ok"));
    qa.load_document(&TextFileSource::new(&path)).await.unwrap();

    let cases = [
        ("When are refunds processed?", 1, 1),
        ("Is shipping free?", 3, 2),
        ("email support", 5, 3),
        ("next day express delivery", 4, 2),
    ];

    for (question, id, page) in cases {
        let sources = qa.retrieve(question, Some(1)).await.unwrap();
        assert_eq!(sources[0].id, id, "question: {question}");
        assert_eq!(sources[0].page, page, "question: {question}");
    }
}

#[tokio::test]
async fn test_answer_grounds_prompt_in_retrieved_text() {
    let generator = StubGenerator::replying("Within five business days.");
    let qa = service_with(Arc::clone(&generator));
    qa.load_text(POLICY_DOCUMENT).await.unwrap();

    let answer = qa
        .answer("When are refunds processed?", Some(2))
        .await
        .unwrap();

    assert_eq!(answer.text, "Within five business days.");
    assert_eq!(answer.sources.len(), 2);
    assert!(answer.prompt.starts_with(
        "Based on this document: Refunds are processed within five business days of receiving the item. "
    ));
    assert!(answer
        .prompt
        .ends_with("\nAnswer the question: When are refunds processed?"));
    assert_eq!(generator.prompts(), vec![answer.prompt.clone()]);
}

#[tokio::test]
async fn test_missing_document_is_reported() {
    let dir = common::temp_dir();
    let qa = service_with(StubGenerator::replying("ok"));

    let err = qa
        .load_document(&TextFileSource::new(dir.path().join("absent.txt")))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Document(_)));
    assert_eq!(
        qa.retrieve("anything", None).await.unwrap_err(),
        DomainError::NotInitialized
    );
}

#[tokio::test]
async fn test_blank_document_is_empty_corpus() {
    let (_dir, path) = write_document("blank.txt", "\n\n   \n\n\x0c\n\n");
    let qa = service_with(StubGenerator::replying("ok"));

    assert_eq!(
        qa.load_document(&TextFileSource::new(&path))
            .await
            .unwrap_err(),
        DomainError::EmptyCorpus
    );
}

#[tokio::test]
async fn test_concurrent_questions_share_one_index() {
    let qa = Arc::new(service_with(StubGenerator::replying("ok")));
    qa.load_text(POLICY_DOCUMENT).await.unwrap();

    let questions = ["refunds processed", "shipping free", "email support"];
    let handles: Vec<_> = questions
        .into_iter()
        .map(|question| {
            let qa = Arc::clone(&qa);
            tokio::spawn(async move { qa.retrieve(question, Some(1)).await.unwrap()[0].id })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    assert_eq!(ids, vec![1, 3, 5]);
}

#[tokio::test]
async fn test_answer_through_http_completion_endpoint() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/completions")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({ "model": "local-gptj", "max_tokens": 200 })),
            Matcher::Regex("Answer the question: Is shipping free\\?".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"text":" Yes, over fifty dollars."}]}"#)
        .expect(1)
        .create_async()
        .await;

    let generation = GenerationConfig {
        base_url: format!("{}/v1", server.url()),
        model: "local-gptj".to_string(),
        ..GenerationConfig::default()
    };
    let generator = Arc::new(HttpGenerationClient::new(&generation, None).unwrap());
    let qa = QaService::new(Config::default(), hashing_embedder(384), generator).unwrap();
    qa.load_text(POLICY_DOCUMENT).await.unwrap();

    let answer = qa.answer("Is shipping free?", Some(1)).await.unwrap();

    assert_eq!(answer.text, " Yes, over fifty dollars.");
    assert_eq!(answer.sources[0].id, 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generation_client_errors_surface_as_generation_failures() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/completions")
        .with_status(401)
        .with_body("bad key")
        .create_async()
        .await;

    let generation = GenerationConfig {
        base_url: server.url(),
        max_retries: 0,
        ..GenerationConfig::default()
    };
    let generator = Arc::new(HttpGenerationClient::new(&generation, Some("wrong".into())).unwrap());
    let qa = QaService::new(Config::default(), hashing_embedder(64), generator).unwrap();
    qa.load_text(POLICY_DOCUMENT).await.unwrap();

    assert!(matches!(
        qa.answer("refunds", None).await,
        Err(DomainError::Generation(_))
    ));
}
