//! Property-based tests for flat index retrieval invariants
//!
//! Tests the following properties:
//! 1. Self-retrieval: searching with a fragment's own vector returns it first
//! 2. Clamping: result length is min(top_k, corpus size)
//! 3. Ordering: distances are non-decreasing, ties by ascending id
//! 4. Determinism: identical inputs give identical results
//! 5. Dimension guard: wrong-width queries are rejected

use proptest::prelude::*;

use docqa::domain::models::{ChunkingConfig, Segment};
use docqa::infrastructure::vector::{squared_euclidean, HashingEmbeddingProvider, VectorIndex};
use docqa::{DomainError, ParagraphChunker};

mod common;

/// A corpus of `n` vectors of width `dim`
fn corpus_strategy() -> impl Strategy<Value = (usize, Vec<Vec<f32>>)> {
    (1usize..8, 1usize..40).prop_flat_map(|(dim, n)| {
        (
            Just(dim),
            prop::collection::vec(prop::collection::vec(-100.0f32..100.0, dim), n),
        )
    })
}

fn build(embeddings: Vec<Vec<f32>>) -> VectorIndex {
    let segments = (0..embeddings.len())
        .map(|i| Segment::new(format!("fragment {i}"), 1))
        .collect();
    VectorIndex::build(segments, embeddings).expect("valid corpus")
}

fn paragraph_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{2,9}( [a-z]{2,9}){0,12}").expect("Valid regex")
}

proptest! {
    /// Property 1: every fragment retrieves itself at distance zero
    #[test]
    fn proptest_self_retrieval((_dim, embeddings) in corpus_strategy()) {
        let index = build(embeddings.clone());

        for (i, embedding) in embeddings.iter().enumerate() {
            let result = index.search(embedding, 1).unwrap();
            let top = result.top().unwrap();
            prop_assert_eq!(top.distance, 0.0);
            // Vectors at distance zero from each other resolve to the lowest id
            let first_zero = embeddings
                .iter()
                .position(|e| squared_euclidean(e, embedding) == 0.0)
                .unwrap();
            prop_assert_eq!(top.fragment.id, first_zero);
            prop_assert!(first_zero <= i);
        }
    }

    /// Property 2: result length is clamped to the corpus size
    #[test]
    fn proptest_top_k_clamping(
        (dim, embeddings) in corpus_strategy(),
        top_k in 0usize..60,
    ) {
        let n = embeddings.len();
        let index = build(embeddings);
        let query = vec![0.5; dim];

        let result = index.search(&query, top_k).unwrap();
        prop_assert_eq!(result.len(), top_k.min(n));
        prop_assert_eq!(result.is_empty(), top_k == 0);
    }

    /// Property 3: results are ordered by distance, then id
    #[test]
    fn proptest_ordered_by_distance(
        (dim, embeddings) in corpus_strategy(),
        seed in -50.0f32..50.0,
    ) {
        let index = build(embeddings.clone());
        let query: Vec<f32> = (0..dim).map(|j| seed + j as f32).collect();
        let result = index.search(&query, embeddings.len()).unwrap();

        for pair in result.hits().windows(2) {
            prop_assert!(
                pair[0].distance < pair[1].distance
                    || (pair[0].distance == pair[1].distance
                        && pair[0].fragment.id < pair[1].fragment.id)
            );
        }

        for hit in result.iter() {
            let expected = squared_euclidean(&embeddings[hit.fragment.id], &query);
            prop_assert_eq!(hit.distance, expected);
        }
    }

    /// Property 4: search is a pure function of index and query
    #[test]
    fn proptest_deterministic(
        (dim, embeddings) in corpus_strategy(),
        top_k in 1usize..10,
    ) {
        let first = build(embeddings.clone());
        let second = build(embeddings);
        let query = vec![1.0; dim];

        prop_assert_eq!(
            first.search(&query, top_k).unwrap().ids(),
            second.search(&query, top_k).unwrap().ids()
        );
        prop_assert_eq!(
            first.search(&query, top_k).unwrap().ids(),
            first.search(&query, top_k).unwrap().ids()
        );
    }

    /// Property 5: queries of any other width are rejected
    #[test]
    fn proptest_dimension_guard(
        (dim, embeddings) in corpus_strategy(),
        width in 0usize..10,
    ) {
        prop_assume!(width != dim);
        let index = build(embeddings);

        prop_assert_eq!(
            index.search(&vec![0.0; width], 1).unwrap_err(),
            DomainError::DimensionMismatch { expected: dim, actual: width }
        );
    }

    /// Chunking then hashing: every paragraph is its own nearest neighbour
    #[test]
    fn proptest_paragraph_self_retrieval(
        paragraphs in prop::collection::hash_set(paragraph_strategy(), 1..12),
    ) {
        let paragraphs: Vec<String> = paragraphs.into_iter().collect();
        let document = paragraphs.join("\n\n");

        let chunker = ParagraphChunker::with_config(ChunkingConfig::default()).unwrap();
        let segments = chunker.chunk(&document);
        prop_assert_eq!(segments.len(), paragraphs.len());

        let embedder = HashingEmbeddingProvider::new(256).unwrap();
        let embeddings = segments.iter().map(|s| embedder.embed_sync(&s.text)).collect();
        let index = VectorIndex::build(segments, embeddings).unwrap();

        for (i, paragraph) in paragraphs.iter().enumerate() {
            let result = index.search(&embedder.embed_sync(paragraph), 1).unwrap();
            let top = result.top().unwrap();
            prop_assert_eq!(top.distance, 0.0);
            // Paragraphs with identical token bags share a vector; the lowest id wins
            prop_assert!(top.fragment.id <= i);
        }
    }
}

#[test]
fn test_empty_corpus_is_an_error_not_an_empty_index() {
    assert_eq!(
        VectorIndex::build(Vec::new(), Vec::new()).unwrap_err(),
        DomainError::EmptyCorpus
    );
}
