//! Benchmarks for exact flat vector search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use docqa::infrastructure::vector::{HashingEmbeddingProvider, VectorIndex};
use docqa::Segment;

fn synthetic_index(fragments: usize, dim: usize) -> VectorIndex {
    let segments = (0..fragments)
        .map(|i| Segment::new(format!("fragment {i}"), 1))
        .collect();
    let embeddings = (0..fragments)
        .map(|i| (0..dim).map(|j| ((i * dim + j) as f32).sin()).collect())
        .collect();
    VectorIndex::build(segments, embeddings).expect("valid index")
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("flat_search_dim384");
    let query: Vec<f32> = (0..384).map(|j| (j as f32).cos()).collect();

    for fragments in [100, 1_000, 10_000] {
        let index = synthetic_index(fragments, 384);
        group.bench_with_input(BenchmarkId::new("top3", fragments), &index, |b, index| {
            b.iter(|| index.search(black_box(&query), 3).unwrap().len())
        });
    }
    group.finish();

    let index = synthetic_index(1_000, 384);
    c.bench_function("flat_search_all_1000", |b| {
        b.iter(|| index.search(black_box(&query), 1_000).unwrap().len())
    });
}

fn bench_hashing_embedder(c: &mut Criterion) {
    let embedder = HashingEmbeddingProvider::new(384).expect("valid dimension");
    let paragraph = "Refunds are processed within five business days of receiving the returned item. \
                     Shipping costs are not refunded unless the item arrived damaged.";

    c.bench_function("hashing_embed_paragraph", |b| {
        b.iter(|| embedder.embed_sync(black_box(paragraph)))
    });
}

criterion_group!(benches, bench_search, bench_hashing_embedder);
criterion_main!(benches);
