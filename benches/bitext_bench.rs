use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bitext::{
    align::{cosine_matrix, greedy_match},
    config::NormalizeConfig,
    transformers::normalize,
};

fn raw_text() -> String {
    let page = "THE BOOK
It was the best of times, it was the worst of
times, it was the age of wis-
dom, it was the age of foolishness.

① A footnote that has to go.
Paris① is the capital of France!
12
";
    page.repeat(200)
}

fn vectors(n: usize, dim: usize, offset: usize) -> Vec<Vec<f32>> {
    (0..n)
        .map(|i| {
            (0..dim)
                .map(|j| ((i * 31 + j * 7 + offset) % 17) as f32 - 8.0)
                .collect()
        })
        .collect()
}

pub fn normalize_benchmark(c: &mut Criterion) {
    let raw = raw_text();
    let config = NormalizeConfig::default();
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&raw), &config))
    });
}

pub fn align_benchmark(c: &mut Criterion) {
    let source = vectors(500, 300, 0);
    let target = vectors(450, 300, 3);
    c.bench_function("cosine+greedy 500x450", |b| {
        b.iter(|| greedy_match(&cosine_matrix(black_box(&source), black_box(&target))))
    });
}

criterion_group!(benches, normalize_benchmark, align_benchmark);
criterion_main!(benches);
