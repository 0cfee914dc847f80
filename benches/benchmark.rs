use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tf_idf_stats::{TfIdfAnalyzer, TfIdfConfig};

const VOCAB: &[&str] = &[
    "rust", "fast", "parallel", "memory", "safe", "the", "and", "of", "compiler", "borrow",
    "checker", "trait", "generic", "lifetime", "async", "thread", "vector", "index", "corpus", "term",
];

/// deterministic synthetic documents (xorshift32)
fn synthetic_corpus(docs: usize, words: usize) -> Vec<String> {
    let mut state = 0x1234_5678u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..docs)
        .map(|_| {
            (0..words)
                .map(|_| VOCAB[next() as usize % VOCAB.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn corpus_benchmark(c: &mut Criterion) {
    let docs = synthetic_corpus(500, 400);

    let unigram: TfIdfAnalyzer = TfIdfAnalyzer::new(TfIdfConfig::default()).expect("valid config");
    c.bench_function("run_unigram", |b| {
        b.iter(|| unigram.run(black_box(&docs)).expect("run"))
    });

    let trigram: TfIdfAnalyzer = TfIdfAnalyzer::new(
        TfIdfConfig::default().with_ngram(3).without_stop_words("en"),
    )
    .expect("valid config");
    c.bench_function("run_trigram_stop_words", |b| {
        b.iter(|| trigram.run(black_box(&docs)).expect("run"))
    });
}

criterion_group!(benches, corpus_benchmark);
criterion_main!(benches);
