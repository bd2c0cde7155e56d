use criterion::{black_box, criterion_group, criterion_main, Criterion};
use identlint::classifier::{Classifier, ClassifyPolicy};
use identlint::dictionary::WordStore;
use identlint::segmentation::segment_identifier;
use std::sync::Arc;

/// A spread of identifier shapes seen in real codebases
const IDENTIFIER_CORPUS: &[&str] = &[
    "user",
    "userName",
    "getUserName",
    "UserController",
    "user_name",
    "max_retry_count",
    "primary-button",
    "emailAddressValidator",
    "performAsyncOperation",
    "getUserID",
    "base64Encoder",
    "user1Name",
    "nombreUsuario",
    "frecuenciaCaracterObjetivo",
    "_123",
    "$$",
    "i",
    "handleClickEvent",
    "DatabaseConnectionPool",
    "isAuthenticated",
];

const DICTIONARY_WORDS: &[&str] = &[
    "user", "name", "get", "controller", "max", "retry", "count", "primary", "button", "email",
    "address", "validator", "perform", "async", "operation", "base", "encoder", "handle", "click",
    "event", "database", "connection", "pool", "is", "authenticated",
];

fn benchmark_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    group.bench_function("corpus", |b| {
        b.iter(|| {
            for identifier in IDENTIFIER_CORPUS {
                black_box(segment_identifier(black_box(identifier)));
            }
        })
    });

    // The fast path dominates real workloads
    group.bench_function("all_lowercase", |b| {
        b.iter(|| black_box(segment_identifier(black_box("authentication"))))
    });

    group.finish();
}

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    let policy = ClassifyPolicy::default();

    // Fresh classifier per iteration: every token is a cache miss
    group.bench_function("cold_cache", |b| {
        b.iter(|| {
            let store = Arc::new(WordStore::from_words(DICTIONARY_WORDS.iter().copied()));
            let classifier = Classifier::new(store);
            for identifier in IDENTIFIER_CORPUS {
                black_box(classifier.classify_identifier(black_box(identifier), &policy));
            }
        })
    });

    // Shared classifier: steady-state, everything answered from cache
    let store = Arc::new(WordStore::from_words(DICTIONARY_WORDS.iter().copied()));
    let classifier = Classifier::new(store);
    for identifier in IDENTIFIER_CORPUS {
        classifier.classify_identifier(identifier, &policy);
    }
    group.bench_function("warm_cache", |b| {
        b.iter(|| {
            for identifier in IDENTIFIER_CORPUS {
                black_box(classifier.classify_identifier(black_box(identifier), &policy));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_segmentation, benchmark_classification);
criterion_main!(benches);
