//! Criterion benchmarks for Milon.
//!
//! Covers tokenization, candidate form generation, index construction and
//! matching, sequential and batched.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use milon::analysis::affix::AffixExpander;
use milon::analysis::analyzer::{Analyzer, HebrewAnalyzer};
use milon::analysis::tokenizer::tokenize;
use milon::vocabulary::{KnownWord, KnownWordIndex, VocabularyMatcher};
use std::hint::black_box;

const WORDS: [&str; 24] = [
    "ילד", "גדול", "בית", "ספר", "הלך", "אמר", "עיר", "מדינה", "ממשלה", "שלום", "מלחמה", "עבודה",
    "כסף", "חדש", "ישן", "יום", "לילה", "ראש", "שנה", "עולם", "אדם", "דרך", "מים", "ארץ",
];

const PREFIXES: [&str; 6] = ["", "ו", "ה", "ב", "וה", "של"];

/// Generate test articles for benchmarking.
fn generate_test_texts(count: usize) -> Vec<String> {
    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        let length = 40 + (i % 80);
        let mut words = Vec::with_capacity(length);
        for j in 0..length {
            let word = WORDS[(i * 7 + j * 13) % WORDS.len()];
            let prefix = PREFIXES[(i + j * 5) % PREFIXES.len()];
            words.push(format!("{prefix}{word}"));
        }
        texts.push(format!("{}.", words.join(" ")));
    }
    texts
}

/// Generate a known-word bank.
fn generate_known_words(count: usize) -> Vec<KnownWord> {
    (0..count)
        .map(|i| {
            let hebrew = if i < WORDS.len() {
                WORDS[i].to_string()
            } else {
                format!("{}{}", WORDS[i % WORDS.len()], WORDS[(i / WORDS.len()) % WORDS.len()])
            };
            KnownWord::new(hebrew, format!("word {i}"), i.to_string())
                .with_conjugations(i % 5 == 0)
        })
        .collect()
}

/// Benchmark tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let texts = generate_test_texts(100);

    group.bench_function("tokenize_single_text", |b| {
        b.iter(|| black_box(tokenize(black_box(&texts[0]))))
    });

    let analyzer = HebrewAnalyzer::unique();
    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_texts", |b| {
        b.iter(|| {
            for text in &texts {
                if let Ok(tokens) = analyzer.analyze(black_box(text)) {
                    black_box(tokens.count());
                }
            }
        })
    });

    group.finish();
}

/// Benchmark candidate form generation.
fn bench_candidate_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_forms");
    let expander = AffixExpander::new();

    for token in ["ילד", "והילדים", "שבבית", "וכשהלכנו"] {
        group.bench_with_input(BenchmarkId::from_parameter(token), token, |b, token| {
            b.iter(|| black_box(expander.candidate_forms(black_box(token))))
        });
    }

    group.finish();
}

/// Benchmark index construction and matching.
fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");
    let texts = generate_test_texts(64);
    let matcher = VocabularyMatcher::new();
    let expander = AffixExpander::new();

    for size in [100, 1000] {
        let words = generate_known_words(size);

        group.bench_with_input(BenchmarkId::new("build_index", size), &words, |b, words| {
            b.iter(|| black_box(KnownWordIndex::build(black_box(words), &expander).len()))
        });

        group.bench_with_input(BenchmarkId::new("match_text", size), &words, |b, words| {
            b.iter(|| black_box(matcher.match_text(black_box(&texts[0]), words)))
        });
    }

    let words = generate_known_words(1000);
    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("match_sequential", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(matcher.match_text(text, &words));
            }
        })
    });
    group.bench_function("match_batch", |b| {
        b.iter(|| black_box(matcher.match_batch(&texts, &words)))
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_candidate_forms, bench_matching);

criterion_main!(benches);
