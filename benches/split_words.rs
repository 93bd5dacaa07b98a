use casewords::split_words;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD_PATTERN: Regex = Regex::new(r"(?:[A-Z]?[a-z]{2,})|(?:[A-Z]+)|(?:[0-9]+)").unwrap();
}

fn split_words_regex(s: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(s)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

fn bench_split(c: &mut Criterion) {
    let input = "ThisIsATestStringWithVariousCases123";

    c.bench_function("split_words", |b| b.iter(|| split_words(black_box(input))));
    c.bench_function("split_words_regex", |b| {
        b.iter(|| split_words_regex(black_box(input)))
    });
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
