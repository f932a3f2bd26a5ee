use criterion::{Criterion, criterion_group, criterion_main};
use porter_english::EnglishStemmer;
use porter_pipeline::Pipeline;
use std::hint::black_box;

const ENGLISH: &str = "Generalizations of relational oscillators were connecting \
    the hopeful airliners with adjustable allowances and electrical triplicates.";

const RUSSIAN: &str = "Красивая вежливость читающий длинный добрейший нравится \
    сделавшись книги мама раму.";

fn bench_english_words(c: &mut Criterion) {
    let words: Vec<&str> = ENGLISH.split_whitespace().collect();
    let mut stemmer = EnglishStemmer::new();
    c.bench_function("english words", |b| {
        b.iter(|| {
            for word in &words {
                black_box(stemmer.stem_word(black_box(word)));
            }
        });
    });
}

fn bench_russian_words(c: &mut Criterion) {
    let words: Vec<&str> = RUSSIAN.split_whitespace().collect();
    c.bench_function("russian words", |b| {
        b.iter(|| {
            for word in &words {
                black_box(porter_russian::stem(black_box(word)));
            }
        });
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let text = format!("{ENGLISH}\n{RUSSIAN}\n").repeat(20);
    let mut pipeline = Pipeline::default();
    c.bench_function("pipeline mixed text", |b| {
        b.iter(|| black_box(pipeline.stem_text(black_box(&text))));
    });
}

criterion_group!(benches, bench_english_words, bench_russian_words, bench_pipeline);
criterion_main!(benches);
