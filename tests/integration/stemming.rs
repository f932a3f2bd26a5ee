//! Integration tests for the stemmers through the shared `Stemmer` trait

use porter_core::{Language, Stemmer};
use porter_english::EnglishStemmer;
use porter_pipeline::{LanguageMode, Pipeline, PipelineConfig};
use porter_russian::RussianStemmer;
use proptest::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn stemmers() -> Vec<Box<dyn Stemmer>> {
    vec![Box::new(EnglishStemmer::new()), Box::new(RussianStemmer::new())]
}

#[test]
fn test_trait_objects_report_their_language() {
    let languages: Vec<Language> = stemmers().iter().map(|s| s.language()).collect();
    assert_eq!(languages, vec![Language::English, Language::Russian]);
}

#[test]
fn test_trait_objects_lowercase_input() {
    let mut stemmers = stemmers();
    assert_eq!(stemmers[0].stem("HOPEFUL"), "hope");
    assert_eq!(stemmers[1].stem("ВЕЖЛИВОСТЬ"), "вежлив");
}

#[test]
fn test_english_stemmer_is_reusable_across_words() {
    let mut stemmer = EnglishStemmer::new();
    let words = ["generalizations", "a", "oscillators", "is", "connecting"];
    let stems: Vec<String> = words.iter().map(|word| stemmer.stem_word(word)).collect();

    assert_eq!(stems, vec!["gener", "a", "oscil", "is", "connect"]);
}

#[test]
fn test_file_with_mixed_languages() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(
        &temp_file,
        "Connections between nations.\nКрасивая книги читающий.\n",
    )
    .unwrap();

    let mut pipeline = Pipeline::default();
    let results = pipeline.stem_file(temp_file.path()).unwrap();
    let stems: Vec<&str> = results.iter().map(|word| word.stem.as_str()).collect();

    assert_eq!(
        stems,
        vec!["connect", "between", "nation", "красив", "книг", "чита"]
    );
    assert_eq!(results[3].line, 2);
}

#[test]
fn test_fixed_english_mode_leaves_cyrillic_alone() {
    let mut pipeline = Pipeline::new(PipelineConfig {
        language: LanguageMode::Fixed(Language::English),
        min_length: 1,
    });
    let results = pipeline.stem_text("книги books");

    assert_eq!(results[0].stem, "книги");
    assert_eq!(results[1].stem, "book");
}

proptest! {
    #[test]
    fn prop_pipeline_yields_one_result_per_word(
        words in proptest::collection::vec("[a-zа-я]{1,10}", 0..20)
    ) {
        let text = words.join(" ");
        let results = Pipeline::default().stem_text(&text);
        prop_assert_eq!(results.len(), words.len());
        for (result, word) in results.iter().zip(&words) {
            prop_assert_eq!(&result.word, word);
        }
    }
}
