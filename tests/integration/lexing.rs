//! Integration tests for lexer + stemmer pipeline
//! Tests that tokens reach the stemmers the way the driver feeds them

use porter_core::{Language, SourceMap, Stemmer};
use porter_english::EnglishStemmer;
use porter_lexer::{Lexer, Token};
use porter_pipeline::Pipeline;

#[test]
fn test_lexer_feeds_english_buffer() {
    let text = "Caresses, ponies; ties: cats!";
    let mut stemmer = EnglishStemmer::new();
    let mut stems = Vec::new();

    for token in Lexer::new(text).words() {
        let chars: Vec<char> = token.text.to_lowercase().chars().collect();
        stemmer.add_chars(&chars);
        stemmer.stem();
        stems.push(stemmer.to_string());
    }

    assert_eq!(stems, vec!["caress", "poni", "ti", "cat"]);
}

#[test]
fn test_token_spans_match_source_positions() {
    let text = "one\nдва three";
    let source_map = SourceMap::new(text);
    let tokens = Lexer::new(text).tokenize();

    assert_eq!(tokens.last().map(|token| token.token), Some(Token::Eof));
    let positions: Vec<(usize, usize)> = tokens
        .iter()
        .filter(|token| token.token == Token::Word)
        .map(|token| {
            let pos = source_map.position(token.span.start);
            (pos.line, pos.column)
        })
        .collect();
    assert_eq!(positions, vec![(1, 1), (2, 1), (2, 5)]);
}

#[test]
fn test_pipeline_matches_direct_stemmer_calls() {
    let text = "The generalizations were relational; вежливость и красивая книги";
    let results = Pipeline::default().stem_text(text);

    let mut english = EnglishStemmer::new();
    for word in &results {
        let expected = match Language::detect(&word.word) {
            Language::English => Stemmer::stem(&mut english, &word.word),
            Language::Russian => porter_russian::stem(&word.word),
        };
        assert_eq!(word.stem, expected, "stemming {}", word.word);
    }
    assert_eq!(results.len(), 8);
}
