//! Word tokenization for the Porter stemmers
//!
//! Splits text on runs of ASCII whitespace (space, tab, newline, vertical
//! tab, form feed, carriage return) and ASCII punctuation using logos.
//! Anything else, including digits, Cyrillic letters, typographic quotes
//! and non-breaking spaces, stays inside a word.

use logos::Logos;
use porter_core::Span;

/// Text tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A run of characters that are neither ASCII whitespace nor ASCII punctuation
    #[regex(r"[^ \t\n\x0B\f\r!-/:-@\[-`{-~]+")]
    Word,

    /// A run of ASCII punctuation (`!"#$%&'()*+,-./:;<=>?@[\]^_` and friends)
    #[regex(r"[!-/:-@\[-`{-~]+")]
    Punctuation,

    /// ASCII whitespace (ignored)
    #[regex(r"[ \t\n\x0B\f\r]+", logos::skip)]
    Whitespace,

    /// End of input
    Eof,

    /// Lexer error
    ///
    /// The three patterns above cover every character, so logos never
    /// reports one; `next_token` still maps a logos error here so it stays
    /// total over `Result`.
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(Ok(token)) => self.spanned(token),
            Some(Err(())) => self.spanned(Token::Error),
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: String::new(),
            },
        }
    }

    fn spanned(&self, token: Token) -> SpannedToken {
        let span = self.lexer.span();
        SpannedToken {
            token,
            text: self.input[span.clone()].to_string(),
            span: Span::new(span.start, span.end),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Word tokens only, in input order
    pub fn words(&mut self) -> Vec<SpannedToken> {
        self.tokenize()
            .into_iter()
            .filter(|token| token.token == Token::Word)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn word_texts(input: &str) -> Vec<String> {
        Lexer::new(input)
            .words()
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_simple_sentence() {
        let mut lexer = Lexer::new("cats running");
        let tokens = lexer.tokenize();

        assert_eq!(tokens.len(), 3); // cats, running, EOF
        assert_eq!(tokens[0].token, Token::Word);
        assert_eq!(tokens[0].text, "cats");
        assert_eq!(tokens[1].token, Token::Word);
        assert_eq!(tokens[1].text, "running");
        assert_eq!(tokens[2].token, Token::Eof);
    }

    #[test]
    fn test_punctuation_tokens() {
        let mut lexer = Lexer::new("Hello, world!");
        let tokens = lexer.tokenize();

        // Hello, ",", world, "!", EOF
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1].token, Token::Punctuation);
        assert_eq!(tokens[1].text, ",");
        assert_eq!(tokens[3].token, Token::Punctuation);
        assert_eq!(tokens[3].text, "!");
        assert_eq!(tokens[4].token, Token::Eof);
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("cats  running").tokenize();

        assert_eq!(tokens[0].span, Span::new(0, 4));
        assert_eq!(tokens[1].span, Span::new(6, 13));
        assert_eq!(tokens[2].span, Span::new(13, 13));
    }

    #[test]
    fn test_cyrillic_words() {
        let tokens = Lexer::new("Мама мыла раму.").words();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "Мама");
        assert_eq!(tokens[0].span, Span::new(0, 8));
        assert_eq!(tokens[2].text, "раму");
    }

    #[test]
    fn test_ascii_punctuation_splits_words() {
        assert_eq!(
            word_texts("well-known snake_case it's (quoted) a/b"),
            vec!["well", "known", "snake", "case", "it", "s", "quoted", "a", "b"]
        );
    }

    #[test]
    fn test_non_ascii_punctuation_stays_in_word() {
        assert_eq!(word_texts("«ёлка» — tree"), vec!["«ёлка»", "—", "tree"]);
    }

    #[test]
    fn test_digits_stay_in_word() {
        assert_eq!(word_texts("mp3 files, 2024"), vec!["mp3", "files", "2024"]);
    }

    #[test]
    fn test_empty_and_separator_only_input() {
        assert!(word_texts("").is_empty());
        assert!(word_texts("  ...\n\t!!  ").is_empty());

        let tokens = Lexer::new("").tokenize();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, Token::Eof);
    }

    #[test]
    fn test_only_ascii_whitespace_separates() {
        assert_eq!(
            word_texts("café\u{a0}menus\u{2003}running"),
            vec!["café\u{a0}menus\u{2003}running"]
        );
        assert_eq!(
            word_texts("tab\tvt\u{0B}ff\u{0C}cr\r"),
            vec!["tab", "vt", "ff", "cr"]
        );
    }

    #[test]
    fn test_newlines_are_separators() {
        assert_eq!(
            word_texts("first line\r\nsecond\nthird"),
            vec!["first", "line", "second", "third"]
        );
    }

    proptest! {
        #[test]
        fn prop_tokens_cover_input_without_errors(input in "\\PC{0,40}") {
            let tokens = Lexer::new(&input).tokenize();
            prop_assert!(tokens.iter().all(|token| token.token != Token::Error));

            let covered: usize = tokens.iter().map(|token| token.span.len()).sum();
            let whitespace = input
                .chars()
                .filter(|ch| matches!(ch, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r'))
                .count();
            prop_assert_eq!(covered + whitespace, input.len());
        }
    }
}
