//! Text stemming pipeline
//!
//! Tokenizes text, chooses a stemmer for every word and records where each
//! word was found.

use porter_core::{Language, PorterError, SourceMap, Span, StemmedWord, Stemmer};
use porter_english::EnglishStemmer;
use porter_lexer::Lexer;
use porter_russian::RussianStemmer;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// How the stemmer for a word is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageMode {
    /// Per word, by script
    #[default]
    Auto,
    Fixed(Language),
}

impl FromStr for LanguageMode {
    type Err = PorterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Fixed)
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Fixed(language) => write!(f, "{language}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub language: LanguageMode,
    /// Words with fewer characters are skipped
    pub min_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: LanguageMode::Auto,
            min_length: 1,
        }
    }
}

pub struct Pipeline {
    config: PipelineConfig,
    english: EnglishStemmer,
    russian: RussianStemmer,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Pipeline {
    #[must_use]
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            english: EnglishStemmer::new(),
            russian: RussianStemmer::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn stemmer_for(&mut self, word: &str) -> &mut dyn Stemmer {
        let language = match self.config.language {
            LanguageMode::Auto => Language::detect(word),
            LanguageMode::Fixed(language) => language,
        };
        match language {
            Language::English => &mut self.english,
            Language::Russian => &mut self.russian,
        }
    }

    /// Stem a single word as given, without tokenizing it
    pub fn stem_word(&mut self, word: &str) -> StemmedWord {
        let stemmer = self.stemmer_for(word);
        StemmedWord {
            word: word.to_string(),
            stem: stemmer.stem(word),
            language: stemmer.language(),
            span: Span::new(0, word.len()),
            line: 1,
            column: 1,
        }
    }

    /// Stem every word of `text`, in order
    pub fn stem_text(&mut self, text: &str) -> Vec<StemmedWord> {
        let source_map = SourceMap::new(text);
        let mut results = Vec::new();

        for token in Lexer::new(text).words() {
            if token.text.chars().count() < self.config.min_length {
                continue;
            }
            let stemmer = self.stemmer_for(&token.text);
            let stem = stemmer.stem(&token.text);
            let language = stemmer.language();
            let pos = source_map.position(token.span.start);
            results.push(StemmedWord {
                word: token.text,
                stem,
                language,
                span: token.span,
                line: pos.line,
                column: pos.column,
            });
        }

        results
    }

    /// Stem raw bytes read from `filename`
    ///
    /// # Errors
    ///
    /// Returns `PorterError::Encoding` at the first byte that is not valid UTF-8
    pub fn stem_source(
        &mut self,
        filename: &str,
        bytes: &[u8],
    ) -> Result<Vec<StemmedWord>, PorterError> {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                let valid_up_to = e.valid_up_to();
                let bad_len = e.error_len().unwrap_or(bytes.len() - valid_up_to);
                let valid = std::str::from_utf8(&bytes[..valid_up_to]).unwrap_or_default();
                let span = Span::new(valid_up_to, valid_up_to + bad_len);
                tracing::debug!(source = filename, offset = valid_up_to, "invalid UTF-8");
                return Err(PorterError::encoding(span, &SourceMap::new(valid), filename));
            }
        };

        let results = self.stem_text(text);
        tracing::debug!(
            source = filename,
            words = results.len(),
            language = %self.config.language,
            "stemmed source"
        );
        Ok(results)
    }

    /// Read and stem a file
    ///
    /// # Errors
    ///
    /// Returns `PorterError` if the file cannot be read or is not valid UTF-8
    pub fn stem_file(&mut self, path: &Path) -> Result<Vec<StemmedWord>, PorterError> {
        let filename = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| PorterError::unreadable(&filename, e))?;
        self.stem_source(&filename, &bytes)
    }
}
