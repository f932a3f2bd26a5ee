//! Shared types for the Porter stemming crates
//!
//! Every stemmed word keeps the location it was read from for reporting.

use serde::Serialize;
use std::fmt;
use std::io;
use std::str::FromStr;

/// Byte range in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn dummy() -> Self {
        Self { start: 0, end: 0 }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte offsets to line/column positions
///
/// Columns count characters, not bytes, so Cyrillic text reports the
/// column a reader would expect.
pub struct SourceMap<'src> {
    source: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> SourceMap<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = vec![0];
        for (pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(pos + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                let column = self
                    .source
                    .get(line_start..byte_offset)
                    .map_or(byte_offset - line_start, |text| text.chars().count());
                Position::new(line, column + 1)
            }
        }
    }

    #[must_use]
    pub fn span_to_positions(&self, span: Span) -> (Position, Position) {
        (self.position(span.start), self.position(span.end))
    }
}

/// Languages with a stemmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// Pick a stemmer by script: any Cyrillic letter makes the word Russian
    #[must_use]
    pub fn detect(word: &str) -> Self {
        if word.chars().any(is_cyrillic) {
            Self::Russian
        } else {
            Self::English
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Russian => "ru",
        }
    }
}

const fn is_cyrillic(ch: char) -> bool {
    matches!(ch, '\u{0400}'..='\u{052F}')
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = PorterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ru" | "russian" => Ok(Self::Russian),
            _ => Err(PorterError::UnknownLanguage {
                name: s.to_string(),
            }),
        }
    }
}

/// A word-level stemmer
///
/// Implementations lowercase the word before stemming it.
pub trait Stemmer {
    fn language(&self) -> Language;

    fn stem(&mut self, word: &str) -> String;
}

/// One word of input together with its stem and where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemmedWord {
    pub word: String,
    pub stem: String,
    pub language: Language,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

/// Error types with location information
#[derive(thiserror::Error, Debug)]
pub enum PorterError {
    #[error("porter: ERR_LANGUAGE: unknown language `{name}` (expected en, ru or auto)")]
    UnknownLanguage { name: String },

    #[error("porter:{path}: ERR_NOT_FOUND: file not found")]
    NotFound { path: String },

    #[error("porter:{path}: ERR_IO: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("porter:{filename}:{line}:{column}: ERR_ENCODING: input is not valid UTF-8")]
    Encoding {
        filename: String,
        span: Span,
        line: usize,
        column: usize,
    },
}

impl PorterError {
    /// Classify a failed read of `path`
    #[must_use]
    pub fn unreadable(path: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound {
                path: path.to_string(),
            }
        } else {
            Self::Io {
                path: path.to_string(),
                source,
            }
        }
    }

    /// Invalid UTF-8 at `span`; positions come from the valid prefix
    #[must_use]
    pub fn encoding(span: Span, source_map: &SourceMap<'_>, filename: &str) -> Self {
        let pos = source_map.position(span.start);
        Self::Encoding {
            filename: filename.to_string(),
            span,
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Encoding { span, .. } => Some(*span),
            Self::UnknownLanguage { .. } | Self::NotFound { .. } | Self::Io { .. } => None,
        }
    }
}
