//! Porter-style stemmer for Russian
//!
//! Suffixes are only removed from RV, the part of the word after its first
//! vowel. Each suffix class lists plain endings and endings that count only
//! when the letter before them (inside RV) is `а` or `я`. Within a class
//! the longest matching ending is removed.

use porter_core::{Language, Stemmer};

const VOWELS: [char; 9] = ['а', 'е', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

struct SuffixClass {
    plain: &'static [&'static str],
    after_a: &'static [&'static str],
}

impl SuffixClass {
    /// Byte length of the longest ending of `rv` in this class
    fn longest_match(&self, rv: &str) -> Option<usize> {
        let plain = self
            .plain
            .iter()
            .filter(|suffix| rv.ends_with(**suffix))
            .map(|suffix| suffix.len());
        let after_a = self
            .after_a
            .iter()
            .filter(|suffix| {
                rv.strip_suffix(**suffix)
                    .is_some_and(|rest| rest.ends_with(['а', 'я']))
            })
            .map(|suffix| suffix.len());
        plain.chain(after_a).max()
    }

    fn strip<'a>(&self, rv: &'a str) -> Option<&'a str> {
        self.longest_match(rv).map(|len| &rv[..rv.len() - len])
    }
}

const PERFECTIVE_GERUND: SuffixClass = SuffixClass {
    plain: &["ив", "ивши", "ившись", "ыв", "ывши", "ывшись"],
    after_a: &["в", "вши", "вшись"],
};

const REFLEXIVE: SuffixClass = SuffixClass {
    plain: &["ся", "сь"],
    after_a: &[],
};

const ADJECTIVE: SuffixClass = SuffixClass {
    plain: &[
        "ее", "ие", "ые", "ое", "ими", "ыми", "ей", "ий", "ый", "ой", "ем", "им", "ым", "ом", "его",
        "ого", "ему", "ому", "их", "ых", "ую", "юю", "ая", "яя", "ою", "ею",
    ],
    after_a: &[],
};

const PARTICIPLE: SuffixClass = SuffixClass {
    plain: &["ивш", "ывш", "ующ"],
    after_a: &["ем", "нн", "вш", "ющ", "щ"],
};

const VERB: SuffixClass = SuffixClass {
    plain: &[
        "ила", "ыла", "ена", "ейте", "уйте", "ите", "или", "ыли", "ей", "уй", "ил", "ыл", "им",
        "ым", "ен", "ило", "ыло", "ено", "ят", "ует", "уют", "ит", "ыт", "ены", "ить", "ыть",
        "ишь", "ую", "ю",
    ],
    after_a: &[
        "ла", "на", "ете", "йте", "ли", "й", "л", "ем", "н", "ло", "но", "ет", "ют", "ны", "ть",
        "ешь", "нно",
    ],
};

const NOUN: SuffixClass = SuffixClass {
    plain: &[
        "а", "ев", "ов", "ие", "ье", "е", "иями", "ями", "ами", "еи", "ии", "и", "ией", "ей", "ой",
        "ий", "й", "иям", "ям", "ием", "ем", "ам", "ом", "о", "у", "ах", "иях", "ях", "ы", "ь",
        "ию", "ью", "ю", "ия", "ья", "я",
    ],
    after_a: &[],
};

const DERIVATIONAL: [&str; 2] = ["ость", "ост"];

const SUPERLATIVE: SuffixClass = SuffixClass {
    plain: &["ейше", "ейш"],
    after_a: &[],
};

/// Split a normalized word after its first vowel
fn split_rv(word: &str) -> Option<(&str, &str)> {
    let (index, vowel) = word.char_indices().find(|&(_, ch)| is_vowel(ch))?;
    Some(word.split_at(index + vowel.len_utf8()))
}

/// `-ост`/`-ость` preceded somewhere by a consonant-vowel pair
fn derivational_stem(rv: &str) -> Option<&str> {
    let suffix = DERIVATIONAL.into_iter().find(|suffix| rv.ends_with(suffix))?;
    let rest = &rv[..rv.len() - suffix.len()];
    let chars: Vec<char> = rest.chars().collect();
    chars
        .windows(2)
        .any(|pair| !is_vowel(pair[0]) && is_vowel(pair[1]))
        .then_some(rest)
}

fn stem_rv(rv: &str) -> String {
    let mut rv = PERFECTIVE_GERUND.strip(rv).unwrap_or_else(|| {
        let rv = REFLEXIVE.strip(rv).unwrap_or(rv);
        if let Some(stripped) = ADJECTIVE.strip(rv) {
            PARTICIPLE.strip(stripped).unwrap_or(stripped)
        } else {
            VERB.strip(rv).or_else(|| NOUN.strip(rv)).unwrap_or(rv)
        }
    });

    rv = rv.strip_suffix('и').unwrap_or(rv);
    if let Some(stripped) = derivational_stem(rv) {
        rv = stripped;
    }
    rv = rv.strip_suffix('ь').unwrap_or(rv);
    rv = SUPERLATIVE.strip(rv).unwrap_or(rv);

    match rv.strip_suffix("нн") {
        Some(stem) => format!("{stem}н"),
        None => rv.to_string(),
    }
}

/// Stem a Russian word
///
/// The word is lowercased and `ё` is folded into `е` first. Words without a
/// vowel, or whose only vowel is the last letter, come back normalized but
/// otherwise unchanged.
#[must_use]
pub fn stem(word: &str) -> String {
    let word = word.to_lowercase().replace('ё', "е");
    match split_rv(&word) {
        Some((prefix, rv)) if !rv.is_empty() => format!("{prefix}{}", stem_rv(rv)),
        _ => word,
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RussianStemmer;

impl RussianStemmer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Stemmer for RussianStemmer {
    fn language(&self) -> Language {
        Language::Russian
    }

    fn stem(&mut self, word: &str) -> String {
        stem(word)
    }
}
