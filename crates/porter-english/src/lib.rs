//! Porter stemmer for English
//!
//! The classic Porter (1980) suffix-stripping algorithm. Characters are
//! appended to a buffer, `stem()` reduces the buffered word in place and the
//! buffer is then ready for the next word.
//!
//! ```
//! use porter_english::EnglishStemmer;
//!
//! let mut stemmer = EnglishStemmer::new();
//! assert_eq!(stemmer.stem_word("generalizations"), "gener");
//! assert_eq!(stemmer.stem_word("hopping"), "hop");
//! ```

use porter_core::{Language, Stemmer};
use std::fmt;

/// Buffer growth step
const INC: usize = 50;

pub struct EnglishStemmer {
    /// Word being stemmed
    b: Vec<char>,
    /// Last stemmed word
    result: String,
    /// End of the stem (exclusive) after the last successful `ends`
    j: usize,
    /// Index of the last character of the word
    k: usize,
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishStemmer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            b: Vec::with_capacity(INC),
            result: String::new(),
            j: 0,
            k: 0,
        }
    }

    /// Append one character to the word being built
    pub fn add(&mut self, ch: char) {
        self.grow(1);
        self.b.push(ch);
    }

    /// Append several characters to the word being built
    pub fn add_chars(&mut self, chars: &[char]) {
        self.grow(chars.len());
        self.b.extend_from_slice(chars);
    }

    fn grow(&mut self, extra: usize) {
        if self.b.len() + extra > self.b.capacity() {
            self.b.reserve_exact(extra + INC);
        }
    }

    /// Stem the buffered word and reset the buffer
    ///
    /// Words of two characters or fewer are left unchanged.
    pub fn stem(&mut self) {
        if self.b.len() > 2 {
            self.k = self.b.len() - 1;
            self.j = 0;
            self.step1();
            self.step2();
            self.step3();
            self.step4();
            self.step5();
            self.step6();
            self.result = self.b[..=self.k].iter().collect();
        } else {
            self.result = self.b.iter().collect();
        }
        self.b.clear();
    }

    /// Stem `word` as given, without case folding
    pub fn stem_word(&mut self, word: &str) -> String {
        self.b.clear();
        for ch in word.chars() {
            self.add(ch);
        }
        self.stem();
        self.result.clone()
    }

    /// Result of the last `stem()`
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.result
    }

    /// Take the result of the last `stem()`, leaving it empty
    pub fn result(&mut self) -> String {
        std::mem::take(&mut self.result)
    }

    /// A `y` is a consonant at the start of a word or after a vowel, so in a
    /// run of `y`s the answer alternates from the letter before the run.
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => {
                let run = self.b[..=i].iter().rev().take_while(|&&ch| ch == 'y').count();
                let start = i + 1 - run;
                let first_is_consonant = start == 0 || !self.is_consonant(start - 1);
                first_is_consonant == (run % 2 == 1)
            }
            _ => true,
        }
    }

    /// Consonant flags for `b[..end]`, computed in one pass
    fn consonant_flags(&self, end: usize) -> impl Iterator<Item = bool> + '_ {
        self.b[..end].iter().scan(None, |prev: &mut Option<bool>, &ch| {
            let consonant = match ch {
                'a' | 'e' | 'i' | 'o' | 'u' => false,
                'y' => !matches!(*prev, Some(true)),
                _ => true,
            };
            *prev = Some(consonant);
            Some(consonant)
        })
    }

    /// Number of vowel-consonant sequences in `b[..j]`
    ///
    /// With `c` a run of consonants and `v` a run of vowels, every word is
    /// `[c](vc){m}[v]` and this returns `m`.
    fn measure(&self) -> usize {
        let mut n = 0;
        let mut after_vowel = false;
        for consonant in self.consonant_flags(self.j) {
            if consonant && after_vowel {
                n += 1;
            }
            after_vowel = !consonant;
        }
        n
    }

    fn vowel_in_stem(&self) -> bool {
        self.consonant_flags(self.j).any(|consonant| !consonant)
    }

    /// `b[i-1]`, `b[i]` are the same consonant
    fn double_consonant(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.is_consonant(i)
    }

    /// `b[i-2..=i]` is consonant-vowel-consonant and `b[i]` is not w, x or y
    ///
    /// Restores an `e` on short words: cav(e), lov(e), hop(e), crim(e), but
    /// not snow, box, tray.
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2)
        {
            return false;
        }
        !matches!(self.b[i], 'w' | 'x' | 'y')
    }

    /// Word ends with `s`; on a match `j` marks where the suffix starts
    fn ends(&mut self, s: &str) -> bool {
        let len = s.len();
        if len > self.k + 1 {
            return false;
        }
        let start = self.k + 1 - len;
        if !self.b[start..=self.k].iter().copied().eq(s.chars()) {
            return false;
        }
        self.j = start;
        true
    }

    /// Replace everything after the stem with `s`
    fn set_to(&mut self, s: &str) {
        for (offset, ch) in s.chars().enumerate() {
            let i = self.j + offset;
            if i < self.b.len() {
                self.b[i] = ch;
            } else {
                self.b.push(ch);
            }
        }
        self.k = self.j + s.len() - 1;
    }

    fn replace_if_measured(&mut self, s: &str) {
        if self.measure() > 0 {
            self.set_to(s);
        }
    }

    /// The first matching suffix wins, whether or not it gets replaced
    fn replace_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace_if_measured(replacement);
                return;
            }
        }
    }

    /// Plurals and -ed or -ing
    ///
    /// caresses -> caress, ponies -> poni, cats -> cat, agreed -> agree,
    /// matting -> mat, mating -> mate, meetings -> meet
    fn step1(&mut self) {
        if self.b[self.k] == 's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b[self.k - 1] != 's' {
                self.k -= 1;
            }
        }
        if self.ends("eed") {
            if self.measure() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j - 1;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k) {
                self.k -= 1;
                if matches!(self.b[self.k], 'l' | 's' | 'z') {
                    self.k += 1;
                }
            } else if self.measure() == 1 && self.cvc(self.k) {
                self.set_to("e");
            }
        }
    }

    /// Terminal y to i when there is another vowel in the stem
    fn step2(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            self.b[self.k] = 'i';
        }
    }

    /// Double suffixes to single ones: -ization (-ize + -ation) to -ize
    fn step3(&mut self) {
        if self.k == 0 {
            return;
        }
        let rules: &[(&str, &str)] = match self.b[self.k - 1] {
            'a' => &[("ational", "ate"), ("tional", "tion")],
            'c' => &[("enci", "ence"), ("anci", "ance")],
            'e' => &[("izer", "ize")],
            'l' => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            's' => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            'g' => &[("logi", "log")],
            _ => return,
        };
        self.replace_first(rules);
    }

    /// -ic-, -full, -ness
    fn step4(&mut self) {
        let rules: &[(&str, &str)] = match self.b[self.k] {
            'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            'i' => &[("iciti", "ic")],
            'l' => &[("ical", "ic"), ("ful", "")],
            's' => &[("ness", "")],
            _ => return,
        };
        self.replace_first(rules);
    }

    /// -ant, -ence and friends in context <c>vcvc<v>
    fn step5(&mut self) {
        if self.k == 0 {
            return;
        }
        let found = match self.b[self.k - 1] {
            'a' => self.ends("al"),
            'c' => self.ends("ance") || self.ends("ence"),
            'e' => self.ends("er"),
            'i' => self.ends("ic"),
            'l' => self.ends("able") || self.ends("ible"),
            'n' => {
                self.ends("ant") || self.ends("ement") || self.ends("ment") || self.ends("ent")
            }
            'o' => {
                (self.ends("ion") && self.j > 0 && matches!(self.b[self.j - 1], 's' | 't'))
                    || self.ends("ou")
            }
            's' => self.ends("ism"),
            't' => self.ends("ate") || self.ends("iti"),
            'u' => self.ends("ous"),
            'v' => self.ends("ive"),
            'z' => self.ends("ize"),
            _ => false,
        };
        if found && self.measure() > 1 {
            self.k = self.j - 1;
        }
    }

    /// Final -e when m() > 1, and -ll to -l
    fn step6(&mut self) {
        self.j = self.k + 1;
        if self.b[self.k] == 'e' {
            let m = self.measure();
            if m > 1 || (m == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.b[self.k] == 'l' && self.double_consonant(self.k) && self.measure() > 1 {
            self.k -= 1;
        }
    }
}

impl fmt::Display for EnglishStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.result)
    }
}

impl Stemmer for EnglishStemmer {
    fn language(&self) -> Language {
        Language::English
    }

    fn stem(&mut self, word: &str) -> String {
        self.stem_word(&word.to_lowercase())
    }
}
