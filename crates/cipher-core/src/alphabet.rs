//! Standard and keyword-derived cipher alphabets.

use serde::{Deserialize, Serialize};

/// The 26-letter Latin alphabet.
pub const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The 27-letter Spanish alphabet used by xenocrypts (Ñ after N).
pub const SPANISH: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

/// Which plaintext alphabet a puzzle is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// 26 letters, A–Z.
    Latin,
    /// 27 letters, A–Z plus Ñ.
    Spanish,
}

impl Language {
    /// Returns the letters of the standard alphabet in order.
    pub const fn letters(self) -> &'static str {
        match self {
            Language::Latin => LATIN,
            Language::Spanish => SPANISH,
        }
    }

    /// Number of symbols in the alphabet.
    pub const fn size(self) -> usize {
        match self {
            Language::Latin => 26,
            Language::Spanish => 27,
        }
    }

    /// Returns true if `c` is a letter of this alphabet.
    pub fn contains(self, c: char) -> bool {
        c.is_ascii_uppercase() || (self == Language::Spanish && c == 'Ñ')
    }
}

/// An ordered arrangement of every letter of a [`Language`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// The standard alphabet in natural order.
    pub fn standard(language: Language) -> Self {
        Self {
            letters: language.letters().chars().collect(),
        }
    }

    /// Builds a keyed alphabet: the keyword's letters (deduplicated, first
    /// occurrence wins) followed by the unused Latin letters in order.
    ///
    /// Only A–Z from the keyword are used. For [`Language::Spanish`] the Ñ is
    /// appended as the 27th symbol instead of being interleaved.
    pub fn keyed(keyword: &str, language: Language) -> Self {
        let mut letters = Vec::with_capacity(language.size());
        for c in keyword.chars().flat_map(char::to_uppercase) {
            if c.is_ascii_uppercase() && !letters.contains(&c) {
                letters.push(c);
            }
        }
        for c in LATIN.chars() {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        if language == Language::Spanish {
            letters.push('Ñ');
        }
        Self { letters }
    }

    /// Wraps an explicit arrangement. Returns `None` unless `letters` is a
    /// permutation of the standard alphabet for `language`.
    pub fn from_letters(letters: Vec<char>, language: Language) -> Option<Self> {
        if letters.len() != language.size() {
            return None;
        }
        let mut seen = letters.clone();
        seen.sort_unstable();
        seen.dedup();
        if seen.len() != letters.len() || !letters.iter().all(|&c| language.contains(c)) {
            return None;
        }
        Some(Self { letters })
    }

    /// Returns the alphabet rotated left by `by` positions.
    pub fn rotated(&self, by: usize) -> Self {
        let mut letters = self.letters.clone();
        if !letters.is_empty() {
            let by = by % letters.len();
            letters.rotate_left(by);
        }
        Self { letters }
    }

    /// Position of `c` in this arrangement.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.letters.iter().position(|&l| l == c)
    }

    /// Letter at position `index`.
    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// The letters in order.
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if the alphabet holds no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.letters {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
