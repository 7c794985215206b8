//! Word bank injected into keyword selection and cryptarithm synthesis.

use cipher_core::clean_letters;
use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

/// Words used when no bank is supplied (or nothing usable survives cleaning).
pub const FALLBACK_WORDS: [&str; 5] = ["KEYWORD", "CIPHER", "SECRET", "PUZZLE", "MESSAGE"];

/// Shortest and longest words harvested from quotes.
const QUOTE_WORD_LEN: std::ops::RangeInclusive<usize> = 2..=8;

/// Upper-case A–Z words. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// The fixed fallback list.
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Builds a bank from caller-supplied words, upper-casing them and
    /// stripping non-letters. Falls back to [`FALLBACK_WORDS`] if no word
    /// survives.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| clean_letters(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            debug!("word bank empty after cleaning, using fallback list");
            return Self::fallback();
        }
        Self { words }
    }

    /// Harvests a bank from plaintext quotes: words of two to eight letters,
    /// deduplicated in first-seen order.
    pub fn from_quotes<I, S>(quotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = Vec::new();
        for quote in quotes {
            let upper: String = quote
                .as_ref()
                .chars()
                .flat_map(char::to_uppercase)
                .filter(|c| c.is_ascii_uppercase() || c.is_whitespace())
                .collect();
            for word in upper.split_whitespace() {
                if QUOTE_WORD_LEN.contains(&word.len()) && !words.iter().any(|w| w == word) {
                    words.push(word.to_string());
                }
            }
        }
        Self::from_words(words)
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: RngCore>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .map(String::as_str)
            .unwrap_or(FALLBACK_WORDS[0])
    }

    /// All words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn cleaning_uppercases_and_strips() {
        let bank = WordBank::from_words(["send", "mo-re", "", "42"]);
        assert_eq!(bank.words(), &["SEND".to_string(), "MORE".to_string()]);
    }

    #[test]
    fn empty_input_falls_back() {
        let bank = WordBank::from_words(Vec::<String>::new());
        assert_eq!(bank, WordBank::fallback());
        assert_eq!(bank.len(), 5);
    }

    #[test]
    fn quotes_yield_short_unique_words() {
        let bank = WordBank::from_quotes([
            "The quick brown fox, the lazy dog!",
            "A wonderfully extraordinary day",
        ]);
        assert_eq!(
            bank.words(),
            &["THE", "QUICK", "BROWN", "FOX", "LAZY", "DOG", "DAY"]
                .map(String::from)
        );
    }

    #[test]
    fn choose_returns_bank_members() {
        let bank = WordBank::from_words(["ALPHA", "BRAVO"]);
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        for _ in 0..20 {
            let w = bank.choose(&mut rng);
            assert!(w == "ALPHA" || w == "BRAVO");
        }
    }
}
