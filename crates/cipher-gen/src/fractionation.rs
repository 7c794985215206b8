//! Fractionated Morse.

use std::collections::BTreeMap;

use cipher_core::{morse_code, LATIN};
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::result::FractionationResult;

/// Triplet made only of separators.
pub const SEPARATOR_TRIPLET: &str = "xxx";

/// Morse stream for `text`: `x` after every letter, one extra `x` between
/// words, no `xxx` runs, right-padded to a multiple of three.
pub fn morse_stream(text: &str) -> String {
    let words: Vec<String> = text
        .to_uppercase()
        .split_whitespace()
        .map(|w| w.chars().filter(char::is_ascii_uppercase).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect();

    let mut stream = String::new();
    for (i, word) in words.iter().enumerate() {
        for code in word.chars().filter_map(morse_code) {
            stream.push_str(code);
            stream.push('x');
        }
        if i + 1 < words.len() {
            stream.push('x');
        }
    }
    while stream.contains(SEPARATOR_TRIPLET) {
        stream = stream.replace(SEPARATOR_TRIPLET, "xx");
    }
    while stream.len() % 3 != 0 {
        stream.push('x');
    }
    stream
}

/// Splits a Morse stream into its triplets.
pub fn triplets(stream: &str) -> Vec<&str> {
    (0..stream.len() / 3).map(|i| &stream[i * 3..i * 3 + 3]).collect()
}

/// Fractionated Morse with a fresh letter assignment drawn from `rng`.
///
/// Distinct triplets take the next letter of a shuffled alphabet in order of
/// first appearance. The trailing padding triplet `xxx` is only lettered while
/// letters remain; it never appears in the exposed table or key. When every
/// other triplet has already used up the alphabet, the padding is dropped and
/// the ciphertext is one letter shorter than the triplet count.
pub fn encrypt<R: RngCore>(rng: &mut R, text: &str) -> FractionationResult {
    let stream = morse_stream(text);
    let mut letters: Vec<char> = LATIN.chars().collect();
    letters.shuffle(rng);
    let mut letters = letters.into_iter();

    let mut assigned: Vec<(&str, char)> = Vec::new();
    let mut encrypted_text = String::new();
    for triplet in triplets(&stream) {
        let known = assigned
            .iter()
            .find(|(t, _)| *t == triplet)
            .map(|&(_, letter)| letter);
        let letter = known.or_else(|| {
            let letter = letters.next()?;
            assigned.push((triplet, letter));
            Some(letter)
        });
        if let Some(letter) = letter {
            encrypted_text.push(letter);
        }
    }

    let exposed: Vec<(&str, char)> = assigned
        .into_iter()
        .filter(|(t, _)| !t.contains(SEPARATOR_TRIPLET))
        .collect();
    let key = exposed
        .iter()
        .map(|(t, _)| *t)
        .collect::<Vec<_>>()
        .join("|");
    let fractionation_table: BTreeMap<String, char> = exposed
        .into_iter()
        .map(|(t, c)| (t.to_string(), c))
        .collect();

    FractionationResult {
        encrypted_text,
        key,
        fractionation_table,
    }
}
