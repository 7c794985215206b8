//! Keyed Polybius square and the Nihilist running-key cipher.

use cipher_core::{clean_letters, Alphabet, Language};
use rand::RngCore;

use crate::blocks::{draw_block_size, group_tokens};
use crate::result::PolybiusResult;
use crate::word_bank::WordBank;

/// Separator between Nihilist blocks.
const BLOCK_SEPARATOR: &str = "  ";

/// 5×5 square filled with the keyed alphabet in row-major order.
///
/// I and J are not merged: the 26th letter of the keyed alphabet does not fit
/// and is reported as the overflow letter, with coordinate `00`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolybiusSquare {
    cells: [char; 25],
    overflow: char,
}

impl PolybiusSquare {
    /// Builds the square for `keyword`.
    pub fn keyed(keyword: &str) -> Self {
        let alphabet = Alphabet::keyed(keyword, Language::Latin);
        let mut cells = [' '; 25];
        for (cell, &c) in cells.iter_mut().zip(alphabet.letters()) {
            *cell = c;
        }
        let overflow = alphabet.get(25).unwrap_or('Z');
        Self { cells, overflow }
    }

    /// Two-digit coordinate `row·10 + col` (both 1–5), or 0 for the overflow letter.
    pub fn coordinates(&self, letter: char) -> u32 {
        self.cells
            .iter()
            .position(|&c| c == letter)
            .map(|i| (i / 5 + 1) as u32 * 10 + (i % 5 + 1) as u32)
            .unwrap_or(0)
    }

    /// Letter at a coordinate; 0 decodes to the overflow letter.
    pub fn letter_at(&self, coordinate: u32) -> Option<char> {
        if coordinate == 0 {
            return Some(self.overflow);
        }
        let (row, col) = (coordinate / 10, coordinate % 10);
        if !(1..=5).contains(&row) || !(1..=5).contains(&col) {
            return None;
        }
        Some(self.cells[((row - 1) * 5 + (col - 1)) as usize])
    }

    /// The letter left out of the square.
    pub fn overflow(&self) -> char {
        self.overflow
    }

    /// Rows of the square, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(5)
    }
}

/// Coordinates of every letter of `word` under `square`.
pub fn coordinates_of(square: &PolybiusSquare, word: &str) -> Vec<u32> {
    clean_letters(word)
        .chars()
        .map(|c| square.coordinates(c))
        .collect()
}

/// Nihilist sums: plaintext coordinate plus the repeating key coordinate.
/// No modulo is applied, so sums may exceed two digits.
pub fn nihilist_numbers(text: &str, polybius_key: &str, cipher_key: &str) -> Vec<u32> {
    let square = PolybiusSquare::keyed(polybius_key);
    let key = coordinates_of(&square, cipher_key);
    if key.is_empty() {
        return coordinates_of(&square, text);
    }
    coordinates_of(&square, text)
        .into_iter()
        .enumerate()
        .map(|(i, p)| p + key[i % key.len()])
        .collect()
}

/// Nihilist with both keywords drawn from `bank`, grouped into weighted blocks.
pub fn encrypt<R: RngCore>(
    rng: &mut R,
    text: &str,
    bank: &WordBank,
    block_sizes: &[usize],
) -> PolybiusResult {
    let polybius_key = bank.choose(rng).to_string();
    let cipher_key = bank.choose(rng).to_string();
    let block = draw_block_size(rng, block_sizes);
    let numbers: Vec<String> = nihilist_numbers(text, &polybius_key, &cipher_key)
        .iter()
        .map(u32::to_string)
        .collect();
    PolybiusResult {
        encrypted_text: group_tokens(&numbers, block, BLOCK_SEPARATOR),
        polybius_key,
        cipher_key,
    }
}
