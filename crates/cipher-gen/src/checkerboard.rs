//! Straddling checkerboard.

use cipher_core::{clean_letters, Alphabet, Language};
use rand::seq::index;
use rand::RngCore;

use crate::result::CheckerboardResult;
use crate::word_bank::WordBank;

/// Board layout: a top row of eight single-digit codes (skipping the columns
/// `r1` and `r2`) and two ten-column rows prefixed by `r1` and `r2`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checkerboard {
    top: [Option<char>; 10],
    row_r1: [Option<char>; 10],
    row_r2: [Option<char>; 10],
    r1: u8,
    r2: u8,
}

impl Checkerboard {
    /// Lays out the keyed alphabet for `keyword` under prefix digits `r1` ≠ `r2`.
    pub fn new(keyword: &str, r1: u8, r2: u8) -> Self {
        let alphabet = Alphabet::keyed(keyword, Language::Latin);
        let mut letters = alphabet.letters().iter().copied();
        let mut top = [None; 10];
        for (col, slot) in top.iter_mut().enumerate() {
            if col as u8 == r1 || col as u8 == r2 {
                continue;
            }
            *slot = letters.next();
        }
        let row_r1 = std::array::from_fn(|_| letters.next());
        let row_r2 = std::array::from_fn(|_| letters.next());
        Self {
            top,
            row_r1,
            row_r2,
            r1,
            r2,
        }
    }

    /// One- or two-digit code for `letter`.
    pub fn code(&self, letter: char) -> Option<String> {
        let find = |row: &[Option<char>; 10]| row.iter().position(|&c| c == Some(letter));
        if let Some(col) = find(&self.top) {
            return Some(col.to_string());
        }
        if let Some(col) = find(&self.row_r1) {
            return Some(format!("{}{}", self.r1, col));
        }
        find(&self.row_r2).map(|col| format!("{}{}", self.r2, col))
    }

    /// Decodes a digit stream; `r1`/`r2` always open a two-digit code.
    pub fn decode(&self, digits: &str) -> Option<String> {
        let mut out = String::new();
        let mut iter = digits.chars().map(|c| c.to_digit(10));
        while let Some(d) = iter.next() {
            let d = d? as u8;
            let letter = if d == self.r1 || d == self.r2 {
                let col = iter.next()?? as usize;
                let row = if d == self.r1 { &self.row_r1 } else { &self.row_r2 };
                row[col]?
            } else {
                self.top[d as usize]?
            };
            out.push(letter);
        }
        Some(out)
    }

    /// Encodes the cleaned letters of `text` into one unseparated digit string.
    pub fn encode(&self, text: &str) -> String {
        clean_letters(text)
            .chars()
            .filter_map(|c| self.code(c))
            .collect()
    }
}

/// Checkerboard with a keyword from `bank` and two distinct random prefix digits.
pub fn encrypt<R: RngCore>(rng: &mut R, text: &str, bank: &WordBank) -> CheckerboardResult {
    let keyword = bank.choose(rng).to_string();
    let picked = index::sample(rng, 10, 2);
    let (r1, r2) = (picked.index(0) as u8, picked.index(1) as u8);
    let board = Checkerboard::new(&keyword, r1, r2);
    CheckerboardResult {
        encrypted_text: board.encode(text),
        keyword,
        r1,
        r2,
    }
}
