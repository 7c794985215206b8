//! Complete columnar transposition.

use cipher_core::clean_letters;
use rand::{Rng, RngCore};

use crate::result::TranspositionResult;

/// Shortest and longest generated keys.
const KEY_LEN: std::ops::RangeInclusive<usize> = 3..=7;

/// Column read order: indices of `key` sorted by letter, ties by position.
pub fn column_order(key: &str) -> Vec<usize> {
    let chars: Vec<char> = key.chars().collect();
    let mut order: Vec<usize> = (0..chars.len()).collect();
    order.sort_by_key(|&i| chars[i]);
    order
}

/// Writes `text` row-wise under `key` (padding with `X`) and reads the
/// columns back in [`column_order`].
pub fn encrypt_with_key(text: &str, key: &str) -> String {
    let cols = key.chars().count();
    if cols == 0 {
        return String::new();
    }
    let mut letters: Vec<char> = clean_letters(text).chars().collect();
    let rows = letters.len().div_ceil(cols);
    letters.resize(rows * cols, 'X');

    let mut out = String::with_capacity(letters.len());
    for col in column_order(key) {
        for row in 0..rows {
            out.push(letters[row * cols + col]);
        }
    }
    out
}

/// Inverse of [`encrypt_with_key`]. Padding is kept.
pub fn decrypt_with_key(cipher: &str, key: &str) -> String {
    let cols = key.chars().count();
    let letters: Vec<char> = cipher.chars().filter(|c| !c.is_whitespace()).collect();
    if cols == 0 || letters.len() % cols != 0 {
        return String::new();
    }
    let rows = letters.len() / cols;
    let mut grid = vec!['X'; letters.len()];
    for (n, col) in column_order(key).into_iter().enumerate() {
        for row in 0..rows {
            grid[row * cols + col] = letters[n * rows + row];
        }
    }
    grid.into_iter().collect()
}

/// Columnar transposition under a random key of 3 to 7 letters.
pub fn encrypt<R: RngCore>(rng: &mut R, text: &str) -> TranspositionResult {
    let len = rng.gen_range(KEY_LEN);
    let key: String = (0..len)
        .map(|_| (b'A' + rng.gen_range(0..26u8)) as char)
        .collect();
    TranspositionResult {
        encrypted_text: encrypt_with_key(text, &key),
        key,
    }
}
