//! Porta: a reciprocal cipher over thirteen keyed half-alphabet rows.

use cipher_core::clean_letters;
use rand::RngCore;

use crate::blocks::{chunk, draw_block_size};
use crate::result::KeywordResult;
use crate::word_bank::WordBank;

/// Enciphers one upper-case letter under one keyword letter.
///
/// The keyword letter selects row `k` (AB → 0, CD → 1, …, YZ → 12). Row `k`
/// sends `A..=M` to `N..=Z` shifted by `k` and is its own inverse.
pub fn porta_letter(plain: char, key: char) -> char {
    if !plain.is_ascii_uppercase() || !key.is_ascii_uppercase() {
        return plain;
    }
    let k = i32::from((key as u8 - b'A') / 2);
    let p = i32::from(plain as u8 - b'A');
    let c = if p < 13 {
        13 + (p + k) % 13
    } else {
        (p - 13 - k).rem_euclid(13)
    };
    char::from(b'A' + c as u8)
}

/// Applies Porta to the cleaned letters of `text`, cycling through `keyword`.
pub fn porta_text(text: &str, keyword: &str) -> String {
    let key: Vec<char> = clean_letters(keyword).chars().collect();
    if key.is_empty() {
        return clean_letters(text);
    }
    clean_letters(text)
        .chars()
        .enumerate()
        .map(|(i, c)| porta_letter(c, key[i % key.len()]))
        .collect()
}

/// Porta with a keyword drawn from `bank`, regrouped into weighted blocks.
pub fn encrypt<R: RngCore>(
    rng: &mut R,
    text: &str,
    bank: &WordBank,
    block_sizes: &[usize],
) -> KeywordResult {
    let keyword = bank.choose(rng).to_string();
    let block = draw_block_size(rng, block_sizes);
    KeywordResult {
        encrypted_text: chunk(&porta_text(text, &keyword), block),
        keyword,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn first_row_swaps_halves() {
        assert_eq!(porta_letter('A', 'A'), 'N');
        assert_eq!(porta_letter('N', 'B'), 'A');
        assert_eq!(porta_letter('M', 'A'), 'Z');
    }

    #[test]
    fn matches_published_rows() {
        // Row CD: OPQRSTUVWXYZN / ABCDEFGHIJKLM
        assert_eq!(porta_letter('A', 'C'), 'O');
        assert_eq!(porta_letter('N', 'D'), 'M');
        // Row YZ: ZNOPQRSTUVWXY
        assert_eq!(porta_letter('A', 'Z'), 'Z');
        assert_eq!(porta_letter('B', 'Y'), 'N');
    }

    #[test]
    fn porta_is_reciprocal() {
        let ciphertext = porta_text("Defend the east wall", "CIPHER");
        assert_eq!(porta_text(&ciphertext, "CIPHER"), "DEFENDTHEEASTWALL");
    }

    #[test]
    fn encrypt_groups_with_drawn_block() {
        let mut rng = ChaCha20Rng::from_seed([11u8; 32]);
        let bank = WordBank::fallback();
        let result = encrypt(&mut rng, "Defend the east wall", &bank, &[4]);
        assert_eq!(result.encrypted_text.split(' ').count(), 5);
        let joined = result.encrypted_text.replace(' ', "");
        assert_eq!(porta_text(&joined, &result.keyword), "DEFENDTHEEASTWALL");
    }
}
