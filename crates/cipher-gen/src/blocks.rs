//! Block regrouping for ciphertext presentation.

use rand::seq::SliceRandom;
use rand::RngCore;

/// Default weighted block-size distribution, biased toward five.
pub const DEFAULT_BLOCK_SIZES: [usize; 16] = [3, 3, 4, 4, 4, 5, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6];

/// Draws one block size uniformly from a weighted list (repeats act as weights).
///
/// Falls back to 5 for an empty list; configs are validated before use.
pub fn draw_block_size<R: RngCore>(rng: &mut R, sizes: &[usize]) -> usize {
    sizes.choose(rng).copied().unwrap_or(5)
}

/// Splits `text` into space-separated chunks of `size` characters.
pub fn chunk(text: &str, size: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size.max(1))
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Groups `tokens` `size` at a time; tokens inside a block are joined by a
/// single space and blocks by `separator`.
pub fn group_tokens<T: AsRef<str>>(tokens: &[T], size: usize, separator: &str) -> String {
    tokens
        .chunks(size.max(1))
        .map(|block| {
            block
                .iter()
                .map(|t| t.as_ref())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn chunk_keeps_remainder() {
        assert_eq!(chunk("ABCDEFGHIJKL", 5), "ABCDE FGHIJ KL");
        assert_eq!(chunk("", 5), "");
        assert_eq!(chunk("ÑAB", 2), "ÑA B");
    }

    #[test]
    fn group_tokens_uses_separator_between_blocks() {
        let tokens = ["45", "67", "88", "102", "34"];
        assert_eq!(group_tokens(&tokens, 2, "  "), "45 67  88 102  34");
    }

    #[test]
    fn drawn_sizes_come_from_the_distribution() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let size = draw_block_size(&mut rng, &DEFAULT_BLOCK_SIZES);
            assert!((3..=6).contains(&size));
            seen[size] = true;
        }
        assert!(seen[3] && seen[4] && seen[5] && seen[6]);
    }
}
