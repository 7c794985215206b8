//! Baconian cipher: five-bit letter patterns rendered through a scheme.

use cipher_core::{bacon_pattern, clean_letters, LATIN};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::result::{BaconianResult, Glyph, TextStyle};
use crate::schemes::{select_scheme, Render, Scheme};

/// Glyphs per presentation group.
const GROUP: usize = 5;

/// Concatenated `A`/`B` pattern of the cleaned letters of `text`.
pub fn pattern(text: &str) -> String {
    clean_letters(text)
        .chars()
        .filter_map(bacon_pattern)
        .collect()
}

fn random_letter<R: RngCore>(rng: &mut R, letters: &str) -> char {
    let chars: Vec<char> = letters.chars().collect();
    chars.choose(rng).copied().unwrap_or('A')
}

/// Renders an `A`/`B` pattern, one glyph per bit.
pub fn render<R: RngCore>(rng: &mut R, pattern: &str, scheme: &Scheme) -> Vec<Glyph> {
    pattern
        .chars()
        .map(|bit| {
            let one = bit == 'B';
            match scheme.render {
                Render::Direct { zero, one: b } => {
                    let text = if one { b } else { zero };
                    Glyph {
                        text: text.to_string(),
                        style: TextStyle::Plain,
                    }
                }
                Render::Letters { zero, one: b } => {
                    let letters = if one { b } else { zero };
                    Glyph {
                        text: random_letter(rng, letters).to_string(),
                        style: TextStyle::Plain,
                    }
                }
                Render::Set { zero, one: b } => {
                    let set = if one { b } else { zero };
                    Glyph {
                        text: set.choose(rng).copied().unwrap_or_default().to_string(),
                        style: TextStyle::Plain,
                    }
                }
                Render::Formatting { zero, one: b } => {
                    let style = if one { b } else { zero };
                    let letter = LATIN.as_bytes()[rng.gen_range(0..26)] as char;
                    let text = match style {
                        TextStyle::Lowercase => letter.to_ascii_lowercase(),
                        _ => letter,
                    };
                    Glyph {
                        text: text.to_string(),
                        style,
                    }
                }
            }
        })
        .collect()
}

/// Reads the `A`/`B` pattern back out of rendered glyphs.
pub fn read_pattern(glyphs: &[Glyph], scheme: &Scheme) -> Option<String> {
    glyphs
        .iter()
        .map(|g| scheme.classify(g).map(|one| if one { 'B' } else { 'A' }))
        .collect()
}

/// Baconian with a randomly drawn scheme.
pub fn encrypt<R: RngCore>(rng: &mut R, text: &str) -> BaconianResult {
    let scheme = select_scheme(rng);
    encrypt_with_scheme(rng, text, scheme)
}

/// Baconian rendered through a caller-chosen scheme.
pub fn encrypt_with_scheme<R: RngCore>(
    rng: &mut R,
    text: &str,
    scheme: &Scheme,
) -> BaconianResult {
    let glyphs = render(rng, &pattern(text), scheme);
    let encrypted_text = glyphs
        .chunks(GROUP)
        .map(|group| group.iter().map(|g| g.text.as_str()).collect::<String>())
        .collect::<Vec<_>>()
        .join(" ");
    BaconianResult {
        encrypted_text,
        binary_type: scheme.name.to_string(),
        glyphs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::{scheme_named, SCHEMES};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn pattern_is_five_bits_per_letter() {
        assert_eq!(pattern("Hi!"), "AABBBABAAA");
        assert_eq!(pattern("i j"), pattern("II"));
        assert_eq!(pattern("Attack at dawn").len(), 5 * 12);
    }

    #[test]
    fn direct_scheme_matches_pattern() {
        let mut rng = ChaCha20Rng::from_seed([41u8; 32]);
        let scheme = scheme_named("A/B").unwrap();
        let result = encrypt_with_scheme(&mut rng, "HI", scheme);
        assert_eq!(result.encrypted_text, "AABBB ABAAA");
        assert_eq!(result.binary_type, "A/B");
    }

    #[test]
    fn every_scheme_reads_back() {
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
        let text = "Knowledge is power";
        for scheme in SCHEMES {
            let result = encrypt_with_scheme(&mut rng, text, scheme);
            assert_eq!(result.glyphs.len(), pattern(text).len());
            assert_eq!(
                read_pattern(&result.glyphs, scheme).as_deref(),
                Some(pattern(text).as_str()),
                "{}",
                scheme.name
            );
        }
    }

    #[test]
    fn groups_hold_five_glyphs() {
        let mut rng = ChaCha20Rng::from_seed([43u8; 32]);
        let scheme = scheme_named("Fire vs Ice").unwrap();
        let result = encrypt_with_scheme(&mut rng, "ok", scheme);
        assert_eq!(result.encrypted_text.split(' ').count(), 2);
    }

    #[test]
    fn letter_case_follows_style() {
        let mut rng = ChaCha20Rng::from_seed([44u8; 32]);
        let scheme = scheme_named("Uppercase vs Lowercase").unwrap();
        let result = encrypt_with_scheme(&mut rng, "b", scheme);
        // B = AAAAB
        let last = &result.glyphs[4];
        assert_eq!(last.style, TextStyle::Lowercase);
        assert!(last.text.chars().all(|c| c.is_ascii_lowercase()));
        assert!(result.glyphs[0].text.chars().all(|c| c.is_ascii_uppercase()));
    }
}
