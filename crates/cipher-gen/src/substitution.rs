//! Monoalphabetic substitutions: keyed and random aristocrats/patristocrats,
//! xenocrypts, Caesar, Atbash and Affine.

use cipher_core::{clean_letters, mod26, normalize_spanish, Alphabet, Language, COPRIME_WITH_26};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::blocks::chunk;
use crate::result::{AffineResult, KeyVariant, ShiftResult, SubstitutionResult};
use crate::word_bank::WordBank;

/// Patristocrat group width.
const PATRISTOCRAT_GROUP: usize = 5;

/// Zips a plain and a cipher alphabet into a key written in standard order:
/// position `i` holds the cipher letter for the `i`-th standard letter.
pub fn key_from_alphabets(plain: &Alphabet, cipher: &Alphabet, language: Language) -> Alphabet {
    let standard = Alphabet::standard(language);
    let mut key = vec![' '; standard.len()];
    for (p, c) in plain.letters().iter().zip(cipher.letters()) {
        if let Some(i) = standard.index_of(*p) {
            key[i] = *c;
        }
    }
    Alphabet::from_letters(key, language).unwrap_or(standard)
}

/// Key for a K1/K2/K3 alphabet pair derived from `keyword`.
///
/// K3 rotates the cipher alphabet by one so no letter maps to itself.
/// Returns `None` for the random and Atbash variants, which take no keyword.
pub fn keyed_key(variant: KeyVariant, keyword: &str, language: Language) -> Option<Alphabet> {
    let keyed = Alphabet::keyed(keyword, language);
    let standard = Alphabet::standard(language);
    match variant {
        KeyVariant::K1 => Some(key_from_alphabets(&keyed, &standard, language)),
        KeyVariant::K2 => Some(key_from_alphabets(&standard, &keyed, language)),
        KeyVariant::K3 => Some(key_from_alphabets(&keyed, &keyed.rotated(1), language)),
        KeyVariant::Random | KeyVariant::Atbash => None,
    }
}

/// Uniformly random permutation of the alphabet. Self-mappings are allowed.
pub fn random_key<R: RngCore>(rng: &mut R, language: Language) -> Alphabet {
    let mut letters = Alphabet::standard(language).letters().to_vec();
    letters.shuffle(rng);
    Alphabet::from_letters(letters, language).unwrap_or_else(|| Alphabet::standard(language))
}

/// Mirror alphabet `ZYX…A`.
pub fn atbash_key() -> Alphabet {
    let mut letters = Alphabet::standard(Language::Latin).letters().to_vec();
    letters.reverse();
    Alphabet::from_letters(letters, Language::Latin)
        .unwrap_or_else(|| Alphabet::standard(Language::Latin))
}

/// Applies `key` to every letter of `text`, keeping word boundaries and
/// punctuation. Spanish text is accent-folded first.
pub fn substitute(text: &str, key: &Alphabet, language: Language) -> String {
    let standard = Alphabet::standard(language);
    let upper: String = match language {
        Language::Latin => text.chars().flat_map(char::to_uppercase).collect(),
        Language::Spanish => normalize_spanish(text),
    };
    upper
        .chars()
        .map(|c| {
            standard
                .index_of(c)
                .and_then(|i| key.get(i))
                .unwrap_or(c)
        })
        .collect()
}

/// Strips everything but A–Z, substitutes, and regroups into fives.
pub fn substitute_grouped(text: &str, key: &Alphabet) -> String {
    let letters = substitute(&clean_letters(text), key, Language::Latin);
    chunk(&letters, PATRISTOCRAT_GROUP)
}

fn build(
    text: &str,
    key: Alphabet,
    keyword: Option<String>,
    variant: KeyVariant,
    language: Language,
    grouped: bool,
) -> SubstitutionResult {
    let encrypted_text = if grouped {
        substitute_grouped(text, &key)
    } else {
        substitute(text, &key, language)
    };
    SubstitutionResult {
        encrypted_text,
        key: key.to_string(),
        keyword,
        variant,
        language,
        grouped,
    }
}

/// K1/K2/K3 substitution with a keyword drawn from `bank`.
///
/// The random and Atbash variants are delegated to their own encoders.
pub fn encrypt_keyed<R: RngCore>(
    rng: &mut R,
    text: &str,
    bank: &WordBank,
    variant: KeyVariant,
    language: Language,
    grouped: bool,
) -> SubstitutionResult {
    let keyword = bank.choose(rng).to_string();
    match (keyed_key(variant, &keyword, language), variant) {
        (Some(key), _) => build(text, key, Some(keyword), variant, language, grouped),
        (None, KeyVariant::Atbash) => encrypt_atbash(text),
        (None, _) => encrypt_random(rng, text, language, grouped),
    }
}

/// Random-alphabet substitution.
pub fn encrypt_random<R: RngCore>(
    rng: &mut R,
    text: &str,
    language: Language,
    grouped: bool,
) -> SubstitutionResult {
    let key = random_key(rng, language);
    build(text, key, None, KeyVariant::Random, language, grouped)
}

/// Atbash; involves no randomness.
pub fn encrypt_atbash(text: &str) -> SubstitutionResult {
    build(
        text,
        atbash_key(),
        None,
        KeyVariant::Atbash,
        Language::Latin,
        false,
    )
}

/// Shifts every Latin letter of `text` by `shift` (which may be negative).
pub fn shift_text(text: &str, shift: i32) -> String {
    let shift = mod26(shift);
    map_letters(text, |p| p + shift)
}

/// Caesar with a shift drawn uniformly from `1..=25`.
pub fn encrypt_caesar<R: RngCore>(rng: &mut R, text: &str) -> ShiftResult {
    let shift = rng.gen_range(1..=25);
    ShiftResult {
        encrypted_text: shift_text(text, shift),
        shift,
    }
}

/// Applies `c = a·p + b (mod 26)` to every Latin letter.
pub fn affine_text(text: &str, a: i32, b: i32) -> String {
    let (a, b) = (mod26(a), mod26(b));
    map_letters(text, |p| a * p + b)
}

/// Affine with `a` drawn from the residues coprime with 26 and `b` from `0..26`.
pub fn encrypt_affine<R: RngCore>(rng: &mut R, text: &str) -> AffineResult {
    let a = COPRIME_WITH_26[rng.gen_range(0..COPRIME_WITH_26.len())];
    let b = rng.gen_range(0..26);
    AffineResult {
        encrypted_text: affine_text(text, a, b),
        a,
        b,
    }
}

fn map_letters(text: &str, f: impl Fn(i32) -> i32) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .map(|c| {
            if c.is_ascii_uppercase() {
                let p = i32::from(c as u8 - b'A');
                char::from(b'A' + mod26(f(p)) as u8)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn invert(key: &Alphabet, language: Language) -> Alphabet {
        key_from_alphabets(key, &Alphabet::standard(language), language)
    }

    #[test]
    fn extreme_shift_and_affine_parameters_reduce() {
        assert_eq!(shift_text("HELLO", i32::MIN), shift_text("HELLO", mod26(i32::MIN)));
        assert_eq!(shift_text("HELLO", i32::MAX), shift_text("HELLO", mod26(i32::MAX)));
        assert_eq!(
            affine_text("HELLO", i32::MAX, i32::MIN),
            affine_text("HELLO", mod26(i32::MAX), mod26(i32::MIN))
        );
    }

    #[test]
    fn caesar_known_vector() {
        assert_eq!(shift_text("HELLO", 3), "KHOOR");
        assert_eq!(shift_text("KHOOR", mod26(-3)), "HELLO");
        assert_eq!(shift_text("Hi, you!", 1), "IJ, ZPV!");
    }

    #[test]
    fn atbash_known_vector() {
        for _ in 0..3 {
            assert_eq!(encrypt_atbash("HELLO").encrypted_text, "SVOOL");
        }
        assert_eq!(encrypt_atbash("hello").key, "ZYXWVUTSRQPONMLKJIHGFEDCBA");
    }

    #[test]
    fn affine_identity_and_known_value() {
        assert_eq!(affine_text("ABC", 1, 0), "ABC");
        // a=5, b=8: A→I, B→N, C→S
        assert_eq!(affine_text("ABC", 5, 8), "INS");
    }

    #[test]
    fn affine_draws_coprime_multiplier() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        for _ in 0..100 {
            let result = encrypt_affine(&mut rng, "SAMPLE");
            assert!(COPRIME_WITH_26.contains(&result.a));
            assert!((0..26).contains(&result.b));
        }
    }

    #[test]
    fn caesar_shift_in_range() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        for _ in 0..200 {
            let result = encrypt_caesar(&mut rng, "X");
            assert!((1..=25).contains(&result.shift));
        }
    }

    #[test]
    fn k1_maps_keyed_plain_onto_standard_cipher() {
        // Keyed plain alphabet PUZLEABCD… against ABCDE…: P→A, U→B, Z→C.
        let key = keyed_key(KeyVariant::K1, "PUZZLE", Language::Latin).unwrap();
        assert_eq!(substitute("PUZ", &key, Language::Latin), "ABC");
    }

    #[test]
    fn keyless_variants_have_no_keyed_key() {
        assert_eq!(keyed_key(KeyVariant::Random, "PUZZLE", Language::Latin), None);
        assert_eq!(keyed_key(KeyVariant::Atbash, "PUZZLE", Language::Latin), None);
    }

    #[test]
    fn keyed_encoder_delegates_keyless_variants() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        let bank = WordBank::fallback();
        let atbash = encrypt_keyed(
            &mut rng,
            "HELLO",
            &bank,
            KeyVariant::Atbash,
            Language::Latin,
            false,
        );
        assert_eq!(atbash.encrypted_text, "SVOOL");
        assert_eq!(atbash.keyword, None);
        let random = encrypt_keyed(
            &mut rng,
            "HELLO",
            &bank,
            KeyVariant::Random,
            Language::Latin,
            false,
        );
        assert_eq!(random.variant, KeyVariant::Random);
        assert_eq!(random.keyword, None);
    }

    #[test]
    fn k2_maps_standard_plain_onto_keyed_cipher() {
        let key = keyed_key(KeyVariant::K2, "PUZZLE", Language::Latin).unwrap();
        assert_eq!(substitute("ABC", &key, Language::Latin), "PUZ");
    }

    #[test]
    fn k3_never_maps_a_letter_to_itself() {
        for keyword in ["PUZZLE", "SECRET", "CIPHER", "KEYWORD", "Z"] {
            for language in [Language::Latin, Language::Spanish] {
                let key = keyed_key(KeyVariant::K3, keyword, language).unwrap();
                let standard = Alphabet::standard(language);
                for (p, c) in standard.letters().iter().zip(key.letters()) {
                    assert_ne!(p, c, "{keyword}: {p} maps to itself");
                }
            }
        }
    }

    #[test]
    fn keys_are_bijections_and_decrypt_back() {
        let mut rng = ChaCha20Rng::from_seed([5u8; 32]);
        let bank = WordBank::fallback();
        let text = "Whatever you are, be a good one.";
        for variant in [KeyVariant::K1, KeyVariant::K2, KeyVariant::K3] {
            for _ in 0..16 {
                let result = encrypt_keyed(&mut rng, text, &bank, variant, Language::Latin, false);
                let distinct: HashSet<char> = result.key.chars().collect();
                assert_eq!(distinct.len(), 26);
                let key = Alphabet::from_letters(result.key.chars().collect(), Language::Latin)
                    .expect("permutation");
                let back = substitute(&result.encrypted_text, &invert(&key, Language::Latin), Language::Latin);
                assert_eq!(back, text.to_uppercase());
            }
        }
    }

    #[test]
    fn random_patristocrat_groups_in_fives() {
        let mut rng = ChaCha20Rng::from_seed([6u8; 32]);
        let result = encrypt_random(&mut rng, "Be the change you wish to see.", Language::Latin, true);
        let groups: Vec<&str> = result.encrypted_text.split(' ').collect();
        assert_eq!(groups.len(), 5);
        assert!(groups[..4].iter().all(|g| g.len() == 5));
        assert_eq!(groups[4].len(), 3);
        assert!(result.grouped);
    }

    #[test]
    fn xenocrypt_covers_enye_and_folds_accents() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let result = encrypt_random(&mut rng, "Mañana será", Language::Spanish, false);
        assert_eq!(result.key.chars().count(), 27);
        let key = Alphabet::from_letters(result.key.chars().collect(), Language::Spanish)
            .expect("permutation");
        let back = substitute(
            &result.encrypted_text,
            &invert(&key, Language::Spanish),
            Language::Spanish,
        );
        assert_eq!(back, "MAÑANA SERA");
    }

    #[test]
    fn spanish_k1_appends_enye_to_plain_alphabet() {
        // Keyed plain alphabet ends with Ñ and sits against the standard
        // Spanish cipher alphabet, whose 27th letter is Z.
        let key = keyed_key(KeyVariant::K1, "SECRET", Language::Spanish).unwrap();
        assert_eq!(substitute("Ñ", &key, Language::Spanish), "Z");
    }
}
