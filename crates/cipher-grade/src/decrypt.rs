//! Plaintext reconstruction from result metadata alone.

use std::collections::BTreeMap;

use cipher_core::{
    bacon_letter, mod26, mod_inverse, morse_letter, normalize_spanish, Alphabet, Language,
};
use cipher_gen::baconian::read_pattern;
use cipher_gen::checkerboard::Checkerboard;
use cipher_gen::polybius::{coordinates_of, PolybiusSquare};
use cipher_gen::porta::porta_text;
use cipher_gen::schemes::scheme_named;
use cipher_gen::substitution::{affine_text, shift_text};
use cipher_gen::transposition::decrypt_with_key;
use cipher_gen::{
    AffineResult, BaconianResult, CheckerboardResult, CipherResult, CryptarithmResult,
    FractionationResult, MatrixResult, PolybiusResult, SubstitutionResult,
};

use crate::error::{malformed, GradeError, GradeResult};

/// Recovers the cleaned plaintext of `result`.
///
/// Hill and columnar output keeps its `X` padding, Baconian folds J onto I and
/// V onto U, Fractionated Morse and every grouped cipher lose word breaks.
/// For a cryptarithm the decoded digit-group words are returned, space-separated.
pub fn decrypt(result: &CipherResult) -> GradeResult<String> {
    match result {
        CipherResult::Substitution(r) => decrypt_substitution(r),
        CipherResult::Shift(r) => Ok(letters_only(&shift_text(
            &r.encrypted_text,
            -mod26(r.shift),
        ))),
        CipherResult::Affine(r) => decrypt_affine(r),
        CipherResult::Matrix(r) => decrypt_matrix(r),
        CipherResult::Keyword(r) => Ok(porta_text(&r.encrypted_text, &r.keyword)),
        CipherResult::Polybius(r) => decrypt_nihilist(r),
        CipherResult::Checkerboard(r) => decrypt_checkerboard(r),
        CipherResult::Fractionation(r) => decrypt_fractionation(r),
        CipherResult::Baconian(r) => decrypt_baconian(r),
        CipherResult::Transposition(r) => Ok(decrypt_with_key(&r.encrypted_text, &r.key)),
        CipherResult::Cryptarithm(r) => decrypt_cryptarithm(r),
    }
}

/// Cipher letter → plain letter for every monoalphabetic result.
pub fn cipher_to_plain(result: &CipherResult) -> Option<BTreeMap<char, char>> {
    let latin = Alphabet::standard(Language::Latin);
    match result {
        CipherResult::Substitution(r) => {
            let standard = Alphabet::standard(r.language);
            let key: Vec<char> = r.key.chars().collect();
            if key.len() != standard.len() {
                return None;
            }
            Some(key.into_iter().zip(standard.letters().iter().copied()).collect())
        }
        CipherResult::Shift(r) => Some(
            latin
                .letters()
                .iter()
                .map(|&p| (shifted(p, mod26(r.shift)), p))
                .collect(),
        ),
        CipherResult::Affine(r) => Some(
            latin
                .letters()
                .iter()
                .map(|&p| {
                    let c = affine_text(&p.to_string(), r.a, r.b);
                    (c.chars().next().unwrap_or(p), p)
                })
                .collect(),
        ),
        _ => None,
    }
}

fn shifted(letter: char, shift: i32) -> char {
    let p = i32::from(letter as u8 - b'A');
    (b'A' + mod26(p + shift) as u8) as char
}

fn letters_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_uppercase).collect()
}

fn decrypt_substitution(r: &SubstitutionResult) -> GradeResult<String> {
    let map = cipher_to_plain(&CipherResult::Substitution(r.clone()))
        .ok_or_else(|| malformed(format!("substitution key has {} letters", r.key.chars().count())))?;
    let text = match r.language {
        Language::Latin => r.encrypted_text.to_uppercase(),
        Language::Spanish => normalize_spanish(&r.encrypted_text),
    };
    Ok(text.chars().filter_map(|c| map.get(&c).copied()).collect())
}

fn decrypt_affine(r: &AffineResult) -> GradeResult<String> {
    let inverse = mod_inverse(r.a).ok_or_else(|| malformed(format!("a = {} has no inverse", r.a)))?;
    let b = mod26(r.b);
    Ok(r.encrypted_text
        .chars()
        .filter(char::is_ascii_uppercase)
        .map(|c| {
            let y = i32::from(c as u8 - b'A');
            (b'A' + mod26(inverse * (y - b)) as u8) as char
        })
        .collect())
}

fn decrypt_matrix(r: &MatrixResult) -> GradeResult<String> {
    let inverse = match &r.decryption_matrix {
        Some(m) => m.clone(),
        None => r
            .matrix
            .invert()
            .ok_or_else(|| malformed("hill matrix is singular"))?,
    };
    let n = inverse.size();
    if n == 0 {
        return Err(malformed("hill matrix is empty"));
    }
    let values: Vec<i32> = letters_only(&r.encrypted_text)
        .bytes()
        .map(|b| i32::from(b - b'A'))
        .collect();
    if values.len() % n != 0 {
        return Err(malformed("hill ciphertext is not a whole number of blocks"));
    }
    Ok(values
        .chunks(n)
        .flat_map(|block| inverse.apply(block))
        .map(|v| (b'A' + v as u8) as char)
        .collect())
}

fn decrypt_nihilist(r: &PolybiusResult) -> GradeResult<String> {
    let square = PolybiusSquare::keyed(&r.polybius_key);
    let key = coordinates_of(&square, &r.cipher_key);
    let numbers = r
        .encrypted_text
        .split_whitespace()
        .map(|n| n.parse::<u32>().map_err(|_| malformed(format!("bad number {n:?}"))))
        .collect::<GradeResult<Vec<u32>>>()?;
    numbers
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let k = if key.is_empty() { 0 } else { key[i % key.len()] };
            n.checked_sub(k)
                .and_then(|p| square.letter_at(p))
                .ok_or_else(|| malformed(format!("{n} does not decode under the key")))
        })
        .collect()
}

fn decrypt_checkerboard(r: &CheckerboardResult) -> GradeResult<String> {
    if r.r1 == r.r2 || r.r1 > 9 || r.r2 > 9 {
        return Err(malformed("checkerboard prefix digits must be distinct digits"));
    }
    Checkerboard::new(&r.keyword, r.r1, r.r2)
        .decode(&r.encrypted_text)
        .ok_or_else(|| malformed("checkerboard digits do not decode"))
}

fn decrypt_fractionation(r: &FractionationResult) -> GradeResult<String> {
    let reverse: BTreeMap<char, &str> = r
        .fractionation_table
        .iter()
        .map(|(t, &c)| (c, t.as_str()))
        .collect();
    // Letters absent from the table stand for the separator triplet.
    let stream: String = r
        .encrypted_text
        .chars()
        .map(|c| reverse.get(&c).copied().unwrap_or("xxx"))
        .collect();
    stream
        .split('x')
        .filter(|code| !code.is_empty())
        .map(|code| morse_letter(code).ok_or_else(|| malformed(format!("bad morse {code:?}"))))
        .collect()
}

fn decrypt_baconian(r: &BaconianResult) -> GradeResult<String> {
    let scheme =
        scheme_named(&r.binary_type).ok_or_else(|| GradeError::UnknownScheme(r.binary_type.clone()))?;
    let pattern = read_pattern(&r.glyphs, scheme)
        .ok_or_else(|| malformed("glyph does not belong to the scheme"))?;
    if pattern.len() % 5 != 0 {
        return Err(malformed("baconian pattern is not a multiple of five"));
    }
    pattern
        .as_bytes()
        .chunks(5)
        .map(|group| {
            let group = std::str::from_utf8(group).unwrap_or_default();
            bacon_letter(group).ok_or_else(|| malformed(format!("bad pattern {group:?}")))
        })
        .collect()
}

fn decrypt_cryptarithm(r: &CryptarithmResult) -> GradeResult<String> {
    let by_digit: BTreeMap<u8, char> = r.letter_digits.iter().map(|(&l, &d)| (d, l)).collect();
    let words = r
        .digit_groups
        .iter()
        .map(|group| {
            group
                .digits
                .split_whitespace()
                .map(|d| {
                    d.parse::<u8>()
                        .ok()
                        .and_then(|d| by_digit.get(&d).copied())
                        .ok_or_else(|| malformed(format!("digit {d:?} has no letter")))
                })
                .collect::<GradeResult<String>>()
        })
        .collect::<GradeResult<Vec<String>>>()?;
    Ok(words.join(" "))
}
