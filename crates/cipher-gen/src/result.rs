//! Puzzle results and their serialization helpers.
//!
//! A [`CipherResult`] is created once per generation call and never mutated
//! afterwards. Every variant carries the encrypted text together with the
//! metadata a grader needs to rebuild the exact encoding key.

use std::collections::BTreeMap;

use cipher_core::Language;
use serde::{Deserialize, Serialize};

use crate::matrix::ModMatrix;

/// Which alphabet(s) of a monoalphabetic substitution are keyword-derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyVariant {
    /// Keyed plain alphabet against the standard cipher alphabet.
    K1,
    /// Standard plain alphabet against a keyed cipher alphabet.
    K2,
    /// Same keyed alphabet on both sides, cipher side rotated by one.
    K3,
    /// Uniformly random permutation.
    Random,
    /// Fixed mirror alphabet.
    Atbash,
}

/// Monoalphabetic substitution (aristocrats, patristocrats, xenocrypts, Atbash).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubstitutionResult {
    /// Ciphertext as presented to the solver.
    pub encrypted_text: String,
    /// Cipher letter for each plain letter, in standard alphabet order.
    pub key: String,
    /// Keyword the alphabets were derived from, for K1/K2/K3.
    pub keyword: Option<String>,
    /// How the alphabets were built.
    pub variant: KeyVariant,
    /// Latin (26) or Spanish (27) alphabet.
    pub language: Language,
    /// True when word boundaries were stripped and the text regrouped in fives.
    pub grouped: bool,
}

/// Caesar shift.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResult {
    /// Ciphertext.
    pub encrypted_text: String,
    /// Shift in `1..=25`.
    pub shift: i32,
}

/// Affine cipher `c = a·p + b (mod 26)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffineResult {
    /// Ciphertext.
    pub encrypted_text: String,
    /// Multiplier, coprime with 26.
    pub a: i32,
    /// Offset in `0..26`.
    pub b: i32,
}

/// Hill cipher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixResult {
    /// Ciphertext.
    pub encrypted_text: String,
    /// Encryption matrix.
    pub matrix: ModMatrix,
    /// Pre-computed inverse, only provided for 3×3 puzzles.
    pub decryption_matrix: Option<ModMatrix>,
}

/// Porta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordResult {
    /// Ciphertext, regrouped into blocks.
    pub encrypted_text: String,
    /// Repeating keyword.
    pub keyword: String,
}

/// Nihilist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolybiusResult {
    /// Space-separated numbers, blocks separated by two spaces.
    pub encrypted_text: String,
    /// Keyword of the Polybius square.
    pub polybius_key: String,
    /// Running-key keyword.
    pub cipher_key: String,
}

/// Straddling checkerboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerboardResult {
    /// Unseparated digit string.
    pub encrypted_text: String,
    /// Keyword of the mixed alphabet.
    pub keyword: String,
    /// First row-prefix digit.
    pub r1: u8,
    /// Second row-prefix digit.
    pub r2: u8,
}

/// Fractionated Morse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FractionationResult {
    /// Ciphertext letters.
    pub encrypted_text: String,
    /// Mapped triplets in first-seen order, joined by `|`.
    pub key: String,
    /// Triplet → letter, excluding the all-separator triplet.
    pub fractionation_table: BTreeMap<String, char>,
}

/// Visual styling applied to a rendered Baconian glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextStyle {
    /// No styling.
    Plain,
    /// Underlined.
    Underline,
    /// Bold.
    Bold,
    /// Italic.
    Italic,
    /// Struck through.
    Strikethrough,
    /// Highlighted background.
    Highlight,
    /// Bold and underlined.
    Accented,
    /// Shown in upper case.
    Uppercase,
    /// Shown in lower case.
    Lowercase,
}

/// One rendered Baconian symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// Visible text; emoji may span several `char`s.
    pub text: String,
    /// Styling carried by formatting schemes.
    pub style: TextStyle,
}

/// Baconian.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaconianResult {
    /// Rendered glyph text in groups of five.
    pub encrypted_text: String,
    /// Name of the rendering scheme, e.g. `"A/B"`.
    pub binary_type: String,
    /// Every rendered glyph, ungrouped.
    pub glyphs: Vec<Glyph>,
}

/// Complete columnar transposition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranspositionResult {
    /// Ciphertext.
    pub encrypted_text: String,
    /// Column key.
    pub key: String,
}

/// Arithmetic operator of a cryptarithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// `left + right = result`.
    Add,
    /// `left - right = result`.
    Subtract,
}

impl Operation {
    /// Printable operator symbol.
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }

    /// Applies the operator. Subtraction saturates at zero.
    pub const fn apply(self, left: u64, right: u64) -> u64 {
        match self {
            Operation::Add => left + right,
            Operation::Subtract => left.saturating_sub(right),
        }
    }
}

/// A digit sequence and the word it spells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitGroup {
    /// Space-separated digits.
    pub digits: String,
    /// Space-separated letters.
    pub word: String,
}

/// Cryptarithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptarithmResult {
    /// Prompt shown above the puzzle.
    pub encrypted_text: String,
    /// Vertically formatted equation.
    pub equation: String,
    /// Decode groups: the result word first, then three value words.
    pub digit_groups: Vec<DigitGroup>,
    /// Operator.
    pub operation: Operation,
    /// First operand word.
    pub left: String,
    /// Second operand word.
    pub right: String,
    /// Result word.
    pub result_word: String,
    /// Digit of every letter in the puzzle.
    pub letter_digits: BTreeMap<char, u8>,
    /// True when the equation alone admits exactly one assignment.
    pub unique: bool,
}

/// Output of a single generation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CipherResult {
    /// Monoalphabetic substitution family.
    Substitution(SubstitutionResult),
    /// Caesar.
    Shift(ShiftResult),
    /// Affine.
    Affine(AffineResult),
    /// Hill 2×2 / 3×3.
    Matrix(MatrixResult),
    /// Porta.
    Keyword(KeywordResult),
    /// Nihilist.
    Polybius(PolybiusResult),
    /// Straddling checkerboard.
    Checkerboard(CheckerboardResult),
    /// Fractionated Morse.
    Fractionation(FractionationResult),
    /// Baconian.
    Baconian(BaconianResult),
    /// Complete columnar.
    Transposition(TranspositionResult),
    /// Cryptarithm.
    Cryptarithm(CryptarithmResult),
}

impl CipherResult {
    /// Ciphertext as presented to the solver.
    pub fn encrypted_text(&self) -> &str {
        match self {
            CipherResult::Substitution(r) => &r.encrypted_text,
            CipherResult::Shift(r) => &r.encrypted_text,
            CipherResult::Affine(r) => &r.encrypted_text,
            CipherResult::Matrix(r) => &r.encrypted_text,
            CipherResult::Keyword(r) => &r.encrypted_text,
            CipherResult::Polybius(r) => &r.encrypted_text,
            CipherResult::Checkerboard(r) => &r.encrypted_text,
            CipherResult::Fractionation(r) => &r.encrypted_text,
            CipherResult::Baconian(r) => &r.encrypted_text,
            CipherResult::Transposition(r) => &r.encrypted_text,
            CipherResult::Cryptarithm(r) => &r.encrypted_text,
        }
    }

    /// Serializes the result with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserializes a result with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_roundtrip() {
        let mut table = BTreeMap::new();
        table.insert("..-".to_string(), 'Q');
        table.insert("-x.".to_string(), 'B');
        let result = CipherResult::Fractionation(FractionationResult {
            encrypted_text: "QB".into(),
            key: "..-|-x.".into(),
            fractionation_table: table,
        });
        let bytes = result.to_bytes().expect("serialize");
        let decoded = CipherResult::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, result);
        assert_eq!(decoded.encrypted_text(), "QB");
    }

    #[test]
    fn matrix_result_roundtrip_keeps_missing_inverse() {
        let matrix = ModMatrix::from_rows(vec![vec![3, 3], vec![2, 5]]).expect("square");
        let result = CipherResult::Matrix(MatrixResult {
            encrypted_text: "TC".into(),
            matrix,
            decryption_matrix: None,
        });
        let decoded = CipherResult::from_bytes(&result.to_bytes().unwrap()).unwrap();
        match decoded {
            CipherResult::Matrix(m) => {
                assert_eq!(m.matrix.rows(), &[vec![3, 3], vec![2, 5]]);
                assert!(m.decryption_matrix.is_none());
            }
            other => panic!("unexpected variant {other:?}"),
        }
    }

    #[test]
    fn subtraction_saturates() {
        assert_eq!(Operation::Subtract.apply(3, 5), 0);
        assert_eq!(Operation::Add.apply(3, 5), 8);
        assert_eq!(Operation::Subtract.symbol(), '-');
    }
}
