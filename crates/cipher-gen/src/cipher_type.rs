//! The catalogue of puzzle kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Every puzzle kind the generator can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherType {
    /// Keyed plain alphabet, standard cipher alphabet.
    K1Aristocrat,
    /// Standard plain alphabet, keyed cipher alphabet.
    K2Aristocrat,
    /// Both alphabets keyed, cipher side rotated by one.
    K3Aristocrat,
    /// K1 with word boundaries removed.
    K1Patristocrat,
    /// K2 with word boundaries removed.
    K2Patristocrat,
    /// K3 with word boundaries removed.
    K3Patristocrat,
    /// Uniformly random substitution.
    RandomAristocrat,
    /// Random substitution with word boundaries removed.
    RandomPatristocrat,
    /// Spanish K1.
    K1Xenocrypt,
    /// Spanish K2.
    K2Xenocrypt,
    /// Spanish K3.
    K3Xenocrypt,
    /// Spanish random substitution.
    RandomXenocrypt,
    /// Shift cipher.
    Caesar,
    /// Mirror alphabet.
    Atbash,
    /// `c = a·p + b (mod 26)`.
    Affine,
    /// Hill cipher with a 2×2 key matrix.
    Hill2x2,
    /// Hill cipher with a 3×3 key matrix.
    Hill3x3,
    /// Reciprocal Porta table cipher.
    Porta,
    /// Five-bit binary letter patterns.
    Baconian,
    /// Polybius running-key addition.
    Nihilist,
    /// Straddling checkerboard.
    Checkerboard,
    /// Morse triplets substituted by letters.
    FractionatedMorse,
    /// Keyword columnar transposition.
    CompleteColumnar,
    /// Word arithmetic puzzle.
    Cryptarithm,
}

impl CipherType {
    /// All cipher types in catalogue order.
    pub const ALL: [CipherType; 24] = [
        CipherType::K1Aristocrat,
        CipherType::K2Aristocrat,
        CipherType::K3Aristocrat,
        CipherType::K1Patristocrat,
        CipherType::K2Patristocrat,
        CipherType::K3Patristocrat,
        CipherType::RandomAristocrat,
        CipherType::RandomPatristocrat,
        CipherType::K1Xenocrypt,
        CipherType::K2Xenocrypt,
        CipherType::K3Xenocrypt,
        CipherType::RandomXenocrypt,
        CipherType::Caesar,
        CipherType::Atbash,
        CipherType::Affine,
        CipherType::Hill2x2,
        CipherType::Hill3x3,
        CipherType::Porta,
        CipherType::Baconian,
        CipherType::Nihilist,
        CipherType::Checkerboard,
        CipherType::FractionatedMorse,
        CipherType::CompleteColumnar,
        CipherType::Cryptarithm,
    ];

    /// Human-readable name, e.g. `"K1 Aristocrat"`.
    pub const fn name(self) -> &'static str {
        match self {
            CipherType::K1Aristocrat => "K1 Aristocrat",
            CipherType::K2Aristocrat => "K2 Aristocrat",
            CipherType::K3Aristocrat => "K3 Aristocrat",
            CipherType::K1Patristocrat => "K1 Patristocrat",
            CipherType::K2Patristocrat => "K2 Patristocrat",
            CipherType::K3Patristocrat => "K3 Patristocrat",
            CipherType::RandomAristocrat => "Random Aristocrat",
            CipherType::RandomPatristocrat => "Random Patristocrat",
            CipherType::K1Xenocrypt => "K1 Xenocrypt",
            CipherType::K2Xenocrypt => "K2 Xenocrypt",
            CipherType::K3Xenocrypt => "K3 Xenocrypt",
            CipherType::RandomXenocrypt => "Random Xenocrypt",
            CipherType::Caesar => "Caesar",
            CipherType::Atbash => "Atbash",
            CipherType::Affine => "Affine",
            CipherType::Hill2x2 => "Hill 2x2",
            CipherType::Hill3x3 => "Hill 3x3",
            CipherType::Porta => "Porta",
            CipherType::Baconian => "Baconian",
            CipherType::Nihilist => "Nihilist",
            CipherType::Checkerboard => "Checkerboard",
            CipherType::FractionatedMorse => "Fractionated Morse",
            CipherType::CompleteColumnar => "Complete Columnar",
            CipherType::Cryptarithm => "Cryptarithm",
        }
    }

    /// Kebab-case identifier, e.g. `"k1-aristocrat"`.
    pub fn slug(self) -> String {
        self.name().to_ascii_lowercase().replace(' ', "-")
    }

    /// True for the Spanish-language substitution variants.
    pub const fn is_xenocrypt(self) -> bool {
        matches!(
            self,
            CipherType::K1Xenocrypt
                | CipherType::K2Xenocrypt
                | CipherType::K3Xenocrypt
                | CipherType::RandomXenocrypt
        )
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherType {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        CipherType::ALL
            .into_iter()
            .find(|cipher| cipher.slug() == wanted)
            .ok_or_else(|| GenerateError::UnknownCipher(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_slugs_parse_back() {
        for cipher in CipherType::ALL {
            assert_eq!(cipher.name().parse::<CipherType>(), Ok(cipher));
            assert_eq!(cipher.slug().parse::<CipherType>(), Ok(cipher));
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("hill_3X3".parse::<CipherType>(), Ok(CipherType::Hill3x3));
        assert_eq!(
            " fractionated morse ".parse::<CipherType>(),
            Ok(CipherType::FractionatedMorse)
        );
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            "Vigenere".parse::<CipherType>(),
            Err(GenerateError::UnknownCipher("Vigenere".into()))
        );
    }

    #[test]
    fn only_spanish_variants_are_xenocrypts() {
        let count = CipherType::ALL.iter().filter(|c| c.is_xenocrypt()).count();
        assert_eq!(count, 4);
    }
}
