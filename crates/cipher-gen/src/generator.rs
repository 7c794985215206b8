//! Cipher-type dispatch.

use cipher_core::Language;
use rand::RngCore;
use tracing::trace;

use crate::cipher_type::CipherType;
use crate::config::GeneratorConfig;
use crate::error::GenerateResult;
use crate::result::{CipherResult, KeyVariant};
use crate::word_bank::WordBank;
use crate::{
    baconian, checkerboard, cryptarithm, fractionation, hill, polybius, porta, substitution,
    transposition,
};

/// Puzzle generator parametrized by an RNG.
pub struct Generator<R: RngCore> {
    rng: R,
    config: GeneratorConfig,
    words: WordBank,
}

impl<R: RngCore> Generator<R> {
    /// Creates a generator with the default configuration and fallback words.
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, GeneratorConfig::default())
    }

    /// Creates a generator with explicit configuration.
    pub fn with_config(rng: R, config: GeneratorConfig) -> Self {
        Self {
            rng,
            config,
            words: WordBank::fallback(),
        }
    }

    /// Replaces the word bank used for keywords and cryptarithms.
    pub fn with_word_bank(mut self, words: WordBank) -> Self {
        self.words = words;
        self
    }

    /// Returns a mutable reference to the configuration.
    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    /// Current word bank.
    pub fn word_bank(&self) -> &WordBank {
        &self.words
    }

    /// Encodes `plaintext` as a puzzle of kind `cipher`.
    pub fn generate(&mut self, cipher: CipherType, plaintext: &str) -> GenerateResult<CipherResult> {
        self.config.validate()?;
        trace!(%cipher, len = plaintext.len(), "generating");
        let rng = &mut self.rng;
        let words = &self.words;
        let config = &self.config;
        let keyed = |rng: &mut R, variant, language, grouped| {
            CipherResult::Substitution(substitution::encrypt_keyed(
                rng, plaintext, words, variant, language, grouped,
            ))
        };
        let result = match cipher {
            CipherType::K1Aristocrat => keyed(rng, KeyVariant::K1, Language::Latin, false),
            CipherType::K2Aristocrat => keyed(rng, KeyVariant::K2, Language::Latin, false),
            CipherType::K3Aristocrat => keyed(rng, KeyVariant::K3, Language::Latin, false),
            CipherType::K1Patristocrat => keyed(rng, KeyVariant::K1, Language::Latin, true),
            CipherType::K2Patristocrat => keyed(rng, KeyVariant::K2, Language::Latin, true),
            CipherType::K3Patristocrat => keyed(rng, KeyVariant::K3, Language::Latin, true),
            CipherType::K1Xenocrypt => keyed(rng, KeyVariant::K1, Language::Spanish, false),
            CipherType::K2Xenocrypt => keyed(rng, KeyVariant::K2, Language::Spanish, false),
            CipherType::K3Xenocrypt => keyed(rng, KeyVariant::K3, Language::Spanish, false),
            CipherType::RandomAristocrat => CipherResult::Substitution(
                substitution::encrypt_random(rng, plaintext, Language::Latin, false),
            ),
            CipherType::RandomPatristocrat => CipherResult::Substitution(
                substitution::encrypt_random(rng, plaintext, Language::Latin, true),
            ),
            CipherType::RandomXenocrypt => CipherResult::Substitution(
                substitution::encrypt_random(rng, plaintext, Language::Spanish, false),
            ),
            CipherType::Atbash => {
                CipherResult::Substitution(substitution::encrypt_atbash(plaintext))
            }
            CipherType::Caesar => CipherResult::Shift(substitution::encrypt_caesar(rng, plaintext)),
            CipherType::Affine => {
                CipherResult::Affine(substitution::encrypt_affine(rng, plaintext))
            }
            CipherType::Hill2x2 => CipherResult::Matrix(hill::encrypt_2x2(rng, plaintext)),
            CipherType::Hill3x3 => {
                CipherResult::Matrix(hill::encrypt_3x3(rng, plaintext, config.hill3_group))
            }
            CipherType::Porta => CipherResult::Keyword(porta::encrypt(
                rng,
                plaintext,
                words,
                &config.block_sizes,
            )),
            CipherType::Baconian => CipherResult::Baconian(baconian::encrypt(rng, plaintext)),
            CipherType::Nihilist => CipherResult::Polybius(polybius::encrypt(
                rng,
                plaintext,
                words,
                &config.block_sizes,
            )),
            CipherType::Checkerboard => {
                CipherResult::Checkerboard(checkerboard::encrypt(rng, plaintext, words))
            }
            CipherType::FractionatedMorse => {
                CipherResult::Fractionation(fractionation::encrypt(rng, plaintext))
            }
            CipherType::CompleteColumnar => {
                CipherResult::Transposition(transposition::encrypt(rng, plaintext))
            }
            CipherType::Cryptarithm => {
                CipherResult::Cryptarithm(cryptarithm::generate(rng, words, config)?)
            }
        };
        Ok(result)
    }
}

/// One-shot generation with an optional caller-supplied word list.
///
/// `None` or a list with no usable word falls back to the built-in words.
pub fn generate<R: RngCore>(
    rng: &mut R,
    cipher: CipherType,
    plaintext: &str,
    word_bank: Option<&[String]>,
) -> GenerateResult<CipherResult> {
    let words = word_bank.map_or_else(WordBank::fallback, WordBank::from_words);
    Generator::new(rng).with_word_bank(words).generate(cipher, plaintext)
}
