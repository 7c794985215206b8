//! Classical cipher puzzle generation.
//!
//! Every encoder takes an injected RNG and returns a [`CipherResult`] holding
//! the ciphertext together with the metadata needed to rebuild its key. The
//! [`Generator`] dispatches on [`CipherType`] and owns the word bank and
//! configuration shared by the encoders.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphametic;
pub mod baconian;
pub mod blocks;
pub mod checkerboard;
mod cipher_type;
mod config;
pub mod cryptarithm;
mod error;
pub mod fractionation;
mod generator;
pub mod hill;
mod matrix;
pub mod polybius;
pub mod porta;
mod result;
pub mod schemes;
pub mod substitution;
pub mod transposition;
mod word_bank;

pub use cipher_type::CipherType;
pub use config::GeneratorConfig;
pub use error::{GenerateError, GenerateResult};
pub use generator::{generate, Generator};
pub use matrix::{ModMatrix, NotSquare};
pub use result::{
    AffineResult, BaconianResult, CheckerboardResult, CipherResult, CryptarithmResult,
    DigitGroup, FractionationResult, Glyph, KeyVariant, KeywordResult, MatrixResult, Operation,
    PolybiusResult, ShiftResult, SubstitutionResult, TextStyle, TranspositionResult,
};
pub use word_bank::{WordBank, FALLBACK_WORDS};
