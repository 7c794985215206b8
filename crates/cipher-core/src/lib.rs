//! Randomness-free building blocks shared by the puzzle generator and grader.
//!
//! This crate provides:
//! - Mod-26 arithmetic and modular inverses.
//! - Keyword alphabets for the 26-letter Latin and 27-letter Spanish alphabets.
//! - Plaintext cleaning helpers.
//! - The fixed Morse and Baconian code tables.
//!
//! Nothing in here draws random numbers; every function is a pure mapping of
//! its inputs, which keeps the generator and the grader in agreement.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod codes;
mod modular;
mod text;

pub use crate::alphabet::{Alphabet, Language, LATIN, SPANISH};
pub use crate::codes::{bacon_letter, bacon_pattern, morse_code, morse_letter};
pub use crate::modular::{is_coprime_with_26, mod26, mod_inverse, COPRIME_WITH_26};
pub use crate::text::{clean_letters, normalize_spanish, spaced};
