//! Grading side of generated cipher puzzles.
//!
//! Everything here works from a [`CipherResult`](cipher_gen::CipherResult)
//! alone: the plaintext is rebuilt from the key metadata, never from the
//! generator's RNG.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cryptarithm;
mod decrypt;
mod error;
mod score;

pub use cryptarithm::verify_cryptarithm;
pub use decrypt::{cipher_to_plain, decrypt};
pub use error::{GradeError, GradeResult};
pub use score::{score, Score};
