//! Error types for puzzle generation.

use thiserror::Error;

/// Errors produced while generating a puzzle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A bounded search ran out of attempts without producing a puzzle.
    #[error("generation failed after {attempts} attempts: {reason}")]
    GenerationFailed {
        /// Total attempts spent before giving up.
        attempts: usize,
        /// What the search could not satisfy.
        reason: &'static str,
    },

    /// A cipher name did not match any known cipher type.
    #[error("unknown cipher type: {0}")]
    UnknownCipher(String),

    /// The generator configuration is unusable.
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for generator results.
pub type GenerateResult<T> = Result<T, GenerateError>;
