use thiserror::Error;

/// Errors raised while reconstructing a puzzle's plaintext.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// The result metadata does not describe a decodable puzzle.
    #[error("malformed puzzle: {0}")]
    Malformed(String),

    /// A Baconian result names a rendering scheme that does not exist.
    #[error("unknown baconian scheme: {0}")]
    UnknownScheme(String),
}

/// Convenience alias for grading results.
pub type GradeResult<T> = Result<T, GradeError>;

pub(crate) fn malformed(what: impl Into<String>) -> GradeError {
    GradeError::Malformed(what.into())
}
