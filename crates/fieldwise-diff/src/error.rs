//! Error types for the diff crate.

/// Errors that can occur during diff operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// The field function produced lists of different lengths for the two
    /// sides, so fields cannot be paired by position.
    #[error("field count mismatch: receiver produced {receiver} fields, argument produced {argument}")]
    FieldCountMismatch { receiver: usize, argument: usize },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
