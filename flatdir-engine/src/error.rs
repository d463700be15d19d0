//! Error types for the directory engine.

use thiserror::Error;

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors that can occur in directory operations.
///
/// All failures are deterministic given the same input and store state;
/// there is no transient/retryable category.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Create targeted an id that already exists. The store is unchanged.
    #[error("entry '{0}' already exists")]
    DuplicateEntry(String),

    /// Update targeted an id with no entry. The store is unchanged.
    #[error("entry '{0}' not found")]
    EntryNotFound(String),

    /// Create payload had no usable value under the directory's id field.
    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    /// Registry lookup for an unknown directory name.
    #[error("no directory registered under '{0}'")]
    NoSuchDirectory(String),
}
