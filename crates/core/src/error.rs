//! Error types for dotstore
//!
//! Only write-path traversal can fail at the API boundary; everything else
//! degrades (reads fall back to the default value, persistence failures are
//! logged by the store crate). We use `thiserror` for automatic `Display`
//! and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for dotstore operations
pub type Result<T> = std::result::Result<T, PathError>;

/// Error raised when a write traversal (`set`/`remove`) cannot follow a path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Array index out of bounds during traversal
    #[error("index {index} is out of range for array of length {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The array length
        len: usize,
    },

    /// A segment landed on a node it cannot descend into (a scalar, or an
    /// array addressed by a non-numeric segment)
    #[error("segment '{segment}' cannot index into {found}")]
    TypeMismatch {
        /// The path segment that failed to resolve
        segment: String,
        /// JSON type name of the node that was found
        found: &'static str,
    },
}
