//! Core types for dotstore
//!
//! This crate defines the foundational types used throughout the system:
//! - JsonValue: Newtype wrapper around serde_json::Value (the document)
//! - DotPath: Dot-separated path into a document (e.g. `user.name` or `items.0`)
//! - PathError: Error taxonomy for write-path traversal failures
//! - Traversal: shared walk logic for get/set/remove/contains

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error;
pub mod path;
pub mod traverse;
pub mod value;

// Re-export commonly used types
pub use error::{PathError, Result};
pub use path::{array_index, DotPath};
pub use traverse::{object_path_exists, remove_at_path, resolve, set_at_path};
pub use value::JsonValue;
