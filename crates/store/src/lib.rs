//! Document store facade: dotted-path access over a JSON file
//!
//! [`DocStore`] wraps one parsed JSON document with dotted-path
//! get/set/remove accessors and explicit save/load against a file path.
//! See the [`store`] module for the failure-handling contract.

pub mod io;
pub mod store;

// Re-export the core types alongside the facade
pub use dotstore_core::{
    array_index, object_path_exists, remove_at_path, resolve, set_at_path, DotPath, JsonValue,
    PathError, Result,
};
pub use io::{load_document, write_document};
pub use store::DocStore;
