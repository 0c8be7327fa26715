//! Dotstore - dotted-path JSON document store backed by a single file
//!
//! Dotstore loads a JSON document into memory, exposes dotted-path
//! get/set/remove accessors over it, and writes it back to disk on
//! request.
//!
//! # Quick Start
//!
//! ```
//! use dotstore::DocStore;
//!
//! // A missing file yields an empty document, never an error
//! let mut store = DocStore::open("settings.json");
//!
//! store.set("editor.theme", "dark")?;
//! assert_eq!(store.get("editor.theme").as_str(), Some("dark"));
//!
//! store.remove("editor.theme")?;
//! assert!(!store.contains("editor.theme"));
//! # Ok::<(), dotstore::PathError>(())
//! ```
//!
//! # Contract
//!
//! Reads never fail (missing paths fall back to the configured default)
//! and persistence never fails (load/save problems are logged through
//! `tracing`). Only `set`/`remove` can return an error, when the path
//! runs through an out-of-range array index or a non-container node.

// Re-export the public API from dotstore-store
pub use dotstore_store::*;
