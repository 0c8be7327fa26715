//! DocStore: a JSON document held in memory, backed by a single file
//!
//! ## Design
//!
//! The store owns the document exclusively: construction reads the file
//! once, every accessor works on the in-memory tree, and nothing touches
//! the disk again until an explicit [`DocStore::save`]. There is no dirty
//! tracking and no link between memory and disk between saves.
//!
//! Failure handling is split by direction:
//!
//! - Reads (`get`, `contains`) and persistence (construction, `save`)
//!   never fail: reads degrade to the configured default, persistence
//!   problems are logged through `tracing`.
//! - Writes (`set`, `remove`) surface a
//!   [`PathError`](dotstore_core::PathError) when the path cannot be
//!   followed (index out of range, or a segment landing on a
//!   non-container).

use std::fmt;
use std::path::{Path, PathBuf};

use dotstore_core::{
    object_path_exists, remove_at_path, resolve, set_at_path, DotPath, JsonValue, Result,
};

use crate::io;

/// JSON document store with dotted-path accessors
///
/// # Example
///
/// ```
/// use dotstore_store::DocStore;
///
/// // A missing file yields an empty document (logged, not an error)
/// let mut store = DocStore::open("app-state.json");
///
/// store.set("window.width", 1280).unwrap();
/// store.set("window.title", "editor").unwrap();
///
/// assert_eq!(store.get("window.width").as_i64(), Some(1280));
/// assert!(store.contains("window.title"));
/// ```
#[derive(Debug)]
pub struct DocStore {
    /// Construction path, default target for [`DocStore::save`]
    filepath: PathBuf,
    /// Returned by [`DocStore::get`] when a path does not resolve
    default: JsonValue,
    /// The document
    doc: JsonValue,
}

impl DocStore {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Open the document file at `filepath`
    ///
    /// A file that is missing, unreadable, or not valid JSON yields an
    /// empty object document; the condition is logged at warn level.
    /// Construction never fails. The default value for missing read paths
    /// is null; use [`DocStore::open_with_default`] to choose another.
    pub fn open(filepath: impl Into<PathBuf>) -> Self {
        Self::open_with_default(filepath, JsonValue::null())
    }

    /// Open the document file at `filepath` with a default value for reads
    ///
    /// `default` is what [`DocStore::get`] returns for paths that do not
    /// resolve.
    pub fn open_with_default(filepath: impl Into<PathBuf>, default: impl Into<JsonValue>) -> Self {
        let filepath = filepath.into();
        let doc = io::load_document(&filepath);
        DocStore {
            filepath,
            default: default.into(),
            doc,
        }
    }

    /// The construction path (default save target)
    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    // ========================================================================
    // Whole-document access
    // ========================================================================

    /// Borrow the current document
    pub fn document(&self) -> &JsonValue {
        &self.doc
    }

    /// Mutably borrow the current document
    ///
    /// Direct mutation bypasses path validation entirely; the next `get`,
    /// `save`, or `items` sees whatever was written.
    pub fn document_mut(&mut self) -> &mut JsonValue {
        &mut self.doc
    }

    /// Replace the document wholesale
    pub fn overwrite(&mut self, doc: impl Into<JsonValue>) {
        self.doc = doc.into();
    }

    /// Iterate the key/value pairs of the document root
    ///
    /// Yields pairs in key insertion order. When the root is not an
    /// object the iterator is empty. The borrow ties the view to the
    /// current document: any mutation ends it.
    pub fn items(&self) -> impl Iterator<Item = (&str, &JsonValue)> + '_ {
        self.doc
            .as_object()
            .into_iter()
            .flatten()
            .map(|(key, value)| (key.as_str(), JsonValue::from_ref(value)))
    }

    // ========================================================================
    // Path accessors
    // ========================================================================

    /// Get the value at a dotted path, or the configured default
    ///
    /// Objects are indexed by key, arrays by all-digit segments. Any miss
    /// (absent key, index out of bounds, non-digit segment on an array, a
    /// scalar in the middle of the path) returns the default; lookups
    /// never fail.
    pub fn get(&self, path: &str) -> &JsonValue {
        resolve(&self.doc, &DotPath::parse(path)).unwrap_or(&self.default)
    }

    /// Set a value at a dotted path
    ///
    /// Missing intermediate object keys are created as empty objects on
    /// the way down; array elements are never created by the walk. Fails
    /// with [`PathError::IndexOutOfBounds`] on an out-of-range array
    /// index and [`PathError::TypeMismatch`] when a segment lands on a
    /// node it cannot descend into.
    ///
    /// [`PathError::IndexOutOfBounds`]: dotstore_core::PathError::IndexOutOfBounds
    /// [`PathError::TypeMismatch`]: dotstore_core::PathError::TypeMismatch
    pub fn set(&mut self, path: &str, value: impl Into<JsonValue>) -> Result<()> {
        set_at_path(&mut self.doc, &DotPath::parse(path), value.into())
    }

    /// Remove the value at a dotted path, returning it
    ///
    /// Same traversal as [`DocStore::set`]. Removing a path whose final
    /// segment is absent is a silent no-op (`Ok(None)`).
    pub fn remove(&mut self, path: &str) -> Result<Option<JsonValue>> {
        remove_at_path(&mut self.doc, &DotPath::parse(path))
    }

    /// Check whether a dotted path exists as a chain of object keys
    ///
    /// This is an object-only membership test: paths through arrays
    /// report false even where [`DocStore::get`] resolves them.
    pub fn contains(&self, path: &str) -> bool {
        object_path_exists(&self.doc, &DotPath::parse(path))
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Write the document to the construction path
    ///
    /// Serialization or I/O failures are logged at error level and do not
    /// propagate; a failed save can leave the file partially written.
    pub fn save(&self) {
        io::write_document(&self.doc, &self.filepath);
    }

    /// Write the document to an alternate path
    pub fn save_to(&self, path: impl AsRef<Path>) {
        io::write_document(&self.doc, path.as_ref());
    }

    /// The pretty-printed text form of the document
    ///
    /// Same rendering as [`DocStore::save`] writes: 4-space indentation,
    /// keys in insertion order, non-ASCII characters kept literal.
    pub fn to_pretty_string(&self) -> String {
        self.doc.to_json_string_pretty()
    }
}

impl fmt::Display for DocStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.doc.to_json_string_pretty())
    }
}
