//! Document file I/O
//!
//! Loading and writing never propagate errors to the caller: failures are
//! reported through `tracing` and loading falls back to an empty object.

use std::fs;
use std::io;
use std::path::Path;

use dotstore_core::JsonValue;
use tracing::{error, warn};

/// Read and parse the document file at `path`
///
/// Falls back to an empty object when the file is missing, unreadable, or
/// not valid JSON; the cause is logged at warn level. Never fails.
pub fn load_document(path: &Path) -> JsonValue {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "document file not found, starting from an empty object"
            );
            return JsonValue::object();
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "failed to read document file, starting from an empty object"
            );
            return JsonValue::object();
        }
    };
    match text.parse() {
        Ok(doc) => doc,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "document file is not valid JSON, starting from an empty object"
            );
            JsonValue::object()
        }
    }
}

/// Serialize `doc` to its pretty text form and write it to `path`
///
/// Failures are logged at error level and swallowed. There is no atomic
/// rename: a failed write can leave the file partially written.
pub fn write_document(doc: &JsonValue, path: &Path) {
    let bytes = match doc.to_json_vec_pretty() {
        Ok(bytes) => bytes,
        Err(e) => {
            error!(
                path = %path.display(),
                error = %e,
                "document is not serializable to JSON"
            );
            return;
        }
    };
    if let Err(e) = fs::write(path, bytes) {
        error!(
            path = %path.display(),
            error = %e,
            "failed to write document file"
        );
    }
}
