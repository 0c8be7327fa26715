//! Path traversal over JSON documents
//!
//! Every operation walks the document one segment at a time with an
//! exhaustive match over the node variant, classifying each segment
//! against the container actually found: on an array, an all-digit
//! segment is an index; on an object, every segment (digits included)
//! is a key.
//!
//! Two walks share these per-segment semantics:
//!
//! - **Read walk** ([`resolve`]): a miss of any kind (absent key, index
//!   out of bounds, non-digit segment on an array, scalar node) returns
//!   `None`. Never creates anything, never errors.
//! - **Write walk** (`walk_to_parent`, used by [`set_at_path`] and
//!   [`remove_at_path`]): absent object keys are created as empty objects
//!   along the way (auto-vivification); array misses and scalar nodes are
//!   hard errors. The walk never creates or extends array elements.
//!
//! [`object_path_exists`] is deliberately narrower than [`resolve`]: it
//! only follows chains of object keys, so a path that resolves through an
//! array still reports `false`.

use crate::error::{PathError, Result};
use crate::path::{array_index, DotPath};
use crate::value::JsonValue;

/// Get a reference to the value at `path`, if the path resolves
///
/// # Examples
///
/// ```
/// use dotstore_core::{resolve, DotPath, JsonValue};
///
/// let doc: JsonValue = r#"{"user": {"scores": [100, 95]}}"#.parse().unwrap();
///
/// let score = resolve(&doc, &DotPath::parse("user.scores.1")).unwrap();
/// assert_eq!(score.as_i64(), Some(95));
///
/// assert!(resolve(&doc, &DotPath::parse("user.missing")).is_none());
/// ```
pub fn resolve<'a>(root: &'a JsonValue, path: &DotPath) -> Option<&'a JsonValue> {
    let mut current = root.as_inner();
    for segment in path.segments() {
        current = match current {
            serde_json::Value::Object(map) => map.get(segment.as_str())?,
            serde_json::Value::Array(items) => items.get(array_index(segment)?)?,
            _ => return None,
        };
    }
    Some(JsonValue::from_ref(current))
}

/// Check whether `path` exists as a chain of object keys
///
/// Arrays are opaque to this check: a segment that would index into an
/// array makes the whole check false, even where [`resolve`] succeeds.
pub fn object_path_exists(root: &JsonValue, path: &DotPath) -> bool {
    let mut current = root.as_inner();
    for segment in path.segments() {
        match current {
            serde_json::Value::Object(map) => match map.get(segment.as_str()) {
                Some(next) => current = next,
                None => return false,
            },
            _ => return false,
        }
    }
    true
}

/// Walk to the parent of the final segment, creating missing object keys.
///
/// Returns the parent node and the final segment. Absent keys on objects
/// become empty objects; arrays are only followed, never grown.
fn walk_to_parent<'a, 'p>(
    root: &'a mut serde_json::Value,
    path: &'p DotPath,
) -> Result<(&'a mut serde_json::Value, &'p str)> {
    let (parents, last) = path.split_last();
    let mut current = root;
    for segment in parents {
        current = match current {
            serde_json::Value::Object(map) => map
                .entry(segment.as_str())
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new())),
            serde_json::Value::Array(items) => {
                let index = array_index(segment).ok_or_else(|| PathError::TypeMismatch {
                    segment: segment.clone(),
                    found: "array",
                })?;
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(PathError::IndexOutOfBounds { index, len })?
            }
            other => {
                return Err(PathError::TypeMismatch {
                    segment: segment.clone(),
                    found: type_name(other),
                })
            }
        };
    }
    Ok((current, last))
}

/// Set `value` at `path`, creating missing intermediate objects
///
/// On the final segment: objects insert or overwrite the key; arrays
/// replace in bounds, append when the index equals the length, and fail
/// with [`PathError::IndexOutOfBounds`] beyond that.
///
/// # Examples
///
/// ```
/// use dotstore_core::{resolve, set_at_path, DotPath, JsonValue};
///
/// let mut doc = JsonValue::object();
/// set_at_path(&mut doc, &DotPath::parse("user.profile.name"), "Alice".into()).unwrap();
///
/// let name = resolve(&doc, &DotPath::parse("user.profile.name")).unwrap();
/// assert_eq!(name.as_str(), Some("Alice"));
/// ```
pub fn set_at_path(root: &mut JsonValue, path: &DotPath, value: JsonValue) -> Result<()> {
    let (parent, last) = walk_to_parent(root.as_inner_mut(), path)?;
    match parent {
        serde_json::Value::Object(map) => {
            map.insert(last.to_string(), value.into_inner());
            Ok(())
        }
        serde_json::Value::Array(items) => {
            let index = array_index(last).ok_or_else(|| PathError::TypeMismatch {
                segment: last.to_string(),
                found: "array",
            })?;
            let len = items.len();
            if index < len {
                items[index] = value.into_inner();
                Ok(())
            } else if index == len {
                items.push(value.into_inner());
                Ok(())
            } else {
                Err(PathError::IndexOutOfBounds { index, len })
            }
        }
        other => Err(PathError::TypeMismatch {
            segment: last.to_string(),
            found: type_name(other),
        }),
    }
}

/// Remove the value at `path`, returning it
///
/// Shares the write walk with [`set_at_path`], so missing intermediate
/// object keys are created on the way down. An absent final segment is a
/// no-op (`Ok(None)`); object removal preserves the insertion order of
/// the remaining keys, array removal shifts later elements down.
pub fn remove_at_path(root: &mut JsonValue, path: &DotPath) -> Result<Option<JsonValue>> {
    let (parent, last) = walk_to_parent(root.as_inner_mut(), path)?;
    match parent {
        serde_json::Value::Object(map) => Ok(map.shift_remove(last).map(JsonValue::from_value)),
        serde_json::Value::Array(items) => match array_index(last) {
            Some(index) if index < items.len() => {
                Ok(Some(JsonValue::from_value(items.remove(index))))
            }
            _ => Ok(None),
        },
        other => Err(PathError::TypeMismatch {
            segment: last.to_string(),
            found: type_name(other),
        }),
    }
}

/// Helper to get type name for error messages
fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
