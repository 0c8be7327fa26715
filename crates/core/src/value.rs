//! JSON document value
//!
//! `JsonValue` is a newtype wrapper around `serde_json::Value` providing:
//! - Direct access to the underlying value via Deref/DerefMut
//! - Easy construction from common types
//! - The on-disk text rendering (4-space indentation, non-ASCII characters
//!   written literally rather than escaped)
//!
//! The wrapper is `#[repr(transparent)]`, which [`JsonValue::from_ref`]
//! relies on to view a borrowed `serde_json::Value` as a `JsonValue`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// JSON value wrapper
///
/// # Examples
///
/// ```
/// use dotstore_core::JsonValue;
///
/// // From JSON literals
/// let obj = JsonValue::object();
/// let null = JsonValue::null();
///
/// // From common types
/// let s = JsonValue::from("hello");
/// let n = JsonValue::from(42i64);
///
/// // Access underlying value methods via Deref
/// assert!(obj.is_object());
/// assert!(null.is_null());
/// assert_eq!(n.as_i64(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct JsonValue(serde_json::Value);

impl JsonValue {
    /// Create a null JSON value
    pub fn null() -> Self {
        JsonValue(serde_json::Value::Null)
    }

    /// Create an empty JSON object
    pub fn object() -> Self {
        JsonValue(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Create an empty JSON array
    pub fn array() -> Self {
        JsonValue(serde_json::Value::Array(Vec::new()))
    }

    /// Create from a serde_json::Value
    pub fn from_value(value: serde_json::Value) -> Self {
        JsonValue(value)
    }

    /// View a borrowed serde_json::Value as a JsonValue
    pub fn from_ref(value: &serde_json::Value) -> &JsonValue {
        // SAFETY: JsonValue is #[repr(transparent)] over serde_json::Value,
        // so the two types have identical layout and alignment, and the
        // returned reference carries the input lifetime unchanged.
        unsafe { &*(value as *const serde_json::Value as *const JsonValue) }
    }

    /// Get the underlying serde_json::Value
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }

    /// Get a reference to the underlying serde_json::Value
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }

    /// Get a mutable reference to the underlying serde_json::Value
    pub fn as_inner_mut(&mut self) -> &mut serde_json::Value {
        &mut self.0
    }

    /// Serialize to compact JSON string
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    /// Serialize to the on-disk text form: pretty-printed with 4-space
    /// indentation, keys in insertion order, non-ASCII written literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotstore_core::JsonValue;
    ///
    /// let v: JsonValue = r#"{"a": 1}"#.parse().unwrap();
    /// assert_eq!(v.to_json_string_pretty(), "{\n    \"a\": 1\n}");
    /// ```
    pub fn to_json_string_pretty(&self) -> String {
        self.to_json_vec_pretty()
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_else(|| self.to_json_string())
    }

    /// Serialize to the on-disk text form as raw bytes
    ///
    /// Same rendering as [`to_json_string_pretty`](Self::to_json_string_pretty),
    /// but surfaces the serialization error instead of falling back.
    pub fn to_json_vec_pretty(&self) -> serde_json::Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(128);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut bytes, formatter);
        self.0.serialize(&mut ser)?;
        Ok(bytes)
    }
}

// Implement FromStr for parsing from strings
impl FromStr for JsonValue {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s).map(JsonValue)
    }
}

// Deref to access serde_json::Value methods directly
impl Deref for JsonValue {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for JsonValue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// Display for easy printing
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Default is null
impl Default for JsonValue {
    fn default() -> Self {
        Self::null()
    }
}

// From implementations for common types
impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        JsonValue(v)
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(v: JsonValue) -> Self {
        v.0
    }
}

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        JsonValue(serde_json::Value::Bool(v))
    }
}

impl From<i64> for JsonValue {
    fn from(v: i64) -> Self {
        JsonValue(serde_json::Value::Number(v.into()))
    }
}

impl From<i32> for JsonValue {
    fn from(v: i32) -> Self {
        JsonValue(serde_json::Value::Number(v.into()))
    }
}

impl From<u64> for JsonValue {
    fn from(v: u64) -> Self {
        JsonValue(serde_json::Value::Number(v.into()))
    }
}

impl From<u32> for JsonValue {
    fn from(v: u32) -> Self {
        JsonValue(serde_json::Value::Number(v.into()))
    }
}

impl From<f64> for JsonValue {
    fn from(v: f64) -> Self {
        JsonValue(
            serde_json::Number::from_f64(v)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
        )
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        JsonValue(serde_json::Value::String(v.to_string()))
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        JsonValue(serde_json::Value::String(v))
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(v: Vec<T>) -> Self {
        JsonValue(serde_json::Value::Array(
            v.into_iter().map(|x| x.into().0).collect(),
        ))
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => JsonValue::null(),
        }
    }
}
