//! Dotted paths into a JSON document
//!
//! A path is a sequence of string segments obtained by splitting the raw
//! path on `.` (e.g. `"user.scores.1"` is `["user", "scores", "1"]`).
//! Splitting never fails: the empty string parses to a single empty
//! segment, and empty segments are legal object keys.
//!
//! Whether a segment addresses an object key or an array index is decided
//! during traversal, against the container actually found: a segment
//! consisting only of ASCII digits indexes an array, and is an ordinary
//! key everywhere else (see [`array_index`]).

use std::fmt;

/// A dot-separated path into a JSON document
///
/// # Examples
///
/// ```
/// use dotstore_core::DotPath;
///
/// let path = DotPath::parse("user.profile.name");
/// assert_eq!(path.segments(), &["user", "profile", "name"]);
/// assert_eq!(path.to_string(), "user.profile.name");
///
/// // Splitting always yields at least one segment
/// assert_eq!(DotPath::parse("").segments(), &[""]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DotPath {
    segments: Vec<String>,
}

impl DotPath {
    /// Parse a path by splitting on `.`
    ///
    /// Never fails; there is no escaping, so keys containing a literal dot
    /// cannot be addressed.
    pub fn parse(raw: &str) -> Self {
        DotPath {
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check whether the path has no segments
    ///
    /// Always false for parsed paths; parsing yields at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Split into the leading segments and the final segment
    pub fn split_last(&self) -> (&[String], &str) {
        match self.segments.split_last() {
            Some((last, parents)) => (parents, last),
            // Unreachable through parse(); kept total so callers need no panic path.
            None => (&[], ""),
        }
    }
}

impl From<&str> for DotPath {
    fn from(raw: &str) -> Self {
        DotPath::parse(raw)
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Interpret a path segment as an array index
///
/// Returns `Some(index)` only for segments made entirely of ASCII digits
/// that fit in `usize`. Signed forms (`"+5"`, `"-1"`), the empty segment,
/// and digit strings that overflow are not indexes and fall back to being
/// object keys.
///
/// # Examples
///
/// ```
/// use dotstore_core::array_index;
///
/// assert_eq!(array_index("0"), Some(0));
/// assert_eq!(array_index("007"), Some(7));
/// assert_eq!(array_index("+5"), None);
/// assert_eq!(array_index("1.5"), None);
/// assert_eq!(array_index(""), None);
/// ```
pub fn array_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
