//! Dotted field path resolution.

use crate::value::{Map, Value};

/// Level separator used by [`resolve`].
pub const DEFAULT_SEPARATOR: char = '.';

/// Resolves a dotted `path` against `document`.
///
/// Returns `None` when any segment is missing or when a non-final segment
/// lands on something other than an object. A field that exists but holds
/// `null` resolves to `Some(&Value::Null)`.
///
/// # Examples
///
/// ```
/// use jsonmatch::{resolve, Map, Value};
///
/// let mut inner = Map::new();
/// inner.insert("l2".to_string(), Value::Integer(101));
/// let mut doc = Map::new();
/// doc.insert("l1".to_string(), Value::Object(inner));
///
/// assert_eq!(resolve(&doc, "l1.l2"), Some(&Value::Integer(101)));
/// assert_eq!(resolve(&doc, "l1.l3"), None);
/// ```
pub fn resolve<'d>(document: &'d Map, path: &str) -> Option<&'d Value> {
    resolve_with(document, path, DEFAULT_SEPARATOR)
}

/// Like [`resolve`], splitting on `separator` instead of `.`.
pub fn resolve_with<'d>(document: &'d Map, path: &str, separator: char) -> Option<&'d Value> {
    let mut segments = path.split(separator);
    // split always yields at least one segment
    let mut current = document.get(segments.next()?)?;

    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Array(_) => return None,
        };
    }

    Some(current)
}
