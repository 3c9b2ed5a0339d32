//! MongoDB-style predicate matching over dynamically shaped documents.
//!
//! A query is an ordinary [`Value`] tree. Plain keys name document fields
//! (dotted paths reach into nested objects), `$`-keys introduce combinators
//! and comparators, and a leading `!` negates a key.
//!
//! ```
//! use jsonmatch::{matches, Value};
//! use jsonmatch::convert::document_from_json_str;
//!
//! let query = Value::from_json_str(
//!     r#"{"$or": [{"kind": "book", "price": {"$lt": 20.0}}, {"tags": {"$is": "free"}}]}"#,
//! ).unwrap();
//! let doc = document_from_json_str(r#"{"kind": "book", "price": 12.5}"#).unwrap();
//!
//! assert!(matches(&query, &doc).unwrap());
//! ```

pub mod comparator;
pub mod convert;
pub mod error;
pub mod matcher;
pub mod options;
pub mod output;
pub mod path;
pub mod token;
pub mod value;

pub use comparator::{Comparator, ComparatorKind};
pub use error::{MatchError, NumericDomain, Result};
pub use matcher::Matcher;
pub use options::MatchOptions;
pub use path::{resolve, resolve_with};
pub use value::{Map, Value};

/// Evaluates `query` against `document` with default options.
pub fn matches(query: &Value, document: &Map) -> Result<bool> {
    Matcher::default().matches(query, document)
}

/// Evaluates `query` against `document` with explicit options.
pub fn matches_with(query: &Value, document: &Map, options: &MatchOptions) -> Result<bool> {
    Matcher::new(options.clone()).matches(query, document)
}
