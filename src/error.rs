//! Error types for query evaluation.

use std::fmt;

use thiserror::Error;

/// Numeric domain an ordering comparison is carried out in.
///
/// Chosen by the kind of the expected (query-side) operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericDomain {
    Int,
    Float,
}

impl fmt::Display for NumericDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericDomain::Int => write!(f, "int"),
            NumericDomain::Float => write!(f, "float"),
        }
    }
}

/// Errors that abort evaluation of a query.
///
/// None of these is ever downgraded to a non-match: the first one raised
/// surfaces to the caller unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// A combinator operand was neither an object nor an array.
    #[error("unknown query shape: expected object or array, got {found}")]
    UnknownQueryShape { found: &'static str },

    /// A comparator object carried more than one comparator.
    #[error("multiple expectations for field '{field}': comparator object has {count} keys")]
    MultipleExpectations { field: String, count: usize },

    /// An expectation had to be unpacked as a comparator object but was not one.
    #[error("not a map: expected comparator object, got {found}")]
    NotAMap { found: &'static str },

    /// Token did not name a comparator.
    #[error("unknown comparator: '{0}'")]
    UnknownComparator(String),

    /// Actual value could not be coerced into the comparison domain.
    #[error("casting actual value to {0} failed")]
    TypeCastFailed(NumericDomain),

    /// Expected value has no ordering semantics.
    #[error("unsupported comparison type: {0}")]
    UnsupportedComparisonType(&'static str),

    /// `$in` was given something other than an array.
    #[error("unknown expected type for $in: expected array, got {found}")]
    UnknownExpectedType { found: &'static str },

    /// Query nesting exhausted the recursion budget.
    #[error("query nesting exceeds maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    /// Malformed JSON handed to one of the text helpers.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;
