//! Leaf predicates applied to an (actual, expected) pair.
//!
//! The actual operand comes from the document (`Null` when the field is
//! missing, or the whole document for a top-level `$` key), the expected
//! operand from the query.

use std::{cmp::Ordering, fmt};

use tracing::trace;

use crate::{
    error::{MatchError, NumericDomain, Result},
    matcher::Depth,
    token::{Keyword, Token},
    value::{Map, Value},
};

/// Document-side operand of a comparator.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Operand<'d> {
    /// A resolved field value.
    Value(&'d Value),
    /// The document itself, compared as an object without copying it.
    Document(&'d Map),
}

impl Operand<'_> {
    fn equals(self, expected: &Value) -> bool {
        match (self, expected) {
            (Operand::Value(actual), _) => actual == expected,
            (Operand::Document(document), Value::Object(object)) => document == object,
            (Operand::Document(_), _) => false,
        }
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(value) => write!(f, "{}", value),
            Operand::Document(document) => crate::output::write_object(f, document),
        }
    }
}

/// Comparator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparatorKind {
    /// Strict equality.
    Is,
    /// Membership in an array.
    In,
    /// Inverse of the comparator implied by the expected operand.
    Not,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl ComparatorKind {
    fn from_keyword(keyword: Keyword) -> Option<ComparatorKind> {
        match keyword {
            Keyword::Is => Some(ComparatorKind::Is),
            Keyword::In => Some(ComparatorKind::In),
            Keyword::Not => Some(ComparatorKind::Not),
            Keyword::Gt => Some(ComparatorKind::Gt),
            Keyword::Gte => Some(ComparatorKind::Gte),
            Keyword::Lt => Some(ComparatorKind::Lt),
            Keyword::Lte => Some(ComparatorKind::Lte),
            // combinators are only meaningful as field keys
            Keyword::And | Keyword::Or => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComparatorKind::Is => "$is",
            ComparatorKind::In => "$in",
            ComparatorKind::Not => "$not",
            ComparatorKind::Gt => "$gt",
            ComparatorKind::Gte => "$gte",
            ComparatorKind::Lt => "$lt",
            ComparatorKind::Lte => "$lte",
        }
    }
}

/// A comparator resolved for one evaluation step.
///
/// `kind` is `None` when the token named no comparator; the failure is
/// reported when the comparator is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparator<'q> {
    pub kind: Option<ComparatorKind>,
    pub negated: bool,
    /// Token the comparator was read from, for error reporting.
    pub name: &'q str,
}

impl<'q> Comparator<'q> {
    /// A non-negated comparator of a known kind.
    pub fn implicit(kind: ComparatorKind) -> Self {
        Comparator {
            kind: Some(kind),
            negated: false,
            name: kind.as_str(),
        }
    }

    /// Reads a comparator from a parsed key.
    pub fn from_token(token: Token<'q>) -> Self {
        Comparator {
            kind: token.keyword.and_then(ComparatorKind::from_keyword),
            negated: token.negated,
            name: token.raw,
        }
    }

    /// Placeholder for a comparator object with no keys.
    pub fn unset() -> Self {
        Comparator {
            kind: None,
            negated: false,
            name: "",
        }
    }

    /// Applies the comparator, flipping the outcome when negated.
    ///
    /// Errors are never affected by negation.
    pub(crate) fn apply(&self, actual: Operand<'_>, expected: &Value, depth: Depth) -> Result<bool> {
        let Some(kind) = self.kind else {
            return Err(MatchError::UnknownComparator(self.name.to_string()));
        };

        let base = match kind {
            ComparatorKind::Is => actual.equals(expected),
            ComparatorKind::In => member_of(actual, expected)?,
            ComparatorKind::Not => {
                let inferred = Comparator::implicit(infer_kind(expected));
                !inferred.apply(actual, expected, depth.descend()?)?
            }
            ComparatorKind::Gt => order(actual, expected)? == Some(Ordering::Greater),
            ComparatorKind::Gte => matches!(
                order(actual, expected)?,
                Some(Ordering::Greater | Ordering::Equal)
            ),
            ComparatorKind::Lt => order(actual, expected)? == Some(Ordering::Less),
            ComparatorKind::Lte => matches!(
                order(actual, expected)?,
                Some(Ordering::Less | Ordering::Equal)
            ),
        };

        let result = base != self.negated;
        trace!(
            comparator = kind.as_str(),
            negated = self.negated,
            %actual,
            %expected,
            result,
            "comparator applied"
        );
        Ok(result)
    }
}

/// Comparator implied by the shape of the expected operand under `$not`.
fn infer_kind(expected: &Value) -> ComparatorKind {
    match expected {
        Value::Array(_) => ComparatorKind::In,
        Value::Null
        | Value::Boolean(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Object(_) => ComparatorKind::Is,
    }
}

/// Strict equality: same kind and same value.
///
/// `Integer(100)`, `Float(100.0)` and `String("100")` are all different.
pub fn is_equal(actual: &Value, expected: &Value) -> bool {
    Operand::Value(actual).equals(expected)
}

/// Membership test. `expected` must be an array.
pub fn is_in(actual: &Value, expected: &Value) -> Result<bool> {
    member_of(Operand::Value(actual), expected)
}

fn member_of(actual: Operand<'_>, expected: &Value) -> Result<bool> {
    match expected {
        Value::Array(items) => Ok(items.iter().any(|item| actual.equals(item))),
        Value::Null
        | Value::Boolean(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Object(_) => Err(MatchError::UnknownExpectedType {
            found: expected.type_name(),
        }),
    }
}

/// Orders `actual` against `expected` in the domain chosen by `expected`.
///
/// An integer `expected` truncates a float `actual` toward zero; a float
/// `expected` widens an integer `actual`. `None` means the float values are
/// unordered (NaN).
pub fn compare(actual: &Value, expected: &Value) -> Result<Option<Ordering>> {
    order(Operand::Value(actual), expected)
}

fn order(actual: Operand<'_>, expected: &Value) -> Result<Option<Ordering>> {
    match expected {
        Value::Integer(e) => Ok(Some(to_int(actual)?.cmp(e))),
        Value::Float(e) => Ok(to_float(actual)?.partial_cmp(e)),
        Value::Null
        | Value::Boolean(_)
        | Value::String(_)
        | Value::Array(_)
        | Value::Object(_) => Err(MatchError::UnsupportedComparisonType(expected.type_name())),
    }
}

fn to_int(actual: Operand<'_>) -> Result<i64> {
    match actual {
        Operand::Value(Value::Integer(n)) => Ok(*n),
        // `as` truncates toward zero and saturates at the i64 bounds
        Operand::Value(Value::Float(f)) => Ok(*f as i64),
        Operand::Value(
            Value::Null | Value::Boolean(_) | Value::String(_) | Value::Array(_) | Value::Object(_),
        )
        | Operand::Document(_) => Err(MatchError::TypeCastFailed(NumericDomain::Int)),
    }
}

fn to_float(actual: Operand<'_>) -> Result<f64> {
    match actual {
        Operand::Value(Value::Float(f)) => Ok(*f),
        Operand::Value(Value::Integer(n)) => Ok(*n as f64),
        Operand::Value(
            Value::Null | Value::Boolean(_) | Value::String(_) | Value::Array(_) | Value::Object(_),
        )
        | Operand::Document(_) => Err(MatchError::TypeCastFailed(NumericDomain::Float)),
    }
}
