//! Query evaluation.
//!
//! A query is walked top-down. Objects are conjunctions of `key: expectation`
//! pairs, arrays under a combinator are lists of sub-queries. Each key is
//! classified once by [`token::classify`](crate::token::classify) and then
//! dispatched:
//!
//! 1. each leading `!` inverts the result of the rest of the key
//! 2. `$and`, `$or` and `$not` evaluate their expectation as a sub-query
//! 3. any other `$key` applies a comparator to the whole document
//! 4. anything else is a field path; the comparator is taken from the
//!    expectation's shape (scalar is `$is`, array is `$in`, a single-key
//!    object names the comparator explicitly)

use tracing::{debug, trace};

use crate::{
    comparator::{Comparator, ComparatorKind, Operand},
    error::{MatchError, Result},
    options::MatchOptions,
    path::resolve_with,
    token::{self, KeyKind},
    value::{Map, Value},
};

/// Stand-in for a field the document does not have.
static MISSING: Value = Value::Null;

/// Recursion budget threaded through every evaluation step.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Depth {
    level: usize,
    limit: usize,
}

impl Depth {
    pub(crate) fn root(limit: usize) -> Self {
        Depth { level: 0, limit }
    }

    /// Consumes one level, failing once the limit is passed.
    pub(crate) fn descend(self) -> Result<Depth> {
        let level = self.level + 1;
        if level > self.limit {
            return Err(MatchError::DepthExceeded { limit: self.limit });
        }
        Ok(Depth {
            level,
            limit: self.limit,
        })
    }

    pub(crate) fn level(self) -> usize {
        self.level
    }
}

/// Reusable query evaluator.
///
/// Holds only configuration, so a single instance can be shared across
/// threads.
///
/// # Examples
///
/// ```
/// use jsonmatch::{Matcher, MatchOptions, Value};
/// use jsonmatch::convert::document_from_json_str;
///
/// let matcher = Matcher::new(MatchOptions::default());
/// let query = Value::from_json_str(r#"{"user.age": {"$gte": 18}, "status": ["active", "trial"]}"#).unwrap();
/// let doc = document_from_json_str(r#"{"user": {"age": 30}, "status": "active"}"#).unwrap();
///
/// assert!(matcher.matches(&query, &doc).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    options: MatchOptions,
}

impl Matcher {
    pub fn new(options: MatchOptions) -> Self {
        Matcher { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Decides whether `document` satisfies `query`.
    ///
    /// The top level is an implicit `$and`: an object or an array of
    /// sub-queries.
    pub fn matches(&self, query: &Value, document: &Map) -> Result<bool> {
        let result = self.and(query, document, Depth::root(self.options.max_depth));
        if let Err(error) = &result {
            debug!(%error, %query, "query evaluation aborted");
        }
        result
    }

    /// Keeps the documents that satisfy `query`, in input order.
    ///
    /// The first evaluation error aborts the whole batch.
    pub fn filter<'d, I>(&self, query: &Value, documents: I) -> Result<Vec<&'d Map>>
    where
        I: IntoIterator<Item = &'d Map>,
    {
        let mut kept = Vec::new();
        for document in documents {
            if self.matches(query, document)? {
                kept.push(document);
            }
        }
        Ok(kept)
    }

    /// Conjunction: every field of an object, or every sub-query of an array.
    /// Empty input is vacuously true.
    fn and(&self, node: &Value, document: &Map, depth: Depth) -> Result<bool> {
        let depth = depth.descend()?;

        match node {
            Value::Object(fields) => {
                for (key, expectation) in fields {
                    if !self.match_field(key, expectation, document, depth)? {
                        trace!(key = key.as_str(), depth = depth.level(), "$and short-circuit");
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Value::Array(queries) => {
                for query in queries {
                    if !self.and(query, document, depth)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => Err(MatchError::UnknownQueryShape {
                found: node.type_name(),
            }),
        }
    }

    /// Disjunction: any field of an object, or any sub-query of an array.
    /// Array elements are themselves evaluated as conjunctions. Empty input
    /// is false.
    fn or(&self, node: &Value, document: &Map, depth: Depth) -> Result<bool> {
        let depth = depth.descend()?;

        match node {
            Value::Object(fields) => {
                for (key, expectation) in fields {
                    if self.match_field(key, expectation, document, depth)? {
                        trace!(key = key.as_str(), depth = depth.level(), "$or short-circuit");
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Value::Array(queries) => {
                for query in queries {
                    if self.and(query, document, depth)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Value::Null
            | Value::Boolean(_)
            | Value::Integer(_)
            | Value::Float(_)
            | Value::String(_) => Err(MatchError::UnknownQueryShape {
                found: node.type_name(),
            }),
        }
    }

    fn match_field(
        &self,
        key: &str,
        expectation: &Value,
        document: &Map,
        depth: Depth,
    ) -> Result<bool> {
        let depth = depth.descend()?;

        let key = token::classify(key);
        if key.negated {
            trace!(depth = depth.level(), "negated key");
        }

        let matched = match key.kind {
            KeyKind::And => self.and(expectation, document, depth)?,
            KeyKind::Or => self.or(expectation, document, depth)?,
            KeyKind::Not => !self.and(expectation, document, depth)?,
            KeyKind::Comparator(token) => {
                trace!(key = token.raw, depth = depth.level(), "comparator against whole document");
                Comparator::from_token(token).apply(
                    Operand::Document(document),
                    expectation,
                    depth,
                )?
            }
            KeyKind::Field(path) => {
                let (comparator, expected) = unpack(path, expectation)?;
                let actual = resolve_with(document, path, self.options.path_separator);
                trace!(
                    field = path,
                    comparator = comparator.name,
                    found = actual.is_some(),
                    depth = depth.level(),
                    "field resolved"
                );
                comparator.apply(
                    Operand::Value(actual.unwrap_or(&MISSING)),
                    expected,
                    depth,
                )?
            }
        };

        Ok(matched != key.negated)
    }
}

/// Works out the comparator for a plain field from the expectation's shape.
///
/// Returns the comparator and the operand it is to be applied with.
fn unpack<'q>(field: &str, expectation: &'q Value) -> Result<(Comparator<'q>, &'q Value)> {
    match expectation {
        Value::String(_) | Value::Integer(_) | Value::Float(_) => {
            Ok((Comparator::implicit(ComparatorKind::Is), expectation))
        }
        Value::Array(_) => Ok((Comparator::implicit(ComparatorKind::In), expectation)),
        Value::Object(object) => {
            if object.len() > 1 {
                return Err(MatchError::MultipleExpectations {
                    field: field.to_string(),
                    count: object.len(),
                });
            }
            match object.first_key_value() {
                Some((name, operand)) => {
                    Ok((Comparator::from_token(token::parse_token(name)), operand))
                }
                // reported as an unknown comparator once applied
                None => Ok((Comparator::unset(), expectation)),
            }
        }
        Value::Null | Value::Boolean(_) => Err(MatchError::NotAMap {
            found: expectation.type_name(),
        }),
    }
}
