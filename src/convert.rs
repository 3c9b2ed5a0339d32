//! Bridging between [`serde_json::Value`] and [`Value`].
//!
//! Numbers keep their kind across the bridge. A JSON number that `serde_json`
//! can read as an `i64` becomes [`Value::Integer`]; any other number (a
//! fraction, an exponent, or an integer outside `i64` such as `u64::MAX`)
//! becomes [`Value::Float`]. Equality never merges the two kinds, so `100`
//! in a query does not match `100.0` in a document.
//!
//! The reverse direction writes floats as JSON floats, so `Float(100.0)`
//! survives as `100.0`. NaN and the infinities have no JSON form and are
//! written as `null`, the same way [`Display`](std::fmt::Display) prints them.

use serde_json::Number;

use crate::{
    error::{MatchError, Result},
    value::{Map, Value},
};

fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Integer(i);
    }
    // without arbitrary_precision every number has an f64 form
    n.as_f64().map_or(Value::Null, Value::Float)
}

fn float_to_json(f: f64) -> serde_json::Value {
    match Number::from_f64(f) {
        Some(n) => serde_json::Value::Number(n),
        None => serde_json::Value::Null,
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Boolean(b),
            Json::Number(n) => number_to_value(&n),
            Json::String(s) => Value::String(s),
            Json::Array(items) => items.into_iter().map(Value::from).collect::<Vec<_>>().into(),
            Json::Object(fields) => fields
                .into_iter()
                .map(|(key, field)| (key, Value::from(field)))
                .collect::<Map>()
                .into(),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Value::Null => Json::Null,
            Value::Boolean(b) => Json::Bool(b),
            Value::Integer(i) => Json::Number(i.into()),
            Value::Float(f) => float_to_json(f),
            Value::String(s) => Json::String(s),
            Value::Array(items) => Json::Array(items.into_iter().map(Json::from).collect()),
            Value::Object(fields) => Json::Object(
                fields
                    .into_iter()
                    .map(|(key, field)| (key, Json::from(field)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Parses JSON text into a [`Value`].
    ///
    /// ```
    /// use jsonmatch::Value;
    ///
    /// let v = Value::from_json_str(r#"{"a": [1, 2.5]}"#).unwrap();
    /// assert_eq!(v.to_string(), r#"{"a":[1,2.5]}"#);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Value> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }
}

/// Parses JSON text that must hold an object, for use as a document.
pub fn document_from_json_str(text: &str) -> Result<Map> {
    match Value::from_json_str(text)? {
        Value::Object(map) => Ok(map),
        other => Err(MatchError::NotAMap {
            found: other.type_name(),
        }),
    }
}
