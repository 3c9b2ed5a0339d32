use std::collections::BTreeMap;

/// String-keyed mapping used for documents and query objects.
///
/// Ordered by key so that combinators visit fields in a stable order.
pub type Map = BTreeMap<String, Value>;

/// A dynamically shaped value shared by queries and documents.
///
/// The set of variants is closed: every dispatch point in the matcher handles
/// each of them explicitly.
///
/// # Type Preservation
///
/// Integers and floats are distinct kinds. Equality never crosses the
/// boundary (`100` is not `100.0`), while the ordering comparators coerce the
/// document side into the domain chosen by the query side.
///
/// # Examples
///
/// ```
/// use jsonmatch::{Map, Value};
///
/// let integer = Value::Integer(42);
/// let float = Value::Float(42.0);
/// assert_ne!(integer, float);
///
/// let mut obj = Map::new();
/// obj.insert("key".to_string(), Value::from("value"));
/// let object = Value::Object(obj);
/// assert_eq!(object.type_name(), "object");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// JSON boolean (true/false)
    Boolean(bool),

    /// Integer number (kept apart from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Ordered list of values
    Array(Vec<Value>),

    /// Object with string keys
    Object(Map),
}

impl Value {
    /// Human-readable kind name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}
