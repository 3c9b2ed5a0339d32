//! Compact JSON rendering for [`Value`].
//!
//! Used by `Display`, which in turn feeds log events and error messages.
//! Output is deterministic since object keys are already sorted. Floats keep
//! a fractional part (`100.0`) so the integer/float distinction stays
//! visible; NaN and infinities have no JSON form and print as `null`.
//!
//! # Examples
//!
//! ```
//! use jsonmatch::{Map, Value};
//!
//! let mut obj = Map::new();
//! obj.insert("name".to_string(), Value::from("Alice"));
//! obj.insert("age".to_string(), Value::Integer(30));
//! obj.insert("score".to_string(), Value::Float(9.0));
//!
//! assert_eq!(Value::Object(obj).to_string(), r#"{"age":30,"name":"Alice","score":9.0}"#);
//! ```

use std::fmt::{self, Write};

use crate::value::{Map, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) if n.is_finite() => write!(f, "{:?}", n),
            Value::Float(_) => f.write_str("null"),
            Value::String(s) => write_escaped(f, s),
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_char(']')
            }
            Value::Object(map) => write_object(f, map),
        }
    }
}

/// Writes an object without wrapping it in a [`Value`].
pub(crate) fn write_object(f: &mut fmt::Formatter<'_>, map: &Map) -> fmt::Result {
    f.write_char('{')?;
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write_escaped(f, key)?;
        write!(f, ":{}", value)?;
    }
    f.write_char('}')
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
