//! A small JSON reader built from a hand-written tokenizer and a
//! shift-reduce parser.
//!
//! Tokens are shifted onto a single explicit stack; every `}` or `]` folds
//! the entries above its opener into one object or array value. There is no
//! recursion, so nesting depth only costs stack entries.
//!
//! Strings are returned with their surrounding quotes removed and every
//! escape sequence left as written (`"a\nb"` yields the four characters
//! `a`, `\`, `n`, `b`). Numbers are signed integers only. Empty containers
//! (`{}` and `[]`) are not accepted.
//!
//! ```
//! use json_stack_parser::{parse, Value};
//!
//! let value = parse(r#"{"a": [1, {"b": true}]}"#).unwrap();
//! let items = value.get("a").and_then(Value::as_array).unwrap();
//! assert_eq!(items[0], Value::Integer(1));
//! assert_eq!(items[1].get("b"), Some(&Value::Boolean(true)));
//!
//! assert_eq!(parse(r#"{"a":1,}"#), None);
//! ```

use std::collections::HashMap;
use std::fmt;

pub mod classify;
pub mod limits;
mod parse;
pub mod tokenize;

pub use limits::{LimitError, Limits};
pub use parse::{parse, parse_with_limits, try_parse, ParseError, StructureError};
pub use tokenize::TokenizeError;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// literal characters `null`
    Null,

    /// literal characters `true` or `false`
    Boolean(bool),

    /// a decimal digit run with an optional sign
    Integer(i64),

    /// reserved for fractional numbers, which the tokenizer does not produce
    Float(f64),

    /// the characters between the double quotes, escapes untouched
    String(String),

    /// an array of values
    Array(Vec<Value>),

    /// an object with key-value pairs
    Object(HashMap<String, Value>),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Boolean(false).as_bool(), Some(false));
        assert_eq!(Value::Integer(-4).as_i64(), Some(-4));
        assert_eq!(Value::String("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Integer(1).as_str(), None);
        assert_eq!(Value::Null.get("a"), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Value::Array(vec![]).kind().to_string(), "array");
        assert_eq!(Value::Float(0.5).kind(), Kind::Float);
    }
}
