//! Values stored by the shell

use bytes::Bytes;
use std::fmt;

/// Represents the values the shell can store
///
/// The engine itself is generic over its value type; this is the concrete
/// type the command layer parses arguments into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// String value (binary-safe)
    String(Bytes),

    /// Integer value
    Integer(i64),
}

impl Value {
    /// Create a string value
    pub fn string(bytes: impl Into<Bytes>) -> Self {
        Value::String(bytes.into())
    }

    /// Create an integer value
    pub fn integer(i: i64) -> Self {
        Value::Integer(i)
    }

    /// Parse a raw argument
    ///
    /// Only text already in canonical decimal form becomes an integer, so
    /// `007` or `+5` read back exactly as they were written.
    pub fn parse(raw: impl Into<Bytes>) -> Self {
        let raw = raw.into();
        std::str::from_utf8(&raw)
            .ok()
            .and_then(|s| s.parse::<i64>().ok().filter(|i| i.to_string() == s))
            .map(Value::Integer)
            .unwrap_or(Value::String(raw))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::Integer(i) => write!(f, "{}", i),
        }
    }
}
