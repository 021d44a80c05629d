//! Command replies
//!
//! Defines the result a command hands back to the shell.

use crate::store::Value;
use std::fmt;

/// Reply types
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Status line: OK
    Status(String),

    /// Errors: ERR message
    Error(String),

    /// Integers: (integer) 1
    Integer(i64),

    /// A stored value
    Value(Value),

    /// Free-form text block (INFO)
    Text(String),

    /// Absent value: (nil)
    Nil,
}

impl Reply {
    /// The plain OK status
    pub fn ok() -> Self {
        Reply::Status("OK".to_string())
    }

    /// Create an error
    pub fn error(s: impl Into<String>) -> Self {
        Reply::Error(s.into())
    }

    /// Create an integer
    pub fn integer(i: i64) -> Self {
        Reply::Integer(i)
    }

    /// Create a nil reply
    pub fn nil() -> Self {
        Reply::Nil
    }

    /// Check if this is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }
}

impl From<Option<&Value>> for Reply {
    fn from(value: Option<&Value>) -> Self {
        match value {
            Some(v) => Reply::Value(v.clone()),
            None => Reply::Nil,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Status(s) => write!(f, "{}", s),
            Reply::Error(e) => write!(f, "ERR {}", e),
            Reply::Integer(i) => write!(f, "(integer) {}", i),
            Reply::Value(v) => write!(f, "{}", v),
            Reply::Text(t) => write!(f, "{}", t.trim_end()),
            Reply::Nil => write!(f, "(nil)"),
        }
    }
}
