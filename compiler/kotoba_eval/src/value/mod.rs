//! Runtime values.
//!
//! Kotoba has no user-defined composite types: a value is a number, a
//! string, a boolean, the empty marker, or a host-provided output sink.

use std::fmt;
use std::sync::Arc;

use crate::sink::SharedSink;

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    /// All numbers are double-precision floats.
    Number(f64),
    Str(String),
    Bool(bool),
    /// The no-value marker (`空`).
    Empty,
    /// Host-provided output capability.
    Sink(SharedSink),
}

impl Value {
    /// Japanese type name used in messages and by デバッグ表示.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "数値",
            Value::Str(_) => "文字列",
            Value::Bool(_) => "真偽値",
            Value::Empty => "空",
            Value::Sink(_) => "出力先",
        }
    }

    /// Conditional truthiness: everything except `偽` and `空` is true.
    ///
    /// Zero and the empty string are truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Empty)
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Empty, Value::Empty) => true,
            (Value::Sink(a), Value::Sink(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("真"),
            Value::Bool(false) => f.write_str("偽"),
            Value::Empty => f.write_str("空"),
            Value::Sink(sink) => write!(f, "<出力先:{}>", sink.label()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<SharedSink> for Value {
    fn from(sink: SharedSink) -> Self {
        Value::Sink(sink)
    }
}

#[cfg(test)]
mod tests;
