//! Runtime value representation for the ylang machine.
//!
//! Values are what live on the operand stack and in the variable store.

use std::fmt;

/// Runtime value representation.
///
/// A block of instructions is not a separate variant: it is a `Text` whose
/// content happens to be instruction lines. Only `IF` and `REPEAT` ever
/// interpret text as code.
///
/// The derived ordering is total: every `Integer` sorts before every `Text`,
/// integers compare numerically and texts compare lexicographically by
/// Unicode scalar value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// Signed 64-bit integer.
    Integer(i64),
    /// Verbatim text.
    Text(String),
}

impl Value {
    /// Build a `Text` value.
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Truthiness used by `IF`: nonzero integers and non-empty texts.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(n) => *n != 0,
            Value::Text(s) => !s.is_empty(),
        }
    }

    /// Boolean result of a comparison instruction.
    pub fn from_bool(b: bool) -> Self {
        Value::Integer(i64::from(b))
    }
}

/// Bare textual form: decimal for integers, verbatim for texts.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare() {
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::text("hello world").to_string(), "hello world");
        assert_eq!(Value::text("").to_string(), "");
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Value::Integer(1), Value::Integer(1));
        assert_ne!(Value::Integer(1), Value::text("1"));
        assert_eq!(Value::text("a"), Value::text("a"));
    }

    #[test]
    fn integers_order_before_texts() {
        assert!(Value::Integer(i64::MAX) < Value::text(""));
        assert!(Value::text("0") > Value::Integer(0));
    }

    #[test]
    fn ordering_within_variant() {
        assert!(Value::Integer(-3) < Value::Integer(2));
        assert!(Value::text("abc") < Value::text("abd"));
        assert!(Value::text("b") > Value::text("abc"));
    }

    #[test]
    fn truthiness() {
        assert!(Value::Integer(1).is_truthy());
        assert!(Value::Integer(-1).is_truthy());
        assert!(!Value::Integer(0).is_truthy());
        assert!(Value::text("0").is_truthy());
        assert!(!Value::text("").is_truthy());
    }

    #[test]
    fn from_bool() {
        assert_eq!(Value::from_bool(true), Value::Integer(1));
        assert_eq!(Value::from_bool(false), Value::Integer(0));
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(7), Value::Integer(7));
        assert_eq!(Value::from("x"), Value::text("x"));
        assert_eq!(Value::from(String::from("y")), Value::text("y"));
    }
}
