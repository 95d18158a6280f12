//! Structured key/value fields attached to log records

use std::fmt;
use std::time::Duration;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    /// Rendered through the layout's duration encoder
    Duration(Duration),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Uint(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Duration(d) => write!(f, "{:?}", d),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::Uint(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::Uint(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::Uint(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Duration> for FieldValue {
    fn from(d: Duration) -> Self {
        FieldValue::Duration(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A single key/value pair carried by a record.
///
/// # Example
///
/// ```
/// use common_logger::Field;
/// use std::time::Duration;
///
/// let fields = vec![
///     Field::new("user_id", 42),
///     Field::new("elapsed", Duration::from_millis(1500)),
///     Field::error(&std::io::Error::other("disk full")),
/// ];
/// assert_eq!(fields[2].key, "error");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// An `error` field holding the error's display text
    pub fn error(err: &dyn std::error::Error) -> Self {
        Self::new("error", err.to_string())
    }
}

impl<K, V> From<(K, V)> for Field
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from((key, value): (K, V)) -> Self {
        Field::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_conversions() {
        assert_eq!(Field::new("a", "x").value, FieldValue::String("x".into()));
        assert_eq!(Field::new("a", 7).value, FieldValue::Int(7));
        assert_eq!(Field::new("a", 7u32).value, FieldValue::Uint(7));
        assert_eq!(Field::new("a", true).value, FieldValue::Bool(true));
        assert_eq!(Field::new("a", None::<i32>).value, FieldValue::Null);
        assert_eq!(
            Field::new("a", Duration::from_secs(2)).value,
            FieldValue::Duration(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_from_tuple() {
        let field: Field = ("request_id", "abc-123").into();
        assert_eq!(field.key, "request_id");
        assert_eq!(field.value.to_string(), "abc-123");
    }

    #[test]
    fn test_error_field() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing config");
        let field = Field::error(&err);
        assert_eq!(field.key, "error");
        assert_eq!(field.value, FieldValue::String("missing config".into()));
    }
}
