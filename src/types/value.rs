//! Cell value type for result sets.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;
use uuid::Uuid;

use super::DataType;

/// A single cell value, or the null sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL sentinel. Distinct from any zero or empty value.
    Null,
    /// Text value.
    String(String),
    /// Boolean value.
    Boolean(bool),
    /// Unsigned byte.
    Byte(u8),
    /// 16-bit integer.
    Int16(i16),
    /// 32-bit integer.
    Int32(i32),
    /// 64-bit integer.
    Int64(i64),
    /// Single-precision float.
    Float(f32),
    /// Double-precision float.
    Double(f64),
    /// Fixed-point decimal.
    Decimal(Decimal),
    /// Date/time without offset.
    DateTime(NaiveDateTime),
    /// Date/time with offset.
    DateTimeOffset(DateTime<FixedOffset>),
    /// Unique identifier.
    Guid(Uuid),
    /// Binary data.
    Binary(Vec<u8>),
}

impl Value {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Storage type of the value, `None` for NULL.
    pub fn data_type(&self) -> Option<DataType> {
        let ty = match self {
            Value::Null => return None,
            Value::String(_) => DataType::String,
            Value::Boolean(_) => DataType::Boolean,
            Value::Byte(_) => DataType::Byte,
            Value::Int16(_) => DataType::Int16,
            Value::Int32(_) => DataType::Int32,
            Value::Int64(_) => DataType::Int64,
            Value::Float(_) => DataType::Float,
            Value::Double(_) => DataType::Double,
            Value::Decimal(_) => DataType::Decimal,
            Value::DateTime(_) => DataType::DateTime,
            Value::DateTimeOffset(_) => DataType::DateTimeOffset,
            Value::Guid(_) => DataType::Guid,
            Value::Binary(_) => DataType::Binary,
        };
        Some(ty)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as binary data.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Binary(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::String(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Byte(n) => write!(f, "{}", n),
            Value::Int16(n) => write!(f, "{}", n),
            Value::Int32(n) => write!(f, "{}", n),
            Value::Int64(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Double(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Value::DateTimeOffset(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S %:z")),
            Value::Guid(g) => write!(f, "{}", g),
            Value::Binary(bytes) => write!(f, "<BINARY: {} bytes>", bytes.len()),
        }
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_for_value! {
    String => String,
    bool => Boolean,
    u8 => Byte,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float,
    f64 => Double,
    Decimal => Decimal,
    NaiveDateTime => DateTime,
    DateTime<FixedOffset> => DateTimeOffset,
    Uuid => Guid,
    Vec<u8> => Binary,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let val = Value::Null;
        assert!(val.is_null());
        assert_eq!(val.data_type(), None);
        assert_eq!(val.as_str(), None);
        assert_eq!(format!("{}", val), "NULL");
    }

    #[test]
    fn test_value_string() {
        let val = Value::from("hello");
        assert!(!val.is_null());
        assert_eq!(val.data_type(), Some(DataType::String));
        assert_eq!(val.as_str(), Some("hello"));
        assert_eq!(format!("{}", val), "hello");
    }

    #[test]
    fn test_value_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(7i64)), Value::Int64(7));
    }

    #[test]
    fn test_value_binary_display() {
        let val = Value::from(vec![1u8, 2, 3]);
        assert_eq!(val.as_bytes(), Some([1u8, 2, 3].as_slice()));
        assert_eq!(format!("{}", val), "<BINARY: 3 bytes>");
    }
}
