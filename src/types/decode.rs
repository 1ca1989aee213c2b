//! Strict conversion from [`Value`] into Rust types.
//!
//! No coercion is performed: the stored variant must match the requested
//! type exactly. NULL only decodes into `Option<T>`.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{DataType, Value};
use crate::error::{Error, Result};

/// A type that can be read out of a [`Value`].
pub trait FromValue: Sized {
    /// Storage type this Rust type decodes from.
    const DATA_TYPE: DataType;

    /// Convert an owned value.
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch(expected: DataType, value: &Value) -> Error {
    match value.data_type() {
        Some(actual) => Error::TypeMismatch { expected, actual },
        None => Error::UnexpectedNull { expected },
    }
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromValue for $ty {
                const DATA_TYPE: DataType = DataType::$variant;

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(mismatch(Self::DATA_TYPE, &other)),
                    }
                }
            }
        )*
    };
}

impl_from_value! {
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
}

impl FromValue for Vec<u8> {
    const DATA_TYPE: DataType = DataType::Binary;

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Binary(v) => Ok(v),
            other => Err(mismatch(Self::DATA_TYPE, &other)),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const DATA_TYPE: DataType = T::DATA_TYPE;

    fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_value(value).map(Some)
    }
}
