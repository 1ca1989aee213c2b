//! Column storage type enum.
//!
//! Nullability is a column property, not a type property, so there is no
//! `Null` data type.

/// Storage type of a column or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Variable-length text.
    String,
    /// Boolean.
    Boolean,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Single-precision float.
    Float,
    /// Double-precision float.
    Double,
    /// Fixed-point decimal.
    Decimal,
    /// Date/time without offset.
    DateTime,
    /// Date/time with UTC offset.
    DateTimeOffset,
    /// 128-bit unique identifier.
    Guid,
    /// Binary large object.
    Binary,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::String => "STRING",
            DataType::Boolean => "BOOLEAN",
            DataType::Byte => "BYTE",
            DataType::Int16 => "INT16",
            DataType::Int32 => "INT32",
            DataType::Int64 => "INT64",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
            DataType::Decimal => "DECIMAL",
            DataType::DateTime => "DATETIME",
            DataType::DateTimeOffset => "DATETIMEOFFSET",
            DataType::Guid => "GUID",
            DataType::Binary => "BINARY",
        };
        f.write_str(name)
    }
}
