//! Error types for row cursor access.

use thiserror::Error;

use crate::types::DataType;

/// Result type alias for cursor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for row cursor operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Column not found.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Stored value does not have the requested type.
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: DataType, actual: DataType },

    /// NULL found where a non-nullable value was requested.
    #[error("Unexpected NULL value (expected {expected})")]
    UnexpectedNull { expected: DataType },

    /// A value was requested before `advance` or after the last row.
    #[error("No current row")]
    NoCurrentRow,

    /// The binary reader returned fewer bytes than the reported length.
    #[error("Short binary read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// A row does not have one value per column.
    #[error("Row has {actual} values but the result set has {expected} columns")]
    RowWidthMismatch { expected: usize, actual: usize },

    /// Failure raised by the underlying cursor implementation.
    #[error("Cursor error: {message}")]
    Cursor { message: String },
}

impl Error {
    /// Create a column-not-found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create a cursor error.
    pub fn cursor(message: impl Into<String>) -> Self {
        Self::Cursor {
            message: message.into(),
        }
    }
}
