//! The row cursor contract.
//!
//! `RowCursor` is the collaborator every extension in this crate is built on.
//! It is implemented by the data-access layer that executes queries; this
//! crate never opens, advances on its own, or closes a cursor outside the
//! bulk read operations.

use crate::error::{Error, Result};
use crate::ordinal::ordinal_of;
use crate::types::{Column, ColumnInfo, DataType, FromValue, Value};

/// Forward-only, single-pass cursor over a query result.
///
/// Implementations are not expected to be thread-safe; every method takes
/// `&self` or `&mut self`, so one caller at a time is enforced by borrowing.
///
/// # Example
///
/// ```
/// use rowcursor_ext::{Column, DataType, MemoryCursor, RowCursor, Value};
///
/// # fn main() -> rowcursor_ext::Result<()> {
/// let mut cursor = MemoryCursor::new(
///     vec![Column::new("ID", DataType::Int32)],
///     vec![vec![Value::Int32(1)], vec![Value::Int32(2)]],
/// )?;
///
/// let mut total = 0;
/// while cursor.advance()? {
///     total += cursor.get::<i32>(0)?;
/// }
/// assert_eq!(total, 3);
/// # Ok(())
/// # }
/// ```
pub trait RowCursor {
    /// Move to the next row. Returns `false` once the result set is exhausted,
    /// and keeps returning `false` afterwards.
    fn advance(&mut self) -> Result<bool>;

    /// Number of fields in the current result set.
    fn field_count(&self) -> usize;

    /// Name of the field at `ordinal`.
    fn name(&self, ordinal: usize) -> Result<&str>;

    /// Storage type of the field at `ordinal`.
    fn data_type(&self, ordinal: usize) -> Result<DataType>;

    /// Whether the field at `ordinal` may hold NULL.
    fn is_nullable(&self, _ordinal: usize) -> Result<bool> {
        Ok(true)
    }

    /// Resolve a field name to its ordinal (case-insensitive).
    ///
    /// Returns `Error::ColumnNotFound` for unknown names.
    fn ordinal(&self, name: &str) -> Result<usize> {
        ordinal_of(self, name).ok_or_else(|| Error::column_not_found(name))
    }

    /// Whether the field at `ordinal` holds the NULL sentinel on the current row.
    fn is_null(&self, ordinal: usize) -> Result<bool>;

    /// Raw value of the field at `ordinal` on the current row.
    fn value(&self, ordinal: usize) -> Result<Value>;

    /// Typed value of the field at `ordinal` on the current row.
    ///
    /// Fails with `Error::TypeMismatch` when the stored type differs from `T`.
    fn get<T: FromValue>(&self, ordinal: usize) -> Result<T> {
        T::from_value(self.value(ordinal)?)
    }

    /// Chunked binary read.
    ///
    /// Copies up to `length` bytes of the field at `ordinal`, starting at
    /// `field_offset`, into `buffer[buffer_offset..]`, and returns the number of
    /// bytes copied. With `buffer == None` nothing is copied and the total
    /// length of the field is returned.
    fn read_bytes(
        &self,
        ordinal: usize,
        field_offset: u64,
        buffer: Option<&mut [u8]>,
        buffer_offset: usize,
        length: usize,
    ) -> Result<usize>;

    /// Move to the next result set. Returns `false` when there is none.
    fn next_result(&mut self) -> Result<bool> {
        Ok(false)
    }

    /// Schema of the current result set.
    fn column_info(&self) -> Result<ColumnInfo> {
        let columns: Result<Vec<Column>> = (0..self.field_count())
            .map(|i| {
                Ok(Column::new(self.name(i)?, self.data_type(i)?)
                    .with_nullable(self.is_nullable(i)?))
            })
            .collect();
        Ok(ColumnInfo::new(columns?))
    }
}
