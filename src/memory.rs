//! In-memory row cursor.
//!
//! `MemoryCursor` serves buffered result sets through the [`RowCursor`]
//! contract. It backs [`Table::reader`](crate::Table::reader) and is the
//! cursor used throughout the tests.

use std::sync::Arc;

use crate::cursor::RowCursor;
use crate::error::{Error, Result};
use crate::types::{Column, ColumnInfo, DataType, Value};

/// One buffered result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    /// Column metadata.
    columns: Arc<ColumnInfo>,
    /// Rows, one value per column.
    rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Create a result set, checking that every row has one value per column.
    pub fn new(columns: impl Into<ColumnInfo>, rows: Vec<Vec<Value>>) -> Result<Self> {
        Self::with_column_info(Arc::new(columns.into()), rows)
    }

    pub(crate) fn with_column_info(
        columns: Arc<ColumnInfo>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self> {
        if let Some(row) = rows.iter().find(|r| r.len() != columns.len()) {
            return Err(Error::RowWidthMismatch {
                expected: columns.len(),
                actual: row.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    /// Get column metadata.
    pub fn columns(&self) -> &ColumnInfo {
        &self.columns
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the result set has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Cursor over one or more buffered result sets.
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    /// Result sets in order.
    sets: Vec<ResultSet>,
    /// Index of the current result set.
    set_pos: usize,
    /// Current row in the current set. `None` before the first `advance`.
    row_pos: Option<usize>,
}

impl MemoryCursor {
    /// Create a cursor over a single result set.
    pub fn new(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Result<Self> {
        Ok(Self::from_result_sets(vec![ResultSet::new(columns, rows)?]))
    }

    /// Create a cursor over several result sets, consumed via `next_result`.
    pub fn from_result_sets(sets: Vec<ResultSet>) -> Self {
        Self {
            sets,
            set_pos: 0,
            row_pos: None,
        }
    }

    /// Append another result set after the existing ones.
    pub fn with_result_set(mut self, columns: Vec<Column>, rows: Vec<Vec<Value>>) -> Result<Self> {
        self.sets.push(ResultSet::new(columns, rows)?);
        Ok(self)
    }

    /// Number of result sets.
    pub fn result_set_count(&self) -> usize {
        self.sets.len()
    }

    fn current_set(&self) -> Option<&ResultSet> {
        self.sets.get(self.set_pos)
    }

    fn column(&self, ordinal: usize) -> Result<&Column> {
        let count = self.field_count();
        self.current_set()
            .and_then(|set| set.columns.get(ordinal))
            .ok_or(Error::ColumnIndexOutOfBounds {
                index: ordinal,
                count,
            })
    }

    fn cell(&self, ordinal: usize) -> Result<&Value> {
        let row = self
            .current_set()
            .zip(self.row_pos)
            .and_then(|(set, pos)| set.rows.get(pos))
            .ok_or(Error::NoCurrentRow)?;
        row.get(ordinal).ok_or(Error::ColumnIndexOutOfBounds {
            index: ordinal,
            count: row.len(),
        })
    }
}

impl RowCursor for MemoryCursor {
    fn advance(&mut self) -> Result<bool> {
        let len = self.current_set().map_or(0, ResultSet::len);
        let next = self.row_pos.map_or(0, |pos| (pos + 1).min(len));
        self.row_pos = Some(next);
        Ok(next < len)
    }

    fn field_count(&self) -> usize {
        self.current_set().map_or(0, |set| set.columns.len())
    }

    fn name(&self, ordinal: usize) -> Result<&str> {
        Ok(self.column(ordinal)?.name.as_str())
    }

    fn data_type(&self, ordinal: usize) -> Result<DataType> {
        Ok(self.column(ordinal)?.data_type)
    }

    fn is_nullable(&self, ordinal: usize) -> Result<bool> {
        Ok(self.column(ordinal)?.nullable)
    }

    fn ordinal(&self, name: &str) -> Result<usize> {
        self.current_set()
            .and_then(|set| set.columns.find_by_name(name))
            .ok_or_else(|| Error::column_not_found(name))
    }

    fn is_null(&self, ordinal: usize) -> Result<bool> {
        Ok(self.cell(ordinal)?.is_null())
    }

    fn value(&self, ordinal: usize) -> Result<Value> {
        self.cell(ordinal).cloned()
    }

    fn read_bytes(
        &self,
        ordinal: usize,
        field_offset: u64,
        buffer: Option<&mut [u8]>,
        buffer_offset: usize,
        length: usize,
    ) -> Result<usize> {
        let data = match self.cell(ordinal)? {
            Value::Binary(data) => data,
            Value::Null => {
                return Err(Error::UnexpectedNull {
                    expected: DataType::Binary,
                })
            }
            other => {
                return Err(Error::TypeMismatch {
                    expected: DataType::Binary,
                    actual: other.data_type().unwrap_or(DataType::Binary),
                })
            }
        };

        let Some(buffer) = buffer else {
            return Ok(data.len());
        };

        let start = usize::try_from(field_offset).unwrap_or(usize::MAX).min(data.len());
        let room = buffer.len().saturating_sub(buffer_offset);
        let n = length.min(data.len() - start).min(room);
        if n == 0 {
            return Ok(0);
        }
        buffer[buffer_offset..buffer_offset + n].copy_from_slice(&data[start..start + n]);
        Ok(n)
    }

    fn next_result(&mut self) -> Result<bool> {
        if self.set_pos + 1 < self.sets.len() {
            self.set_pos += 1;
            self.row_pos = None;
            Ok(true)
        } else {
            let len = self.current_set().map_or(0, ResultSet::len);
            self.row_pos = Some(len);
            Ok(false)
        }
    }

    fn column_info(&self) -> Result<ColumnInfo> {
        Ok(self
            .current_set()
            .map(|set| set.columns.as_ref().clone())
            .unwrap_or_default())
    }
}
