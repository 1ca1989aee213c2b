//! Immutable row snapshot.

use std::sync::Arc;

use super::column::{Column, ColumnInfo};
use super::decode::FromValue;
use super::value::Value;
use crate::error::{Error, Result};

/// Every field of one row, captured at one cursor position.
///
/// Unlike a [`RowView`](crate::enumerate::RowView), a record stays valid after
/// the cursor advances.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Column values.
    values: Vec<Value>,
    /// Shared column information (reference counted).
    column_info: Arc<ColumnInfo>,
}

impl Record {
    /// Create a new record with values and shared column info.
    pub fn new(values: Vec<Value>, column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values,
            column_info,
        }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&Value> {
        self.column_info
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Decode the value of a named column.
    pub fn try_get<T: FromValue>(&self, name: &str) -> Result<T> {
        let value = self
            .get_by_name(name)
            .ok_or_else(|| Error::column_not_found(name))?;
        T::from_value(value.clone())
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Get column information.
    pub fn columns(&self) -> &[Column] {
        &self.column_info.columns
    }

    /// Get the shared column information.
    pub fn column_info(&self) -> &Arc<ColumnInfo> {
        &self.column_info
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Consume the record, returning its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl IntoIterator for Record {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
