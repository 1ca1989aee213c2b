//! Materialized result sets.

use std::sync::Arc;

use super::column::ColumnInfo;
use super::record::Record;
use crate::error::Result;
use crate::memory::{MemoryCursor, ResultSet};

/// One result set read fully into memory: schema plus every row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column metadata shared with every row.
    columns: Arc<ColumnInfo>,
    /// Rows in cursor order.
    rows: Vec<Record>,
}

impl Table {
    /// Create a table from its schema and rows.
    pub fn new(columns: Arc<ColumnInfo>, rows: Vec<Record>) -> Self {
        Self { columns, rows }
    }

    /// Get column metadata.
    pub fn columns(&self) -> &ColumnInfo {
        &self.columns
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.column_names()
    }

    /// Get all rows.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Get a row by index.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over rows.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.rows.iter()
    }

    /// Open a cursor over a copy of this table.
    pub fn reader(&self) -> Result<MemoryCursor> {
        Ok(MemoryCursor::from_result_sets(vec![self.to_result_set()?]))
    }

    fn to_result_set(&self) -> Result<ResultSet> {
        let rows = self.rows.iter().map(|r| r.values().to_vec()).collect();
        ResultSet::with_column_info(Arc::clone(&self.columns), rows)
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Every result set of a cursor, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    tables: Vec<Table>,
}

impl DataSet {
    /// Create a data set from tables.
    pub fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// Get all tables.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Get a table by index.
    pub fn get(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    /// Get the number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Check if there are no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Open a cursor over a copy of every table, one result set each.
    pub fn reader(&self) -> Result<MemoryCursor> {
        let sets: Result<Vec<ResultSet>> = self.tables.iter().map(Table::to_result_set).collect();
        Ok(MemoryCursor::from_result_sets(sets?))
    }
}

impl IntoIterator for DataSet {
    type Item = Table;
    type IntoIter = std::vec::IntoIter<Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}
