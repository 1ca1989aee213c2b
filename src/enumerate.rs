//! Iteration and materialization over a cursor.
//!
//! Two iteration styles are offered:
//!
//! - [`RowViews`] hands out a [`RowView`] borrowing the cursor itself. The view
//!   reads whatever row the cursor is on, so it must be dropped before the next
//!   call to [`RowViews::next`]; the borrow checker enforces this.
//! - [`Records`] captures every field into an owned [`Record`] and is a plain
//!   `Iterator`.
//!
//! Both advance the cursor once per row and leave it exhausted.

use std::ops::Deref;
use std::sync::Arc;

use futures::Stream;
use log::debug;

use crate::cursor::RowCursor;
use crate::error::{Error, Result};
use crate::types::{ColumnInfo, DataSet, Record, Table};

/// Borrowed view of the cursor's current row.
///
/// Dereferences to the cursor, so every [`RowCursor`] and
/// [`RowCursorExt`](crate::RowCursorExt) read method is available on it.
pub struct RowView<'c, C: RowCursor + ?Sized> {
    cursor: &'c C,
}

impl<'c, C: RowCursor + ?Sized> RowView<'c, C> {
    /// Capture the current row into an owned record.
    pub fn to_record(&self) -> Result<Record> {
        capture_record(self.cursor, &Arc::new(self.cursor.column_info()?))
    }
}

impl<C: RowCursor + ?Sized> Deref for RowView<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.cursor
    }
}

/// Lazy, single-pass sequence of views over the same advancing cursor.
///
/// # Example
///
/// ```
/// use rowcursor_ext::{Column, DataType, MemoryCursor, RowCursorExt, Value};
///
/// # fn main() -> rowcursor_ext::Result<()> {
/// let mut cursor = MemoryCursor::new(
///     vec![Column::new("NAME", DataType::String)],
///     vec![vec![Value::from("a")], vec![Value::Null]],
/// )?;
///
/// let mut names = Vec::new();
/// let mut rows = cursor.as_enumerable();
/// while let Some(row) = rows.next()? {
///     names.push(row.get_safe_string_or_empty("name")?);
/// }
/// assert_eq!(names, vec!["a".to_string(), String::new()]);
/// # Ok(())
/// # }
/// ```
pub struct RowViews<'c, C: RowCursor + ?Sized> {
    cursor: &'c mut C,
    done: bool,
}

impl<'c, C: RowCursor + ?Sized> RowViews<'c, C> {
    pub(crate) fn new(cursor: &'c mut C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }

    /// Advance the cursor and return a view of the new row.
    ///
    /// Returns `Ok(None)` when exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<RowView<'_, C>>> {
        if self.done {
            return Ok(None);
        }
        if self.cursor.advance()? {
            Ok(Some(RowView {
                cursor: &*self.cursor,
            }))
        } else {
            self.done = true;
            Ok(None)
        }
    }
}

/// Lazy, single-pass iterator of row snapshots.
///
/// Fused: after exhaustion or an error it yields `None`.
pub struct Records<'c, C: RowCursor + ?Sized> {
    cursor: &'c mut C,
    columns: Option<Arc<ColumnInfo>>,
    done: bool,
}

impl<'c, C: RowCursor + ?Sized> Records<'c, C> {
    pub(crate) fn new(cursor: &'c mut C) -> Self {
        Self {
            cursor,
            columns: None,
            done: false,
        }
    }

    fn read_next(&mut self) -> Result<Option<Record>> {
        if !self.cursor.advance()? {
            return Ok(None);
        }
        let columns = match &self.columns {
            Some(columns) => Arc::clone(columns),
            None => {
                let columns = Arc::new(self.cursor.column_info()?);
                self.columns = Some(Arc::clone(&columns));
                columns
            }
        };
        capture_record(&*self.cursor, &columns).map(Some)
    }

    /// Convert into a `Stream` yielding `Result<Record>`.
    ///
    /// Each poll reads one row synchronously.
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> + 'c {
        futures::stream::iter(self)
    }
}

impl<C: RowCursor + ?Sized> Iterator for Records<'_, C> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_next() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<C: RowCursor + ?Sized> std::iter::FusedIterator for Records<'_, C> {}

/// Snapshot every field of the current row.
pub(crate) fn capture_record<C>(cursor: &C, columns: &Arc<ColumnInfo>) -> Result<Record>
where
    C: RowCursor + ?Sized,
{
    let values: Result<Vec<_>> = (0..cursor.field_count()).map(|i| cursor.value(i)).collect();
    Ok(Record::new(values?, Arc::clone(columns)))
}

/// Invoke `action` once per remaining row, in order. Returns the number of
/// completed invocations.
///
/// The first error, from the action or the cursor, stops the loop and is
/// returned. Rows already handled are not revisited.
pub fn read_all<C, F, E>(cursor: &mut C, mut action: F) -> std::result::Result<usize, E>
where
    C: RowCursor + ?Sized,
    F: FnMut(RowView<'_, C>) -> std::result::Result<(), E>,
    E: From<Error>,
{
    let mut count = 0;
    while cursor.advance()? {
        action(RowView { cursor: &*cursor })?;
        count += 1;
    }
    Ok(count)
}

/// Read the current result set, schema and rows, into a [`Table`].
pub fn read_table<C: RowCursor + ?Sized>(cursor: &mut C) -> Result<Table> {
    let columns = Arc::new(cursor.column_info()?);
    let mut rows = Vec::new();
    while cursor.advance()? {
        rows.push(capture_record(&*cursor, &columns)?);
    }
    debug!("read table: {} columns, {} rows", columns.len(), rows.len());
    Ok(Table::new(columns, rows))
}

/// Read every remaining result set into a [`DataSet`].
pub fn read_data_set<C: RowCursor + ?Sized>(cursor: &mut C) -> Result<DataSet> {
    let mut tables = vec![read_table(cursor)?];
    while cursor.next_result()? {
        tables.push(read_table(cursor)?);
    }
    debug!("read data set: {} tables", tables.len());
    Ok(DataSet::new(tables))
}
