//! Ordinal resolution by field name.

use crate::cursor::RowCursor;
use crate::types::names_match;

/// Find the ordinal of `name` by scanning every field name of the current
/// result set. Case-insensitive; first match wins. `None` when absent.
pub fn ordinal_of<C: RowCursor + ?Sized>(cursor: &C, name: &str) -> Option<usize> {
    (0..cursor.field_count()).find(|&i| cursor.name(i).is_ok_and(|n| names_match(n, name)))
}

/// Whether the current result set has a field called `name`.
pub fn field_exists<C: RowCursor + ?Sized>(cursor: &C, name: &str) -> bool {
    ordinal_of(cursor, name).is_some()
}
