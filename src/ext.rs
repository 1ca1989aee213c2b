//! Extension trait bundling every accessor over a [`RowCursor`].

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::binary::{self, BinaryReadOptions};
use crate::cursor::RowCursor;
use crate::enumerate::{self, Records, RowView, RowViews};
use crate::error::{Error, Result};
use crate::fill::{self, Fill};
use crate::ordinal;
use crate::safe;
use crate::types::{DataSet, FromValue, Table};

macro_rules! safe_getters {
    ($($ty:ty => $nullable:ident, $defaulted:ident;)*) => {
        $(
            #[doc = concat!("Read a `", stringify!($ty), "` column by name, `None` on NULL.")]
            fn $nullable(&self, name: &str) -> Result<Option<$ty>> {
                safe::get_safe(self, name)
            }

            #[doc = concat!("Read a `", stringify!($ty), "` column by name, `default` on NULL.")]
            fn $defaulted(&self, name: &str, default: $ty) -> Result<$ty> {
                safe::get_safe_or(self, name, default)
            }
        )*
    };
}

/// Convenience accessors available on every [`RowCursor`].
///
/// Only [`as_enumerable`](Self::as_enumerable),
/// [`read_all_records`](Self::read_all_records), [`read_all`](Self::read_all),
/// [`read_table`](Self::read_table) and [`read_data_set`](Self::read_data_set)
/// advance the cursor.
pub trait RowCursorExt: RowCursor {
    /// Ordinal of `name`, case-insensitive. `None` when absent.
    fn ordinal_of(&self, name: &str) -> Option<usize> {
        ordinal::ordinal_of(self, name)
    }

    /// Whether a field called `name` exists, case-insensitive.
    fn field_exists(&self, name: &str) -> bool {
        ordinal::field_exists(self, name)
    }

    /// Read any [`FromValue`] column by name, `None` on NULL.
    fn get_safe<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        safe::get_safe(self, name)
    }

    /// Read any [`FromValue`] column by name, `default` on NULL.
    fn get_safe_or<T: FromValue>(&self, name: &str, default: T) -> Result<T> {
        safe::get_safe_or(self, name, default)
    }

    /// Read a string column by name, `None` on NULL.
    fn get_safe_string(&self, name: &str) -> Result<Option<String>> {
        safe::get_safe(self, name)
    }

    /// Read a string column by name, `default` on NULL.
    fn get_safe_string_or(&self, name: &str, default: impl Into<String>) -> Result<String> {
        Ok(self
            .get_safe_string(name)?
            .unwrap_or_else(|| default.into()))
    }

    /// Read a string column by name, the empty string on NULL.
    fn get_safe_string_or_empty(&self, name: &str) -> Result<String> {
        Ok(self.get_safe_string(name)?.unwrap_or_default())
    }

    safe_getters! {
        bool => get_safe_bool, get_safe_bool_or;
        u8 => get_safe_byte, get_safe_byte_or;
        Decimal => get_safe_decimal, get_safe_decimal_or;
        f64 => get_safe_double, get_safe_double_or;
        f32 => get_safe_float, get_safe_float_or;
        i16 => get_safe_i16, get_safe_i16_or;
        i32 => get_safe_i32, get_safe_i32_or;
        i64 => get_safe_i64, get_safe_i64_or;
        NaiveDateTime => get_safe_date_time, get_safe_date_time_or;
        Uuid => get_safe_guid, get_safe_guid_or;
    }

    /// Read a GUID column by name, the nil UUID on NULL.
    fn get_safe_guid_or_empty(&self, name: &str) -> Result<Uuid> {
        self.get_safe_guid_or(name, Uuid::nil())
    }

    /// Read a DateTime column as a DateTime at offset zero.
    ///
    /// NULL and the zero DateTime both give `None`.
    fn get_safe_date_time_offset(&self, name: &str) -> Result<Option<DateTime<FixedOffset>>> {
        safe::get_safe_date_time_offset(self, name)
    }

    /// Read a DateTime column as a DateTime at offset zero.
    ///
    /// NULL and the zero DateTime both give `default`.
    fn get_safe_date_time_offset_or(
        &self,
        name: &str,
        default: DateTime<FixedOffset>,
    ) -> Result<DateTime<FixedOffset>> {
        Ok(self.get_safe_date_time_offset(name)?.unwrap_or(default))
    }

    /// Read a whole binary column with the streaming strategy.
    fn get_bytes(&self, ordinal: usize) -> Result<Vec<u8>> {
        self.get_bytes_with(ordinal, &BinaryReadOptions::default())
    }

    /// Read a whole binary column, by name, with the streaming strategy.
    fn get_bytes_by_name(&self, name: &str) -> Result<Vec<u8>> {
        self.get_bytes(self.ordinal(name)?)
    }

    /// Read a whole binary column with explicit options.
    fn get_bytes_with(&self, ordinal: usize, options: &BinaryReadOptions) -> Result<Vec<u8>> {
        binary::read_bytes_with(self, ordinal, options)
    }

    /// Single-pass iteration yielding views of the cursor's current row.
    fn as_enumerable(&mut self) -> RowViews<'_, Self> {
        RowViews::new(self)
    }

    /// Single-pass iteration yielding owned row snapshots.
    fn read_all_records(&mut self) -> Records<'_, Self> {
        Records::new(self)
    }

    /// Invoke `action` on every remaining row; returns the row count.
    fn read_all<F, E>(&mut self, action: F) -> std::result::Result<usize, E>
    where
        F: FnMut(RowView<'_, Self>) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        enumerate::read_all(self, action)
    }

    /// Materialize the current result set.
    fn read_table(&mut self) -> Result<Table> {
        enumerate::read_table(self)
    }

    /// Materialize every remaining result set.
    fn read_data_set(&mut self) -> Result<DataSet> {
        enumerate::read_data_set(self)
    }

    /// Copy matching fields of the current row onto `target`.
    fn fill<'t, T: Fill>(&self, target: &'t mut T) -> Result<&'t mut T> {
        fill::fill(self, target)
    }
}

impl<C: RowCursor + ?Sized> RowCursorExt for C {}
