//! Null-safe typed getters by column name.
//!
//! Every getter resolves the ordinal on each call, checks the null sentinel,
//! and only then performs the typed read. An unknown column name is an error;
//! NULL never is.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};

use crate::cursor::RowCursor;
use crate::error::Result;
use crate::types::FromValue;

/// Read a named column, `None` on NULL.
pub fn get_safe<C, T>(cursor: &C, name: &str) -> Result<Option<T>>
where
    C: RowCursor + ?Sized,
    T: FromValue,
{
    let ordinal = cursor.ordinal(name)?;
    if cursor.is_null(ordinal)? {
        return Ok(None);
    }
    cursor.get::<T>(ordinal).map(Some)
}

/// Read a named column, `default` on NULL.
pub fn get_safe_or<C, T>(cursor: &C, name: &str, default: T) -> Result<T>
where
    C: RowCursor + ?Sized,
    T: FromValue,
{
    Ok(get_safe(cursor, name)?.unwrap_or(default))
}

/// The zero DateTime: `0001-01-01T00:00:00`, or chrono's minimum.
pub fn is_zero_date_time(dt: &NaiveDateTime) -> bool {
    if *dt == NaiveDateTime::MIN {
        return true;
    }
    dt.year() == 1
        && dt.ordinal() == 1
        && dt.num_seconds_from_midnight() == 0
        && dt.nanosecond() == 0
}

/// Read a DateTime column as a DateTime at UTC offset zero.
///
/// NULL and the zero DateTime both yield `None`.
pub fn get_safe_date_time_offset<C>(cursor: &C, name: &str) -> Result<Option<DateTime<FixedOffset>>>
where
    C: RowCursor + ?Sized,
{
    Ok(get_safe::<C, NaiveDateTime>(cursor, name)?
        .filter(|dt| !is_zero_date_time(dt))
        .map(|dt| dt.and_utc().fixed_offset()))
}
