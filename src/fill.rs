//! Assigning row fields onto struct fields by name.
//!
//! A type opts in by implementing [`Fill`], usually through [`impl_fill!`],
//! which lists the fields `fill` is allowed to write. Fields left out of the
//! list are never touched.

use log::trace;

use crate::cursor::RowCursor;
use crate::error::Result;
use crate::ordinal::ordinal_of;
use crate::types::{FromValue, Value};

/// Mapping descriptor for a type that can be filled from a row.
pub trait Fill {
    /// Column names of the writable fields.
    const FIELDS: &'static [&'static str];

    /// Assign `value` to the field registered as `field`.
    ///
    /// Unknown names are ignored.
    fn set_field(&mut self, field: &str, value: Value) -> Result<()>;
}

/// Store `value` into `slot`. NULL stores the zero value of `T`.
pub fn assign<T: FromValue + Default>(slot: &mut T, value: Value) -> Result<()> {
    *slot = if value.is_null() {
        T::default()
    } else {
        T::from_value(value)?
    };
    Ok(())
}

/// Copy every matching field of the current row onto `target`.
///
/// Matching is case-insensitive. Row fields with no writable counterpart are
/// ignored. The first failed assignment is returned, leaving `target`
/// partially filled.
pub fn fill<'t, C, T>(cursor: &C, target: &'t mut T) -> Result<&'t mut T>
where
    C: RowCursor + ?Sized,
    T: Fill,
{
    for &field in T::FIELDS {
        let Some(ordinal) = ordinal_of(cursor, field) else {
            continue;
        };
        let value = if cursor.is_null(ordinal)? {
            Value::Null
        } else {
            cursor.value(ordinal)?
        };
        trace!("fill: column {} -> field {}", ordinal, field);
        target.set_field(field, value)?;
    }
    Ok(target)
}

/// Implement [`Fill`] for a struct by listing its writable fields.
///
/// A field maps to the column of the same name unless renamed with
/// `as "Column"`.
///
/// # Example
///
/// ```
/// use rowcursor_ext::{impl_fill, Column, DataType, MemoryCursor, RowCursor, RowCursorExt, Value};
///
/// #[derive(Default)]
/// struct User {
///     id: i32,
///     display_name: Option<String>,
///     cached: bool,
/// }
///
/// impl_fill!(User { id, display_name as "DisplayName" });
///
/// # fn main() -> rowcursor_ext::Result<()> {
/// let mut cursor = MemoryCursor::new(
///     vec![
///         Column::new("ID", DataType::Int32),
///         Column::new("DISPLAYNAME", DataType::String),
///     ],
///     vec![vec![Value::Int32(3), Value::Null]],
/// )?;
/// cursor.advance()?;
///
/// let mut user = User { cached: true, ..Default::default() };
/// cursor.fill(&mut user)?;
/// assert_eq!(user.id, 3);
/// assert_eq!(user.display_name, None);
/// assert!(user.cached);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! impl_fill {
    (@column $field:ident) => {
        stringify!($field)
    };
    (@column $field:ident $column:literal) => {
        $column
    };
    ($ty:ty { $($field:ident $(as $column:literal)?),* $(,)? }) => {
        impl $crate::Fill for $ty {
            const FIELDS: &'static [&'static str] = &[
                $($crate::impl_fill!(@column $field $($column)?)),*
            ];

            fn set_field(&mut self, field: &str, value: $crate::Value) -> $crate::Result<()> {
                $(
                    if field == $crate::impl_fill!(@column $field $($column)?) {
                        return $crate::fill::assign(&mut self.$field, value);
                    }
                )*
                let _ = value;
                Ok(())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::memory::MemoryCursor;
    use crate::types::{Column, DataType};

    #[derive(Debug, Default, PartialEq)]
    struct Target {
        a: i32,
        b: String,
        read_only_c: i32,
    }

    impl_fill!(Target { a, b });

    fn make_cursor() -> MemoryCursor {
        let mut cursor = MemoryCursor::new(
            vec![
                Column::new("A", DataType::Int32),
                Column::new("B", DataType::String),
                Column::new("D", DataType::String),
            ],
            vec![vec![Value::Int32(5), Value::Null, Value::from("x")]],
        )
        .unwrap();
        cursor.advance().unwrap();
        cursor
    }

    #[test]
    fn test_fields_list() {
        assert_eq!(Target::FIELDS, &["a", "b"]);
    }

    #[test]
    fn test_fill_matching_fields() {
        let cursor = make_cursor();
        let mut target = Target {
            a: 0,
            b: "old".to_string(),
            read_only_c: 9,
        };

        let filled = fill(&cursor, &mut target).unwrap();
        filled.read_only_c += 1;

        assert_eq!(
            target,
            Target {
                a: 5,
                b: String::new(),
                read_only_c: 10,
            }
        );
    }

    #[test]
    fn test_fill_skips_absent_columns() {
        let cursor = MemoryCursor::new(vec![Column::new("Z", DataType::Int32)], vec![]).unwrap();
        let mut target = Target {
            a: 1,
            b: "keep".to_string(),
            read_only_c: 2,
        };
        fill(&cursor, &mut target).unwrap();
        assert_eq!(target.a, 1);
        assert_eq!(target.b, "keep");
    }

    #[test]
    fn test_fill_type_mismatch_leaves_partial() {
        #[derive(Debug, Default)]
        struct Wrong {
            a: i32,
            d: i64,
        }
        impl_fill!(Wrong { a, d });

        let cursor = make_cursor();
        let mut wrong = Wrong::default();
        let result = fill(&cursor, &mut wrong);

        assert!(matches!(result, Err(Error::TypeMismatch { .. })));
        assert_eq!(wrong.a, 5);
        assert_eq!(wrong.d, 0);
    }

    #[test]
    fn test_assign_null_option() {
        let mut slot = Some(4u8);
        assign(&mut slot, Value::Null).unwrap();
        assert_eq!(slot, None);
        assign(&mut slot, Value::Byte(8)).unwrap();
        assert_eq!(slot, Some(8));
    }
}
