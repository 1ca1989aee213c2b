//! Integration tests for ordinal lookup and safe typed getters.
//!
//! Run with: cargo test --test test_accessors

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use rust_decimal::Decimal;
use rowcursor_ext::{Column, DataType, Error, MemoryCursor, RowCursor, RowCursorExt, Value};
use uuid::Uuid;

const NAMES: [&str; 12] = [
    "Str", "Flag", "Tiny", "Money", "Dbl", "Flt", "Small", "Int", "Big", "When", "Uid", "Stamp",
];

const TYPES: [DataType; 12] = [
    DataType::String,
    DataType::Boolean,
    DataType::Byte,
    DataType::Decimal,
    DataType::Double,
    DataType::Float,
    DataType::Int16,
    DataType::Int32,
    DataType::Int64,
    DataType::DateTime,
    DataType::Guid,
    DataType::DateTime,
];

fn date_time(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

fn columns() -> Vec<Column> {
    NAMES
        .iter()
        .zip(TYPES)
        .map(|(name, ty)| Column::new(*name, ty))
        .collect()
}

/// Cursor positioned on a row with every column filled.
fn filled_cursor() -> MemoryCursor {
    let row = vec![
        Value::from("text"),
        Value::Boolean(true),
        Value::Byte(200),
        Value::Decimal(Decimal::new(12345, 2)),
        Value::Double(2.5),
        Value::Float(1.25),
        Value::Int16(-7),
        Value::Int32(42),
        Value::Int64(1 << 40),
        Value::DateTime(date_time(2024, 10, 21, 12, 36, 5)),
        Value::Guid(Uuid::from_u128(0x1234)),
        Value::DateTime(date_time(1999, 6, 15, 8, 30, 45)),
    ];
    let mut cursor = MemoryCursor::new(columns(), vec![row]).unwrap();
    assert!(cursor.advance().unwrap());
    cursor
}

/// Cursor positioned on a row of NULLs.
fn null_cursor() -> MemoryCursor {
    let mut cursor = MemoryCursor::new(columns(), vec![vec![Value::Null; NAMES.len()]]).unwrap();
    assert!(cursor.advance().unwrap());
    cursor
}

#[test]
fn test_field_exists_and_ordinal_case_insensitive() {
    let cursor = filled_cursor();

    for (i, name) in NAMES.iter().enumerate() {
        assert!(cursor.field_exists(name));
        assert!(cursor.field_exists(&name.to_uppercase()));
        assert!(cursor.field_exists(&name.to_lowercase()));
        assert_eq!(cursor.ordinal_of(&name.to_uppercase()), Some(i));
    }

    for name in ["Missing", "", "Str ", "Stamps"] {
        assert!(!cursor.field_exists(name));
        assert_eq!(cursor.ordinal_of(name), None);
    }
}

#[test]
fn test_getters_return_values() {
    let cursor = filled_cursor();

    assert_eq!(cursor.get_safe_string("str").unwrap().as_deref(), Some("text"));
    assert_eq!(cursor.get_safe_string_or_empty("STR").unwrap(), "text");
    assert_eq!(cursor.get_safe_bool("flag").unwrap(), Some(true));
    assert_eq!(cursor.get_safe_byte_or("tiny", 0).unwrap(), 200);
    assert_eq!(
        cursor.get_safe_decimal("money").unwrap(),
        Some(Decimal::new(12345, 2))
    );
    assert_eq!(cursor.get_safe_double_or("dbl", 0.0).unwrap(), 2.5);
    assert_eq!(cursor.get_safe_float("flt").unwrap(), Some(1.25));
    assert_eq!(cursor.get_safe_i16_or("small", 0).unwrap(), -7);
    assert_eq!(cursor.get_safe_i32("int").unwrap(), Some(42));
    assert_eq!(cursor.get_safe_i64_or("big", 0).unwrap(), 1 << 40);
    assert_eq!(
        cursor.get_safe_date_time("when").unwrap(),
        Some(date_time(2024, 10, 21, 12, 36, 5))
    );
    assert_eq!(cursor.get_safe_guid_or_empty("uid").unwrap(), Uuid::from_u128(0x1234));
}

#[test]
fn test_nullable_forms_return_none_on_null() {
    let cursor = null_cursor();

    assert_eq!(cursor.get_safe_string("Str").unwrap(), None);
    assert_eq!(cursor.get_safe_bool("Flag").unwrap(), None);
    assert_eq!(cursor.get_safe_byte("Tiny").unwrap(), None);
    assert_eq!(cursor.get_safe_decimal("Money").unwrap(), None);
    assert_eq!(cursor.get_safe_double("Dbl").unwrap(), None);
    assert_eq!(cursor.get_safe_float("Flt").unwrap(), None);
    assert_eq!(cursor.get_safe_i16("Small").unwrap(), None);
    assert_eq!(cursor.get_safe_i32("Int").unwrap(), None);
    assert_eq!(cursor.get_safe_i64("Big").unwrap(), None);
    assert_eq!(cursor.get_safe_date_time("When").unwrap(), None);
    assert_eq!(cursor.get_safe_guid("Uid").unwrap(), None);
    assert_eq!(cursor.get_safe_date_time_offset("Stamp").unwrap(), None);
}

#[test]
fn test_defaulted_forms_return_extreme_defaults_on_null() {
    let cursor = null_cursor();

    assert_eq!(cursor.get_safe_string_or("Str", "fallback").unwrap(), "fallback");
    assert_eq!(cursor.get_safe_string_or_empty("Str").unwrap(), "");
    assert!(!cursor.get_safe_bool_or("Flag", false).unwrap());
    assert_eq!(cursor.get_safe_byte_or("Tiny", u8::MAX).unwrap(), u8::MAX);
    assert_eq!(cursor.get_safe_decimal_or("Money", Decimal::MAX).unwrap(), Decimal::MAX);
    assert_eq!(cursor.get_safe_double_or("Dbl", f64::MIN).unwrap(), f64::MIN);
    assert!(cursor.get_safe_double_or("Dbl", f64::NAN).unwrap().is_nan());
    assert_eq!(cursor.get_safe_float_or("Flt", f32::MAX).unwrap(), f32::MAX);
    assert_eq!(cursor.get_safe_i16_or("Small", i16::MIN).unwrap(), i16::MIN);
    assert_eq!(cursor.get_safe_i32_or("Int", i32::MAX).unwrap(), i32::MAX);
    assert_eq!(cursor.get_safe_i64_or("Big", i64::MIN).unwrap(), i64::MIN);
    assert_eq!(
        cursor.get_safe_date_time_or("When", NaiveDateTime::MAX).unwrap(),
        NaiveDateTime::MAX
    );
    assert_eq!(
        cursor.get_safe_guid_or("Uid", Uuid::from_u128(u128::MAX)).unwrap(),
        Uuid::from_u128(u128::MAX)
    );
    assert_eq!(cursor.get_safe_guid_or_empty("Uid").unwrap(), Uuid::nil());
}

#[test]
fn test_generic_getters() {
    let cursor = filled_cursor();
    assert_eq!(cursor.get_safe::<i32>("Int").unwrap(), Some(42));
    assert_eq!(cursor.get_safe_or::<i64>("Big", 0).unwrap(), 1 << 40);

    let cursor = null_cursor();
    assert_eq!(cursor.get_safe::<String>("Str").unwrap(), None);
    assert_eq!(cursor.get_safe_or("Int", -1i32).unwrap(), -1);
}

#[test]
fn test_unknown_column_is_an_error() {
    let cursor = filled_cursor();
    assert_eq!(
        cursor.get_safe_i32("Nope"),
        Err(Error::ColumnNotFound {
            name: "Nope".to_string()
        })
    );
    assert!(matches!(
        cursor.get_safe_string_or_empty("Nope"),
        Err(Error::ColumnNotFound { .. })
    ));
    assert!(matches!(
        cursor.get_safe_guid_or_empty("Nope"),
        Err(Error::ColumnNotFound { .. })
    ));
}

#[test]
fn test_type_mismatch_is_not_coerced() {
    let cursor = filled_cursor();
    assert_eq!(
        cursor.get_safe_i64("Int"),
        Err(Error::TypeMismatch {
            expected: DataType::Int64,
            actual: DataType::Int32
        })
    );
    assert!(matches!(
        cursor.get_safe_string_or_empty("Int"),
        Err(Error::TypeMismatch { .. })
    ));
}

#[test]
fn test_date_time_offset() {
    let default: DateTime<FixedOffset> = FixedOffset::east_opt(3600)
        .unwrap()
        .from_local_datetime(&date_time(2000, 1, 1, 0, 0, 0))
        .unwrap();

    let cursor = filled_cursor();
    let stamp = cursor.get_safe_date_time_offset_or("Stamp", default).unwrap();
    assert_eq!(stamp.offset().local_minus_utc(), 0);
    assert_eq!(
        (stamp.year(), stamp.month(), stamp.day()),
        (1999, 6, 15)
    );
    assert_eq!(
        (stamp.hour(), stamp.minute(), stamp.second()),
        (8, 30, 45)
    );

    let cursor = null_cursor();
    assert_eq!(cursor.get_safe_date_time_offset_or("Stamp", default).unwrap(), default);
}

#[test]
fn test_date_time_offset_zero_date_time_yields_default() {
    let default = date_time(2020, 2, 2, 2, 2, 2).and_utc().fixed_offset();

    for zero in [date_time(1, 1, 1, 0, 0, 0), NaiveDateTime::MIN] {
        let mut cursor = MemoryCursor::new(
            vec![Column::new("Stamp", DataType::DateTime)],
            vec![vec![Value::DateTime(zero)]],
        )
        .unwrap();
        cursor.advance().unwrap();

        assert_eq!(cursor.get_safe_date_time_offset_or("stamp", default).unwrap(), default);
        assert_eq!(cursor.get_safe_date_time_offset("stamp").unwrap(), None);
    }
}

#[test]
fn test_getters_do_not_advance() {
    let mut cursor = MemoryCursor::new(
        vec![Column::new("Int", DataType::Int32)],
        vec![vec![Value::Int32(1)], vec![Value::Int32(2)]],
    )
    .unwrap();
    cursor.advance().unwrap();

    for _ in 0..3 {
        assert_eq!(cursor.get_safe_i32("Int").unwrap(), Some(1));
    }
    assert!(cursor.advance().unwrap());
    assert_eq!(cursor.get_safe_i32("Int").unwrap(), Some(2));
}
