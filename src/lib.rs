//! Typed accessors for forward-only row cursors.
//!
//! Any result cursor implementing [`RowCursor`] gains, through
//! [`RowCursorExt`], null-safe typed getters by column name, case-insensitive
//! ordinal lookup, chunked reads of large binary columns, bulk mapping onto
//! structs, and materialization into in-memory tables.
//!
//! # Example
//!
//! ```
//! use rowcursor_ext::{Column, DataType, MemoryCursor, RowCursorExt, Value};
//!
//! # fn main() -> rowcursor_ext::Result<()> {
//! let mut cursor = MemoryCursor::new(
//!     vec![
//!         Column::new("Id", DataType::Int32),
//!         Column::new("Email", DataType::String),
//!     ],
//!     vec![
//!         vec![Value::Int32(1), Value::from("a@example.com")],
//!         vec![Value::Int32(2), Value::Null],
//!     ],
//! )?;
//!
//! let count = cursor.read_all(|row| -> rowcursor_ext::Result<()> {
//!     let id = row.get_safe_i32_or("ID", 0)?;
//!     let email = row.get_safe_string_or("email", "<none>")?;
//!     println!("{id}: {email}");
//!     Ok(())
//! })?;
//! assert_eq!(count, 2);
//! # Ok(())
//! # }
//! ```

pub mod binary;
pub mod cursor;
pub mod enumerate;
pub mod error;
pub mod ext;
pub mod fill;
pub mod memory;
pub mod ordinal;
pub mod safe;
pub mod types;

// Re-export main types
pub use binary::{BinaryReadOptions, BinaryReadStrategy};
pub use cursor::RowCursor;
pub use enumerate::{Records, RowView, RowViews};
pub use error::{Error, Result};
pub use ext::RowCursorExt;
pub use fill::Fill;
pub use memory::{MemoryCursor, ResultSet};
pub use types::{Column, ColumnInfo, DataSet, DataType, FromValue, Record, Table, Value};
