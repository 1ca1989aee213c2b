//! Value, schema, and snapshot types.

mod column;
mod data_type;
mod decode;
mod record;
mod table;
mod value;

pub use column::{names_match, Column, ColumnInfo};
pub use data_type::DataType;
pub use decode::FromValue;
pub use record::Record;
pub use table::{DataSet, Table};
pub use value::Value;
