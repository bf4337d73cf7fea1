//! Dataset schema: column types, cell values and the table itself.

mod table;
mod types;
mod value;

pub use table::{Column, Dataset};
pub use types::ColumnType;
pub use value::{Value, format_float};
pub(crate) use value::ValueKey;
