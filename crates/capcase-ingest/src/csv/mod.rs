//! CSV loading.

mod reader;

pub use reader::{check_readable, dataframe_to_table, read_header, read_record_table};
