//! Output generation for cleaned record tables.
//!
//! The cleaned dataset is written as CSV with a leading, unnamed row-index
//! column followed by the table's columns in order.

pub mod error;
pub mod writer;

pub use error::{OutputError, Result};
pub use writer::{write_record_table, write_records};
