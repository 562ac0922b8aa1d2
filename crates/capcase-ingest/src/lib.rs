//! Source data ingestion.
//!
//! Reads a delimited file with a header row fully into memory as a
//! [`RecordTable`](capcase_model::RecordTable).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use capcase_ingest::read_record_table;
//!
//! let table = read_record_table(Path::new("original_data.csv"))?;
//! println!("{} rows, {} columns", table.height(), table.width());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{check_readable, dataframe_to_table, read_header, read_record_table};
