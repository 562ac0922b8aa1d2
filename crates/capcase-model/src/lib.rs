//! Core types shared by the capital case preprocessing crates.
//!
//! - **table**: the in-memory [`RecordTable`] with projection, replacement and
//!   aggregate operations addressed by column name
//! - **config**: [`PipelineConfig`] and the fixed dataset constants
//! - **error**: [`TableError`] raised by table operations

pub mod config;
pub mod error;
pub mod table;

pub use config::{
    CategoricalColumn, DATE_COLUMN, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_YEAR_PIVOT,
    LabelReplacement, PipelineConfig, RACE_COLUMN, SEX_COLUMN, STATE_COLUMN, TARGET_COLUMNS,
    default_categorical_columns, default_replacements,
};
pub use error::{Result, TableError};
pub use table::{CellValue, RecordTable, Row};
