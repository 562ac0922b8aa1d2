//! Diagnostics for the preprocessing pipeline.
//!
//! A [`DiagnosticsReport`] summarises column cardinality and ranges of a
//! record table. It is built twice per run, once before normalization
//! ([`Stage::Pre`]) and once after ([`Stage::Post`]); comparing the two is how
//! an analyst checks the normalization pass.

pub mod diagnostics;
pub mod render;

pub use diagnostics::{
    CategorySummary, ColumnValues, DateRange, DiagnosticsReport, Stage, WhitespaceFinding,
    build_report,
};
pub use render::{SEPARATOR, render_value, render_values};
