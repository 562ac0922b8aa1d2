//! Record table transformations for capital case preprocessing.
//!
//! - **projection**: restrict the source table to the target columns
//! - **normalization**: exact-match label fixes and two-digit year
//!   disambiguation
//! - **error**: [`TransformError`] for both stages

pub mod error;
pub mod normalization;
pub mod projection;

pub use error::{Result, TransformError};
pub use normalization::{
    NormalizationSummary, YearError, apply_label_replacements, disambiguate_year,
    normalize_dates, normalize_label, normalize_table,
};
pub use projection::project_target_columns;
