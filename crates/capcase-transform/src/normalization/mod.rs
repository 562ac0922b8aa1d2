//! Categorical and date normalization.
//!
//! [`normalize_table`] runs the whole normalization stage: exact-match label
//! fixes first, then the two-digit year rule on the date column.

mod labels;
mod year;

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, info_span};

use capcase_model::{CellValue, PipelineConfig, RecordTable};

use crate::error::{Result, TransformError};

pub use labels::{apply_label_replacements, normalize_label};
pub use year::{YearError, disambiguate_year};

/// What the normalization stage changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationSummary {
    /// Cells rewritten by label replacement, per column.
    pub replaced: BTreeMap<String, usize>,
    /// Date cells converted to four-digit years.
    pub dates_converted: usize,
}

impl NormalizationSummary {
    pub fn total_replaced(&self) -> usize {
        self.replaced.values().sum()
    }
}

/// Replaces every non-missing value of `column` by its four-digit year.
///
/// Returns the number of converted cells. The first malformed value aborts
/// the pass with the offending row index.
pub fn normalize_dates(table: &mut RecordTable, column: &str, pivot: u8) -> Result<usize> {
    table.try_map_column(column, |row, cell| {
        let year = disambiguate_year(&cell.to_string(), pivot)
            .map_err(|source| TransformError::MalformedDate { row, source })?;
        Ok(CellValue::parse(&year))
    })
}

/// Applies the configured label replacements, then the year rule.
///
/// Must run exactly once on a table: the year rule is not idempotent.
pub fn normalize_table(
    table: &mut RecordTable,
    config: &PipelineConfig,
) -> Result<NormalizationSummary> {
    let span = info_span!("normalize", rows = table.height());
    let _guard = span.enter();
    let start = Instant::now();

    let replaced = apply_label_replacements(table, &config.replacements)?;
    let dates_converted = normalize_dates(table, &config.date_column, config.year_pivot)?;

    let summary = NormalizationSummary {
        replaced,
        dates_converted,
    };
    info!(
        replaced = summary.total_replaced(),
        dates_converted,
        duration_ms = start.elapsed().as_millis(),
        "normalization complete"
    );
    Ok(summary)
}
