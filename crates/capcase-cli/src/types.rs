use std::path::PathBuf;

use serde::Serialize;

use capcase_transform::NormalizationSummary;

/// How diagnostics reports are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Options that change how a run behaves but not what it computes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub report_format: ReportFormat,
    /// Run every stage but do not write the output file.
    pub dry_run: bool,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written file, `None` on a dry run.
    pub output: Option<PathBuf>,
    pub source_rows: usize,
    pub source_columns: usize,
    pub rows: usize,
    pub columns: usize,
    pub normalization: NormalizationSummary,
    /// Whitespace findings left after normalization.
    pub remaining_whitespace: usize,
}
