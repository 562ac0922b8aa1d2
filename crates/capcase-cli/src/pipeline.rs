//! Preprocessing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the source CSV fully into memory
//! 2. **Project**: keep only the target columns
//! 3. **Report (pre)**: print diagnostics of the raw values
//! 4. **Normalize**: fix known labels, disambiguate two-digit years
//! 5. **Report (post)**: print diagnostics of the cleaned values
//! 6. **Output**: write the cleaned CSV
//!
//! Any stage error aborts the run before the output file is touched.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use capcase_ingest::read_record_table;
use capcase_model::{PipelineConfig, RecordTable};
use capcase_output::write_record_table;
use capcase_report::{DiagnosticsReport, Stage, build_report};
use capcase_transform::{normalize_table, project_target_columns};

use crate::types::{ReportFormat, RunOptions, RunResult};

/// Load the source file.
pub fn ingest(path: &Path) -> Result<RecordTable> {
    read_record_table(path).with_context(|| format!("load source table {}", path.display()))
}

/// Print a diagnostics report to `out` in the requested format.
pub fn emit_report<W: Write>(
    report: &DiagnosticsReport,
    format: ReportFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ReportFormat::Text => write!(out, "{report}").context("write report")?,
        ReportFormat::Json => {
            let json = report.to_json().context("serialize report")?;
            writeln!(out, "{json}").context("write report")?;
        }
    }
    Ok(())
}

/// Run every stage against `config`, printing both reports to `out`.
pub fn run<W: Write>(config: &PipelineConfig, options: RunOptions, out: &mut W) -> Result<RunResult> {
    let run_span = info_span!("run", input = %config.input.display());
    let _run_guard = run_span.enter();
    let run_start = Instant::now();

    // =========================================================================
    // Stage 1-2: Ingest and project
    // =========================================================================
    let source = info_span!("ingest").in_scope(|| ingest(&config.input))?;
    let mut table = info_span!("project")
        .in_scope(|| project_target_columns(&source, config))
        .context("project target columns")?;
    let (source_rows, source_columns) = (source.height(), source.width());
    drop(source);

    // =========================================================================
    // Stage 3-5: Diagnostics around normalization
    // =========================================================================
    let pre = build_report(&table, config, Stage::Pre).context("build pre-normalization report")?;
    emit_report(&pre, options.report_format, out)?;

    let normalization = normalize_table(&mut table, config).context("normalize table")?;

    let post =
        build_report(&table, config, Stage::Post).context("build post-normalization report")?;
    emit_report(&post, options.report_format, out)?;
    out.flush().context("flush reports")?;

    // =========================================================================
    // Stage 6: Output
    // =========================================================================
    let output = if options.dry_run {
        info!(path = %config.output.display(), "dry run, skipping output");
        None
    } else {
        info_span!("output")
            .in_scope(|| write_record_table(&table, &config.output))
            .with_context(|| format!("write cleaned table {}", config.output.display()))?;
        Some(config.output.clone())
    };

    info!(
        rows = table.height(),
        columns = table.width(),
        replaced = normalization.total_replaced(),
        dates_converted = normalization.dates_converted,
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        input: config.input.clone(),
        output,
        source_rows,
        source_columns,
        rows: table.height(),
        columns: table.width(),
        normalization,
        remaining_whitespace: post.whitespace.len(),
    })
}
