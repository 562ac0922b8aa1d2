use serde::Serialize;
use tracing::warn;

use capcase_model::{CellValue, PipelineConfig, RecordTable, TableError};

/// When a report is taken relative to normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Pre,
    Post,
}

/// Distinct values of a categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub column: String,
    pub label: String,
    pub count: usize,
    pub values: Vec<CellValue>,
}

/// Smallest and largest raw value of the date column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub min: Option<CellValue>,
    pub max: Option<CellValue>,
}

/// Sorted distinct values of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnValues {
    pub column: String,
    pub values: Vec<CellValue>,
}

/// A distinct text value with leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhitespaceFinding {
    pub column: String,
    pub value: String,
}

/// Cardinality and range summary of a record table.
///
/// Which sections are populated depends on the [`Stage`]:
///
/// | Section | Pre | Post |
/// |---------|-----|------|
/// | column count and names | yes | no |
/// | categorical distinct values | yes | yes |
/// | date min/max | yes | no |
/// | distinct years | no | yes |
/// | distinct values of every column | no | yes |
/// | whitespace audit | yes | yes |
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticsReport {
    pub stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    pub categories: Vec<CategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_values: Vec<ColumnValues>,
    pub whitespace: Vec<WhitespaceFinding>,
}

impl DiagnosticsReport {
    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn whitespace_findings(table: &RecordTable) -> Result<Vec<WhitespaceFinding>, TableError> {
    let mut findings = Vec::new();
    for column in table.columns() {
        for value in table.distinct(column)? {
            if value.has_surrounding_whitespace() {
                findings.push(WhitespaceFinding {
                    column: column.clone(),
                    value: value.to_string(),
                });
            }
        }
    }
    Ok(findings)
}

/// Summarise `table` for the given stage.
///
/// After normalization every remaining whitespace finding is also logged as
/// a warning: the label fixes only cover known defects.
pub fn build_report(
    table: &RecordTable,
    config: &PipelineConfig,
    stage: Stage,
) -> Result<DiagnosticsReport, TableError> {
    let mut categories = Vec::with_capacity(config.categorical_columns.len());
    for category in &config.categorical_columns {
        let values = table.distinct(&category.column)?;
        categories.push(CategorySummary {
            column: category.column.clone(),
            label: category.label.clone(),
            count: values.len(),
            values,
        });
    }

    let whitespace = whitespace_findings(table)?;

    let report = match stage {
        Stage::Pre => DiagnosticsReport {
            stage,
            column_count: Some(table.width()),
            columns: Some(table.columns().to_vec()),
            categories,
            date_range: Some(DateRange {
                min: table.min(&config.date_column)?,
                max: table.max(&config.date_column)?,
            }),
            years: None,
            column_values: Vec::new(),
            whitespace,
        },
        Stage::Post => {
            for finding in &whitespace {
                warn!(
                    column = %finding.column,
                    value = ?finding.value,
                    "value still has surrounding whitespace after normalization"
                );
            }
            let mut column_values = Vec::with_capacity(config.target_columns.len());
            for column in &config.target_columns {
                column_values.push(ColumnValues {
                    column: column.clone(),
                    values: table.distinct(column)?,
                });
            }
            DiagnosticsReport {
                stage,
                column_count: None,
                columns: None,
                categories,
                date_range: None,
                years: Some(table.unique_in_order(&config.date_column)?),
                column_values,
                whitespace,
            }
        }
    };
    Ok(report)
}
