//! Target column selection.

use tracing::{debug, info};

use capcase_model::{PipelineConfig, RecordTable};

use crate::error::Result;

/// Restrict `table` to the configured target columns, in declared order.
///
/// This is the only schema check in the pipeline: every target column must be
/// present in the source, otherwise all absent names are reported together.
pub fn project_target_columns(table: &RecordTable, config: &PipelineConfig) -> Result<RecordTable> {
    let dropped = table.width().saturating_sub(config.target_columns.len());
    let projected = table.project(config.target_columns.as_slice())?;
    debug!(dropped_columns = dropped, "dropped non-target columns");
    info!(
        rows = projected.height(),
        columns = projected.width(),
        "projected target columns"
    );
    Ok(projected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use capcase_model::{CellValue, Row, TableError};

    use crate::TransformError;

    #[test]
    fn projects_custom_target_list() {
        let mut table = RecordTable::new(vec!["A".into(), "B".into(), "C".into()]);
        let mut row = Row::new(0);
        row.set("A", CellValue::parse("1"));
        row.set("B", CellValue::parse("x"));
        row.set("C", CellValue::parse(""));
        table.push_row(row);

        let config = PipelineConfig::default().with_target_columns(vec!["C".into(), "A".into()]);
        let projected = project_target_columns(&table, &config).unwrap();

        assert_eq!(projected.columns(), ["C", "A"]);
        assert_eq!(projected.rows()[0].get("A"), &CellValue::Integer(1));
    }

    #[test]
    fn missing_target_column_is_an_error() {
        let table = RecordTable::new(vec!["State".into()]);
        let config = PipelineConfig::default();

        let err = project_target_columns(&table, &config).unwrap_err();
        let TransformError::Table(TableError::MissingColumns { columns }) = err else {
            panic!("expected missing columns error");
        };
        assert_eq!(columns.len(), 16);
        assert!(!columns.contains(&"State".to_string()));
    }
}
