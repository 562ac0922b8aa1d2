//! In-memory record table.
//!
//! A [`RecordTable`] holds the whole dataset at once: an ordered column name
//! sequence plus rows keyed by column name. Every operation addresses columns
//! by name, never by position.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A single cell of the record table.
///
/// Variant order defines the sort order used for distinct lists and min/max:
/// integers first (numerically), then text (byte order), then missing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Parses a raw delimited field.
    ///
    /// Empty fields are missing, fields that parse as `i64` once trimmed are
    /// integers, anything else is kept verbatim (surrounding whitespace
    /// included).
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Missing;
        }
        match raw.trim().parse::<i64>() {
            Ok(value) => Self::Integer(value),
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Returns the text payload, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true when the rendered value has leading or trailing whitespace.
    pub fn has_surrounding_whitespace(&self) -> bool {
        self.as_text()
            .is_some_and(|value| value.trim() != value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
            Self::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

static MISSING: CellValue = CellValue::Missing;

/// One record: its position in the source file plus its cells by column name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: BTreeMap::new(),
        }
    }

    /// Returns the cell for `column`, treating absent cells as missing.
    pub fn get(&self, column: &str) -> &CellValue {
        self.cells.get(column).unwrap_or(&MISSING)
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }
}

/// Ordered columns and rows held fully in memory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl RecordTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    fn require_column(&self, column: &str) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(TableError::ColumnNotFound {
                column: column.to_string(),
            })
        }
    }

    /// Returns a new table restricted to `columns`, in that order.
    ///
    /// Row count and row indices are preserved. Fails listing every column
    /// that is absent from this table.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Result<RecordTable> {
        let columns: Vec<String> = columns
            .iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        let missing: Vec<String> = columns
            .iter()
            .filter(|name| !self.has_column(name))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingColumns { columns: missing });
        }

        let rows = self
            .rows
            .iter()
            .map(|row| Row {
                index: row.index,
                cells: columns
                    .iter()
                    .map(|name| (name.clone(), row.get(name).clone()))
                    .collect(),
            })
            .collect();
        Ok(RecordTable { columns, rows })
    }

    /// Values of `column` in row order.
    pub fn column_values(&self, column: &str) -> Result<Vec<&CellValue>> {
        self.require_column(column)?;
        Ok(self.rows.iter().map(|row| row.get(column)).collect())
    }

    /// Replaces every cell of `column` whose rendered value equals `from`
    /// exactly with `to`. Returns the number of cells changed.
    pub fn replace_exact(&mut self, column: &str, from: &str, to: &str) -> Result<usize> {
        self.require_column(column)?;
        let replacement = CellValue::parse(to);
        let mut changed = 0usize;
        for row in &mut self.rows {
            let Some(cell) = row.cells.get_mut(column) else {
                continue;
            };
            if !cell.is_missing() && cell.to_string() == from {
                *cell = replacement.clone();
                changed += 1;
            }
        }
        Ok(changed)
    }

    /// Applies `f` to every non-missing cell of `column`, stopping at the
    /// first error. `f` receives the row index and the current cell.
    /// Returns the number of cells mapped.
    pub fn try_map_column<E, F>(&mut self, column: &str, mut f: F) -> std::result::Result<usize, E>
    where
        E: From<TableError>,
        F: FnMut(usize, &CellValue) -> std::result::Result<CellValue, E>,
    {
        self.require_column(column)?;
        let mut mapped = 0usize;
        for row in &mut self.rows {
            let index = row.index;
            let Some(cell) = row.cells.get_mut(column) else {
                continue;
            };
            if cell.is_missing() {
                continue;
            }
            *cell = f(index, cell)?;
            mapped += 1;
        }
        Ok(mapped)
    }

    /// Sorted distinct values of `column`; missing appears once, last.
    pub fn distinct(&self, column: &str) -> Result<Vec<CellValue>> {
        let values: BTreeSet<CellValue> =
            self.column_values(column)?.into_iter().cloned().collect();
        Ok(values.into_iter().collect())
    }

    /// Distinct values of `column` in order of first appearance.
    pub fn unique_in_order(&self, column: &str) -> Result<Vec<CellValue>> {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for value in self.column_values(column)? {
            if seen.insert(value) {
                ordered.push(value.clone());
            }
        }
        Ok(ordered)
    }

    /// Smallest non-missing value of `column`.
    pub fn min(&self, column: &str) -> Result<Option<CellValue>> {
        Ok(self
            .column_values(column)?
            .into_iter()
            .filter(|value| !value.is_missing())
            .min()
            .cloned())
    }

    /// Largest non-missing value of `column`.
    pub fn max(&self, column: &str) -> Result<Option<CellValue>> {
        Ok(self
            .column_values(column)?
            .into_iter()
            .filter(|value| !value.is_missing())
            .max()
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classifies_fields() {
        assert_eq!(CellValue::parse(""), CellValue::Missing);
        assert_eq!(CellValue::parse("3"), CellValue::Integer(3));
        assert_eq!(CellValue::parse("-12"), CellValue::Integer(-12));
        assert_eq!(
            CellValue::parse("Oklahoma "),
            CellValue::Text("Oklahoma ".to_string())
        );
        assert_eq!(
            CellValue::parse("01/01/87"),
            CellValue::Text("01/01/87".to_string())
        );
    }

    #[test]
    fn ordering_puts_integers_first_and_missing_last() {
        let mut values = vec![
            CellValue::Missing,
            CellValue::Text("b".to_string()),
            CellValue::Integer(10),
            CellValue::Text("a".to_string()),
            CellValue::Integer(2),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                CellValue::Integer(2),
                CellValue::Integer(10),
                CellValue::Text("a".to_string()),
                CellValue::Text("b".to_string()),
                CellValue::Missing,
            ]
        );
    }

    #[test]
    fn display_renders_missing_as_empty() {
        assert_eq!(CellValue::Missing.to_string(), "");
        assert_eq!(CellValue::Integer(1987).to_string(), "1987");
        assert_eq!(CellValue::Text(" Male".to_string()).to_string(), " Male");
    }

    #[test]
    fn whitespace_detection() {
        assert!(CellValue::parse("White ").has_surrounding_whitespace());
        assert!(CellValue::parse(" Male").has_surrounding_whitespace());
        assert!(!CellValue::parse("Male").has_surrounding_whitespace());
        assert!(!CellValue::Missing.has_surrounding_whitespace());
    }
}
