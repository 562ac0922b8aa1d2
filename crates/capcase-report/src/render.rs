//! Plain-text rendering of diagnostics reports.
//!
//! Each section is a heading line, a body line and a blank line. Value lists
//! use list literal notation: text quoted, integers bare, missing as `nan`.

use std::fmt;

use capcase_model::CellValue;

use crate::diagnostics::{DiagnosticsReport, Stage};

/// Line printed after the pre-normalization report.
pub const SEPARATOR: &str = "-----------------------------------------------------";

fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for ch in text.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}

/// Renders one value as it appears inside a list.
pub fn render_value(value: &CellValue) -> String {
    match value {
        CellValue::Integer(n) => n.to_string(),
        CellValue::Text(text) => quote(text),
        CellValue::Missing => "nan".to_string(),
    }
}

/// Renders values as a bracketed, comma separated list.
pub fn render_values(values: &[CellValue]) -> String {
    let mut out = String::from("[");
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&render_value(value));
    }
    out.push(']');
    out
}

fn render_names(names: &[String]) -> String {
    let mut out = String::from("[");
    for (idx, name) in names.iter().enumerate() {
        if idx > 0 {
            out.push_str(", ");
        }
        out.push_str(&quote(name));
    }
    out.push(']');
    out
}

/// Range bounds print bare, as raw values.
fn render_bound(value: Option<&CellValue>) -> String {
    match value {
        Some(CellValue::Missing) | None => "nan".to_string(),
        Some(value) => value.to_string(),
    }
}

fn section(f: &mut fmt::Formatter<'_>, heading: &str, body: &str) -> fmt::Result {
    writeln!(f, "{heading}")?;
    writeln!(f, "{body}")?;
    writeln!(f)
}

impl fmt::Display for DiagnosticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(count) = self.column_count {
            section(f, "Number of columns:", &count.to_string())?;
        }
        if let Some(columns) = &self.columns {
            section(f, "All the column are:", &render_names(columns))?;
        }
        for category in &self.categories {
            section(
                f,
                &format!("Unique {} count:", category.label),
                &category.count.to_string(),
            )?;
            section(
                f,
                &format!("Unique {}:", category.label),
                &render_values(&category.values),
            )?;
        }
        if let Some(range) = &self.date_range {
            writeln!(f, "Date ranges:")?;
            writeln!(f, "{}", render_bound(range.min.as_ref()))?;
            writeln!(f, "{}", render_bound(range.max.as_ref()))?;
            writeln!(f)?;
        }
        if let Some(years) = &self.years {
            section(f, "Years:", &render_values(years))?;
        }
        for column in &self.column_values {
            section(f, &format!("{}:", column.column), &render_values(&column.values))?;
        }
        if !self.whitespace.is_empty() {
            writeln!(f, "Values with surrounding whitespace:")?;
            for finding in &self.whitespace {
                writeln!(f, "{}: {}", finding.column, quote(&finding.value))?;
            }
            writeln!(f)?;
        }
        if self.stage == Stage::Pre {
            writeln!(f, "{SEPARATOR}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_mixed_values() {
        let values = vec![
            CellValue::Integer(0),
            CellValue::Text("Oklahoma ".to_string()),
            CellValue::Missing,
        ];
        assert_eq!(render_values(&values), "[0, 'Oklahoma ', nan]");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(render_value(&CellValue::Text("O'Brien".to_string())), "'O\\'Brien'");
    }

    #[test]
    fn empty_list() {
        assert_eq!(render_values(&[]), "[]");
    }
}
