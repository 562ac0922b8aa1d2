//! Pipeline configuration and the fixed dataset constants.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Source file read when no input path is given.
pub const DEFAULT_INPUT_FILE: &str = "original_data.csv";

/// Cleaned file written when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "preprocessed_data.csv";

pub const STATE_COLUMN: &str = "State";
pub const SEX_COLUMN: &str = "Sex";
pub const RACE_COLUMN: &str = "Race";
pub const DATE_COLUMN: &str = "Execution Date";

/// Two-digit years above this value belong to the 1900s, the rest to the 2000s.
pub const DEFAULT_YEAR_PIVOT: u8 = 24;

/// Columns kept from the source dataset, in output order.
pub const TARGET_COLUMNS: [&str; 17] = [
    "Juvenile",
    STATE_COLUMN,
    RACE_COLUMN,
    DATE_COLUMN,
    SEX_COLUMN,
    "Number of White Male Victims",
    "Number of Black Male Victims",
    "Number of Latino Male Victims",
    "Number of Asian Male Victims",
    "Number of Native American Male Victims",
    "Number of Other Race Male Victims",
    "Number of White Female Victims",
    "Number of Black Female Victims",
    "Number of Latino Female Victims",
    "Number of Asian Female Victims",
    "Number of American Indian or Alaska Native Female Victims",
    "Number of Other Race Female Victims",
];

/// An exact full-value replacement within one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelReplacement {
    pub column: String,
    pub from: String,
    pub to: String,
}

impl LabelReplacement {
    pub fn new(column: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Known malformed labels in the source dataset.
pub fn default_replacements() -> Vec<LabelReplacement> {
    vec![
        LabelReplacement::new(STATE_COLUMN, "Oklahoma ", "Oklahoma"),
        LabelReplacement::new(SEX_COLUMN, " Male", "Male"),
        LabelReplacement::new(RACE_COLUMN, "White ", "White"),
    ]
}

/// A categorical column and the noun used for it in diagnostics headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub column: String,
    pub label: String,
}

impl CategoricalColumn {
    pub fn new(column: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
        }
    }
}

pub fn default_categorical_columns() -> Vec<CategoricalColumn> {
    vec![
        CategoricalColumn::new(STATE_COLUMN, "states"),
        CategoricalColumn::new(SEX_COLUMN, "sex"),
        CategoricalColumn::new(RACE_COLUMN, "race"),
    ]
}

/// Everything the preprocessing pipeline needs to know about its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Delimited source file.
    pub input: PathBuf,
    /// Delimited destination file.
    pub output: PathBuf,
    /// Columns to keep, in output order.
    pub target_columns: Vec<String>,
    /// Column holding the raw execution date.
    pub date_column: String,
    /// Columns summarised as categories in diagnostics.
    pub categorical_columns: Vec<CategoricalColumn>,
    /// Exact-match label fixes applied before the year rule.
    pub replacements: Vec<LabelReplacement>,
    /// Century pivot for two-digit years.
    pub year_pivot: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            target_columns: TARGET_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
            date_column: DATE_COLUMN.to_string(),
            categorical_columns: default_categorical_columns(),
            replacements: default_replacements(),
            year_pivot: DEFAULT_YEAR_PIVOT,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = path.into();
        self
    }

    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    #[must_use]
    pub fn with_target_columns(mut self, columns: Vec<String>) -> Self {
        self.target_columns = columns;
        self
    }

    #[must_use]
    pub fn with_replacements(mut self, replacements: Vec<LabelReplacement>) -> Self {
        self.replacements = replacements;
        self
    }

    #[must_use]
    pub fn with_year_pivot(mut self, pivot: u8) -> Self {
        self.year_pivot = pivot;
        self
    }
}
