use thiserror::Error;

/// Errors raised by [`RecordTable`](crate::RecordTable) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// One or more projected columns are absent from the table.
    #[error("missing required column(s): {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A column addressed by name does not exist.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },
}

pub type Result<T> = std::result::Result<T, TableError>;
