use thiserror::Error;

use capcase_model::TableError;

use crate::normalization::YearError;

/// Errors raised while projecting or normalizing a record table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error(transparent)]
    Table(#[from] TableError),

    /// A date cell could not be turned into a four-digit year.
    #[error("row {row}: {source}")]
    MalformedDate {
        row: usize,
        #[source]
        source: YearError,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
