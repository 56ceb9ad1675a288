use thiserror::Error;

/// Convenience result type for loading and analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type returned by loading and analysis functions.
///
/// The `Io`/`Csv`/`Malformed` variants cover data-load failures; `ColumnNotFound` and
/// `EmptyColumn` cover analysis requests that cannot produce a defined result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/parse error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input file is structurally unusable (duplicate or empty header names, etc.).
    #[error("malformed input: {message}")]
    Malformed { message: String },

    /// The requested column does not exist in the table.
    #[error("column not found: '{column}'")]
    ColumnNotFound { column: String },

    /// An aggregate or extreme was requested over a column with no non-missing values
    /// (or a table with zero rows).
    #[error("column '{column}' has no non-missing values to aggregate")]
    EmptyColumn { column: String },
}
