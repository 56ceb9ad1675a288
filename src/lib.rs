//! `table-analyzer` is a small library for loading a CSV file into an in-memory
//! [`types::Table`] and answering questions about it: descriptive statistics, row filtering,
//! group-aggregation, stable sorting, value counting, and argmax/argmin lookups.
//!
//! The primary entrypoints are [`ingestion::load_csv_from_path`] (CSV into a typed `Table`,
//! with column types inferred once at load time) and the functions in [`analysis`].
//!
//! ## Data model
//!
//! A [`types::Table`] is an ordered [`types::Schema`] of named, typed columns
//! ([`types::ColumnType::Numeric`], [`types::ColumnType::Text`], or
//! [`types::ColumnType::Categorical`]) plus row-major [`types::Value`] storage. Empty CSV
//! cells load as [`types::Value::Null`] and are excluded from statistics unless explicitly
//! counted. Tables are immutable after load; every operation returns a new derived value.
//!
//! ## Quick example
//!
//! ```no_run
//! use table_analyzer::analysis::{describe_column, filter_where, Condition};
//! use table_analyzer::ingestion::{load_csv_from_path, LoadOptions};
//! use table_analyzer::types::Value;
//!
//! # fn main() -> Result<(), table_analyzer::AnalysisError> {
//! let opts = LoadOptions {
//!     categorical_columns: vec!["state".to_string()],
//!     ..Default::default()
//! };
//! let table = load_csv_from_path("data/honey.csv", &opts)?;
//!
//! let stats = describe_column(&table, "totalprod")?;
//! println!("mean production: {:.2}", stats.mean);
//!
//! let recent = filter_where(&table, &[Condition::gt("year", Value::Number(2010.0))])?;
//! println!("records after 2010: {}", recent.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading with load-time type inference and observability hooks
//! - [`types`]: schema + in-memory table types
//! - [`analysis`]: statistic, filter, group-aggregate, sort, count, and extreme operations
//! - [`report`]: the honey production walkthrough as structured results + rendered text
//! - [`error`]: error types used across loading and analysis
//!
//! ## Error handling
//!
//! All operations check column existence up front and fail fast with
//! [`AnalysisError::ColumnNotFound`]; aggregates over a column with no non-missing values
//! fail with [`AnalysisError::EmptyColumn`] instead of silently producing NaN. Conditions
//! like "no rows matched the filter" are defined empty results, never errors.

pub mod analysis;
pub mod error;
pub mod ingestion;
pub mod report;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
