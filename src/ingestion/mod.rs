//! CSV loading into an in-memory [`crate::types::Table`].
//!
//! Most callers should use [`load_csv_from_path`], which:
//!
//! - reads the whole file, infers a column type for each header once, and builds a `Table`
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! A reader-based variant ([`load_csv_from_reader`]) exists for in-memory sources and tests.

pub mod csv;
pub mod observability;

pub use csv::{load_csv_from_path, load_csv_from_reader, LoadOptions};
pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, StdErrObserver,
};
