//! Analysis operations over an in-memory [`crate::types::Table`].
//!
//! Every operation borrows the table, checks column existence up front, and returns a new
//! derived value; nothing here mutates its input.
//!
//! Currently implemented:
//!
//! - [`describe_column()`]: descriptive statistics for a numeric column
//! - [`filter()`] / [`filter_where()`]: row filtering by predicate or AND-ed conditions
//! - [`group_aggregate()`]: per-group reductions (mean/sum/count/min/max)
//! - [`sort_by()`]: stable single-column sort, missing values last
//! - [`value_counts()`]: categorical frequency counting
//! - [`arg_extreme()`] / [`answer_by_filter_then_extreme()`]: argmax/argmin row lookup
//!
//! ## Example: which state produced the most honey in 2012?
//!
//! ```rust
//! use table_analyzer::analysis::{answer_by_filter_then_extreme, Condition, Extreme};
//! use table_analyzer::types::{Column, ColumnType, Schema, Table, Value};
//!
//! let schema = Schema::new(vec![
//!     Column::new("state", ColumnType::Categorical),
//!     Column::new("year", ColumnType::Numeric),
//!     Column::new("totalprod", ColumnType::Numeric),
//! ]);
//! let table = Table::new(
//!     schema,
//!     vec![
//!         vec![Value::Text("TX".into()), Value::Number(2012.0), Value::Number(300.0)],
//!         vec![Value::Text("CA".into()), Value::Number(2012.0), Value::Number(200.0)],
//!         vec![Value::Text("TX".into()), Value::Number(2000.0), Value::Number(100.0)],
//!     ],
//! );
//!
//! let winner = answer_by_filter_then_extreme(
//!     &table,
//!     &[Condition::eq("year", Value::Number(2012.0))],
//!     "totalprod",
//!     Extreme::Max,
//! )
//! .unwrap()
//! .unwrap();
//! assert_eq!(winner[0], Value::Text("TX".into()));
//! ```

pub mod counts;
pub mod describe;
pub mod extreme;
pub mod filter;
pub mod group;
pub mod sort;

pub use counts::value_counts;
pub use describe::{describe_column, Statistics};
pub use extreme::{answer_by_filter_then_extreme, arg_extreme, Extreme};
pub use filter::{filter, filter_where, CmpOp, Condition};
pub use group::{group_aggregate, Aggregator};
pub use sort::sort_by;
