//! Argmax/argmin row lookup, and the filter-then-extreme composition.

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{Table, Value};

use super::filter::{filter_where, Condition};

/// Which end of a column [`arg_extreme`] looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// The maximum value.
    Max,
    /// The minimum value.
    Min,
}

/// Returns the first row (in table order) whose `column` value achieves the extreme among
/// non-missing values.
///
/// Fails with `EmptyColumn` on a zero-row table or an all-missing column, and with
/// `ColumnNotFound` for an unknown column.
pub fn arg_extreme(table: &Table, column: &str, extreme: Extreme) -> AnalysisResult<Vec<Value>> {
    let idx = table.column_index(column)?;

    let mut best: Option<(usize, f64)> = None;
    for (row_idx, row) in table.rows.iter().enumerate() {
        let Some(v) = row[idx].as_number() else {
            continue;
        };
        let better = match best {
            None => true,
            // Strict comparison keeps the first row on ties.
            Some((_, b)) => match extreme {
                Extreme::Max => v > b,
                Extreme::Min => v < b,
            },
        };
        if better {
            best = Some((row_idx, v));
        }
    }

    match best {
        Some((row_idx, _)) => Ok(table.rows[row_idx].clone()),
        None => Err(AnalysisError::EmptyColumn {
            column: column.to_owned(),
        }),
    }
}

/// Apply [`filter_where`], then [`arg_extreme`] on the result.
///
/// An empty filtered table is a defined no-data outcome and returns `Ok(None)`; the caller
/// decides how to report it. Column and value errors still fail.
pub fn answer_by_filter_then_extreme(
    table: &Table,
    conditions: &[Condition],
    value_column: &str,
    extreme: Extreme,
) -> AnalysisResult<Option<Vec<Value>>> {
    let filtered = filter_where(table, conditions)?;
    if filtered.row_count() == 0 {
        // Still surface a bad value column name.
        filtered.column_index(value_column)?;
        return Ok(None);
    }
    match arg_extreme(&filtered, value_column, extreme) {
        Ok(row) => Ok(Some(row)),
        // Rows matched but the value column was all-missing in them.
        Err(AnalysisError::EmptyColumn { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
