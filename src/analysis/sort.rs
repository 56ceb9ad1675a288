//! Stable row sorting by one column.

use std::cmp::Ordering;

use crate::error::AnalysisResult;
use crate::types::{Table, Value};

/// Returns a new [`Table`] with rows stably reordered by `column`.
///
/// Numbers sort numerically, text lexicographically. Tied rows keep their original relative
/// order, and missing values sort last regardless of direction.
pub fn sort_by(table: &Table, column: &str, ascending: bool) -> AnalysisResult<Table> {
    let idx = table.column_index(column)?;

    let mut order: Vec<usize> = (0..table.rows.len()).collect();
    order.sort_by(|&a, &b| {
        compare_for_sort(&table.rows[a][idx], &table.rows[b][idx], ascending)
    });

    let rows = order.iter().map(|&i| table.rows[i].clone()).collect();
    Ok(Table {
        schema: table.schema.clone(),
        rows,
    })
}

fn compare_for_sort(a: &Value, b: &Value, ascending: bool) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        // Nulls last in both directions.
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        _ => {
            let ord = match (a, b) {
                (Value::Number(x), Value::Number(y)) => x.total_cmp(y),
                (Value::Text(x), Value::Text(y)) => x.cmp(y),
                // A typed column never mixes kinds; treat as tied if it somehow does.
                _ => Ordering::Equal,
            };
            if ascending { ord } else { ord.reverse() }
        }
    }
}
