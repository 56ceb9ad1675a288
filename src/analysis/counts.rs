//! Categorical frequency counting.

use crate::error::AnalysisResult;
use crate::types::{Table, Value};

/// Count occurrences of each distinct non-missing value in `column`.
///
/// Returns an ordered mapping sorted by descending count; ties keep the order of first
/// occurrence in the table. A zero-row table yields an empty mapping.
pub fn value_counts(table: &Table, column: &str) -> AnalysisResult<Vec<(Value, usize)>> {
    let idx = table.column_index(column)?;

    let mut counts: Vec<(Value, usize)> = Vec::new();
    for row in &table.rows {
        let value = &row[idx];
        if value.is_null() {
            continue;
        }
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.clone(), 1)),
        }
    }

    // Stable sort keeps first-occurrence order within equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::value_counts;
    use crate::types::{Column, ColumnType, Schema, Table, Value};

    fn state_table(states: &[Option<&str>]) -> Table {
        let schema = Schema::new(vec![Column::new("state", ColumnType::Categorical)]);
        let rows = states
            .iter()
            .map(|s| {
                vec![s
                    .map(|s| Value::Text(s.to_string()))
                    .unwrap_or(Value::Null)]
            })
            .collect();
        Table::new(schema, rows)
    }

    #[test]
    fn counts_order_by_descending_count() {
        let t = state_table(&[Some("TX"), Some("CA"), Some("TX")]);
        let out = value_counts(&t, "state").unwrap();
        assert_eq!(
            out,
            vec![
                (Value::Text("TX".to_string()), 2),
                (Value::Text("CA".to_string()), 1),
            ]
        );
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        let t = state_table(&[Some("ND"), Some("CA"), Some("CA"), Some("ND"), Some("WA")]);
        let out = value_counts(&t, "state").unwrap();
        assert_eq!(
            out.iter().map(|(v, _)| v.clone()).collect::<Vec<_>>(),
            vec![
                Value::Text("ND".to_string()),
                Value::Text("CA".to_string()),
                Value::Text("WA".to_string()),
            ]
        );
    }

    #[test]
    fn counts_sum_to_non_missing_total() {
        let t = state_table(&[Some("TX"), None, Some("CA"), Some("TX"), None]);
        let out = value_counts(&t, "state").unwrap();
        let total: usize = out.iter().map(|(_, n)| n).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn empty_table_yields_empty_mapping() {
        let t = state_table(&[]);
        assert!(value_counts(&t, "state").unwrap().is_empty());
    }

    #[test]
    fn unknown_column_errors() {
        let t = state_table(&[Some("TX")]);
        assert!(value_counts(&t, "nope").is_err());
    }
}
