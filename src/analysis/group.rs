//! Grouping and per-group aggregation.

use crate::error::AnalysisResult;
use crate::types::{Table, Value};

/// Built-in per-group reduction over a value column, skipping missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregator {
    /// Arithmetic mean of non-missing values.
    Mean,
    /// Sum of non-missing values.
    Sum,
    /// Count of non-missing values.
    Count,
    /// Minimum non-missing value.
    Min,
    /// Maximum non-missing value.
    Max,
}

#[derive(Debug, Clone, Copy, Default)]
struct GroupAccumulator {
    sum: f64,
    count: usize,
    min: f64,
    max: f64,
}

impl GroupAccumulator {
    fn push(&mut self, v: f64) {
        if self.count == 0 {
            self.min = v;
            self.max = v;
        } else {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
        self.sum += v;
        self.count += 1;
    }

    fn finish(&self, aggregator: Aggregator) -> Option<f64> {
        if aggregator == Aggregator::Count {
            return Some(self.count as f64);
        }
        if self.count == 0 {
            return None;
        }
        Some(match aggregator {
            Aggregator::Mean => self.sum / self.count as f64,
            Aggregator::Sum => self.sum,
            Aggregator::Min => self.min,
            Aggregator::Max => self.max,
            Aggregator::Count => unreachable!("count handled above"),
        })
    }
}

/// Group rows by the distinct values of `group_column` and reduce `value_column` within each
/// group.
///
/// Returns an ordered mapping: one `(group key, aggregate)` pair per distinct key, in order
/// of first occurrence. Missing values in `value_column` are skipped; a group whose values
/// are all missing is still present, with `None` (or `Some(0.0)` for [`Aggregator::Count`]).
/// Rows with a missing group key are skipped entirely.
pub fn group_aggregate(
    table: &Table,
    group_column: &str,
    value_column: &str,
    aggregator: Aggregator,
) -> AnalysisResult<Vec<(Value, Option<f64>)>> {
    let group_idx = table.column_index(group_column)?;
    let value_idx = table.column_index(value_column)?;

    // First-occurrence order; linear key scan is fine at this scale.
    let mut groups: Vec<(Value, GroupAccumulator)> = Vec::new();
    for row in &table.rows {
        let key = &row[group_idx];
        if key.is_null() {
            continue;
        }
        let slot = match groups.iter().position(|(k, _)| k == key) {
            Some(i) => i,
            None => {
                groups.push((key.clone(), GroupAccumulator::default()));
                groups.len() - 1
            }
        };
        if let Some(v) = row[value_idx].as_number() {
            groups[slot].1.push(v);
        }
    }

    Ok(groups
        .into_iter()
        .map(|(key, acc)| (key, acc.finish(aggregator)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{group_aggregate, Aggregator};
    use crate::types::{Column, ColumnType, Schema, Table, Value};

    fn honey_table() -> Table {
        let schema = Schema::new(vec![
            Column::new("state", ColumnType::Categorical),
            Column::new("totalprod", ColumnType::Numeric),
        ]);
        let rows = vec![
            vec![Value::Text("TX".to_string()), Value::Number(100.0)],
            vec![Value::Text("TX".to_string()), Value::Number(300.0)],
            vec![Value::Text("CA".to_string()), Value::Number(200.0)],
            vec![Value::Text("ND".to_string()), Value::Null],
        ];
        Table::new(schema, rows)
    }

    #[test]
    fn group_mean_in_first_occurrence_order() {
        let t = honey_table();
        let out = group_aggregate(&t, "state", "totalprod", Aggregator::Mean).unwrap();

        assert_eq!(
            out,
            vec![
                (Value::Text("TX".to_string()), Some(200.0)),
                (Value::Text("CA".to_string()), Some(200.0)),
                (Value::Text("ND".to_string()), None),
            ]
        );
    }

    #[test]
    fn group_sum_conserves_column_total() {
        let t = honey_table();
        let out = group_aggregate(&t, "state", "totalprod", Aggregator::Sum).unwrap();
        let total: f64 = out.iter().filter_map(|(_, v)| *v).sum();

        let column_total: f64 = t.rows.iter().filter_map(|r| r[1].as_number()).sum();
        assert_eq!(total, column_total);
    }

    #[test]
    fn count_of_all_missing_group_is_zero_not_absent() {
        let t = honey_table();
        let out = group_aggregate(&t, "state", "totalprod", Aggregator::Count).unwrap();
        assert_eq!(out[2], (Value::Text("ND".to_string()), Some(0.0)));
    }

    #[test]
    fn min_max_aggregators() {
        let t = honey_table();
        let min = group_aggregate(&t, "state", "totalprod", Aggregator::Min).unwrap();
        let max = group_aggregate(&t, "state", "totalprod", Aggregator::Max).unwrap();
        assert_eq!(min[0].1, Some(100.0));
        assert_eq!(max[0].1, Some(300.0));
    }

    #[test]
    fn rows_with_missing_group_key_are_skipped() {
        let schema = Schema::new(vec![
            Column::new("state", ColumnType::Categorical),
            Column::new("totalprod", ColumnType::Numeric),
        ]);
        let rows = vec![
            vec![Value::Null, Value::Number(50.0)],
            vec![Value::Text("TX".to_string()), Value::Number(100.0)],
        ];
        let t = Table::new(schema, rows);

        let out = group_aggregate(&t, "state", "totalprod", Aggregator::Sum).unwrap();
        assert_eq!(out, vec![(Value::Text("TX".to_string()), Some(100.0))]);
    }

    #[test]
    fn unknown_columns_error() {
        let t = honey_table();
        assert!(group_aggregate(&t, "nope", "totalprod", Aggregator::Mean).is_err());
        assert!(group_aggregate(&t, "state", "nope", Aggregator::Mean).is_err());
    }
}
