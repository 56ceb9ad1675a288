//! Descriptive statistics for a single numeric column.

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::Table;

/// Descriptive statistics over the non-missing values of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Middle value of the sorted sequence (average of the two middle values on even counts).
    pub median: f64,
    /// Most frequent value; ties break to the smallest such value.
    pub mode: f64,
    /// Sample standard deviation (N-1 denominator); 0.0 for a single value.
    pub std_dev: f64,
    /// Smallest non-missing value.
    pub min: f64,
    /// Largest non-missing value.
    pub max: f64,
}

/// Compute [`Statistics`] for a column, skipping missing values.
///
/// Fails with `ColumnNotFound` if the column is absent and `EmptyColumn` if it has no
/// non-missing numeric values (never silently produces NaN).
pub fn describe_column(table: &Table, column: &str) -> AnalysisResult<Statistics> {
    let idx = table.column_index(column)?;

    let mut values: Vec<f64> = table
        .rows
        .iter()
        .filter_map(|row| row[idx].as_number())
        .collect();
    if values.is_empty() {
        return Err(AnalysisError::EmptyColumn {
            column: column.to_owned(),
        });
    }
    values.sort_by(f64::total_cmp);

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;

    let median = if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    };

    // Equal values are adjacent after sorting, so the mode is the longest run; scanning in
    // ascending order makes ties resolve to the smallest value.
    let mut mode = values[0];
    let mut best_len = 0usize;
    let mut run_start = 0usize;
    for i in 0..=n {
        if i == n || values[i] != values[run_start] {
            if i - run_start > best_len {
                best_len = i - run_start;
                mode = values[run_start];
            }
            run_start = i;
        }
    }

    let std_dev = if n > 1 {
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        var.sqrt()
    } else {
        0.0
    };

    Ok(Statistics {
        mean,
        median,
        mode,
        std_dev,
        min: values[0],
        max: values[n - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::describe_column;
    use crate::types::{Column, ColumnType, Schema, Table, Value};

    fn numeric_table(values: &[Option<f64>]) -> Table {
        let schema = Schema::new(vec![Column::new("totalprod", ColumnType::Numeric)]);
        let rows = values
            .iter()
            .map(|v| vec![v.map(Value::Number).unwrap_or(Value::Null)])
            .collect();
        Table::new(schema, rows)
    }

    #[test]
    fn describe_basic_statistics() {
        let t = numeric_table(&[Some(100.0), Some(300.0), Some(200.0)]);
        let stats = describe_column(&t, "totalprod").unwrap();

        assert_eq!(stats.mean, 200.0);
        assert_eq!(stats.median, 200.0);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 300.0);
        assert_eq!(stats.std_dev, 100.0);
    }

    #[test]
    fn describe_skips_missing_values() {
        let t = numeric_table(&[Some(10.0), None, Some(20.0), None]);
        let stats = describe_column(&t, "totalprod").unwrap();
        assert_eq!(stats.mean, 15.0);
        assert_eq!(stats.median, 15.0);
    }

    #[test]
    fn median_averages_two_middle_values() {
        let t = numeric_table(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        let stats = describe_column(&t, "totalprod").unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn mode_tie_breaks_to_smallest_value() {
        let t = numeric_table(&[Some(5.0), Some(2.0), Some(5.0), Some(2.0), Some(9.0)]);
        let stats = describe_column(&t, "totalprod").unwrap();
        assert_eq!(stats.mode, 2.0);

        let t = numeric_table(&[Some(7.0), Some(7.0), Some(3.0)]);
        assert_eq!(describe_column(&t, "totalprod").unwrap().mode, 7.0);
    }

    #[test]
    fn single_value_column_has_zero_std_dev() {
        let t = numeric_table(&[Some(42.0)]);
        let stats = describe_column(&t, "totalprod").unwrap();
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mode, 42.0);
    }

    #[test]
    fn all_missing_column_errors_instead_of_nan() {
        let t = numeric_table(&[None, None]);
        let err = describe_column(&t, "totalprod").unwrap_err();
        assert!(err.to_string().contains("no non-missing values"));
    }

    #[test]
    fn missing_column_errors() {
        let t = numeric_table(&[Some(1.0)]);
        assert!(describe_column(&t, "nope").is_err());
    }
}
