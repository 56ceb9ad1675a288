//! Row filtering by closure predicate or typed column conditions.

use std::cmp::Ordering;

use crate::error::AnalysisResult;
use crate::types::{Table, Value};

/// Comparison operator for a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
}

/// A single column condition, e.g. `year == 2012` or `totalprod > 10_000_000`.
///
/// Missing values never match, and neither do values of a different kind than the operand.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Column the condition applies to.
    pub column: String,
    /// Comparison operator.
    pub op: CmpOp,
    /// Right-hand operand.
    pub operand: Value,
}

impl Condition {
    /// Create a condition.
    pub fn new(column: impl Into<String>, op: CmpOp, operand: Value) -> Self {
        Self {
            column: column.into(),
            op,
            operand,
        }
    }

    /// Shorthand for an equality condition.
    pub fn eq(column: impl Into<String>, operand: Value) -> Self {
        Self::new(column, CmpOp::Eq, operand)
    }

    /// Shorthand for a greater-than condition.
    pub fn gt(column: impl Into<String>, operand: Value) -> Self {
        Self::new(column, CmpOp::Gt, operand)
    }

    fn matches(&self, value: &Value) -> bool {
        let Some(ord) = compare(value, &self.operand) else {
            return false;
        };
        match self.op {
            CmpOp::Eq => ord == Ordering::Equal,
            CmpOp::Ne => ord != Ordering::Equal,
            CmpOp::Lt => ord == Ordering::Less,
            CmpOp::Le => ord != Ordering::Greater,
            CmpOp::Gt => ord == Ordering::Greater,
            CmpOp::Ge => ord != Ordering::Less,
        }
    }
}

/// Compare two values of the same kind. `None` for nulls or mismatched kinds.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Some(x.total_cmp(y)),
        (Value::Text(x), Value::Text(y)) => Some(x.as_str().cmp(y.as_str())),
        _ => None,
    }
}

/// Returns a new [`Table`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`Table::filter_rows`].
pub fn filter<F>(table: &Table, predicate: F) -> Table
where
    F: FnMut(&[Value]) -> bool,
{
    table.filter_rows(predicate)
}

/// Returns a new [`Table`] containing only rows that satisfy every condition (logical AND).
///
/// Column existence is checked up front: an unknown column name fails with `ColumnNotFound`
/// before any row is examined. An empty condition list keeps every row.
pub fn filter_where(table: &Table, conditions: &[Condition]) -> AnalysisResult<Table> {
    let mut resolved = Vec::with_capacity(conditions.len());
    for cond in conditions {
        resolved.push((table.column_index(&cond.column)?, cond));
    }

    Ok(table.filter_rows(|row| {
        resolved
            .iter()
            .all(|(idx, cond)| cond.matches(&row[*idx]))
    }))
}

#[cfg(test)]
mod tests {
    use super::{filter, filter_where, CmpOp, Condition};
    use crate::types::{Column, ColumnType, Schema, Table, Value};

    fn honey_table() -> Table {
        let schema = Schema::new(vec![
            Column::new("state", ColumnType::Categorical),
            Column::new("year", ColumnType::Numeric),
            Column::new("totalprod", ColumnType::Numeric),
        ]);
        let rows = vec![
            vec![
                Value::Text("TX".to_string()),
                Value::Number(2000.0),
                Value::Number(100.0),
            ],
            vec![
                Value::Text("TX".to_string()),
                Value::Number(2012.0),
                Value::Number(300.0),
            ],
            vec![
                Value::Text("CA".to_string()),
                Value::Number(2012.0),
                Value::Number(200.0),
            ],
            vec![
                Value::Text("ND".to_string()),
                Value::Number(2012.0),
                Value::Null,
            ],
        ];
        Table::new(schema, rows)
    }

    #[test]
    fn closure_filter_preserves_order_and_schema() {
        let t = honey_table();
        let year = t.column_index("year").unwrap();
        let out = filter(&t, |row| row[year].as_number() == Some(2012.0));

        assert_eq!(out.schema, t.schema);
        assert_eq!(out.row_count(), 3);
        assert_eq!(out.rows[0][0], Value::Text("TX".to_string()));
        assert_eq!(out.rows[2][0], Value::Text("ND".to_string()));
    }

    #[test]
    fn filter_where_single_condition() {
        let t = honey_table();
        let out = filter_where(&t, &[Condition::eq("year", Value::Number(2012.0))]).unwrap();
        assert_eq!(out.row_count(), 3);
    }

    #[test]
    fn filter_where_conjunction() {
        let t = honey_table();
        let out = filter_where(
            &t,
            &[
                Condition::gt("totalprod", Value::Number(150.0)),
                Condition::gt("year", Value::Number(2010.0)),
            ],
        )
        .unwrap();

        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows[0][0], Value::Text("TX".to_string()));
        assert_eq!(out.rows[1][0], Value::Text("CA".to_string()));
    }

    #[test]
    fn nulls_never_match_any_operator() {
        let t = honey_table();
        for op in [CmpOp::Eq, CmpOp::Ne, CmpOp::Lt, CmpOp::Le, CmpOp::Gt, CmpOp::Ge] {
            let out = filter_where(
                &t,
                &[Condition::new("totalprod", op, Value::Number(200.0))],
            )
            .unwrap();
            assert!(
                out.rows.iter().all(|r| !r[2].is_null()),
                "null matched {op:?}"
            );
        }
    }

    #[test]
    fn text_conditions_compare_lexicographically() {
        let t = honey_table();
        let out = filter_where(
            &t,
            &[Condition::new(
                "state",
                CmpOp::Lt,
                Value::Text("ND".to_string()),
            )],
        )
        .unwrap();
        assert_eq!(out.row_count(), 1);
        assert_eq!(out.rows[0][0], Value::Text("CA".to_string()));
    }

    #[test]
    fn unknown_column_fails_before_filtering() {
        let t = honey_table();
        let err =
            filter_where(&t, &[Condition::eq("nope", Value::Number(1.0))]).unwrap_err();
        assert!(err.to_string().contains("column not found: 'nope'"));
    }

    #[test]
    fn no_matches_is_an_empty_table_not_an_error() {
        let t = honey_table();
        let out = filter_where(&t, &[Condition::eq("year", Value::Number(1900.0))]).unwrap();
        assert_eq!(out.row_count(), 0);
        assert_eq!(out.schema, t.schema);
    }
}
