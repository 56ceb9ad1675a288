//! Core data model types.
//!
//! This crate loads a CSV file into an in-memory [`Table`]: an ordered [`Schema`] of typed
//! [`Column`]s plus row-major value storage. A `Table` is built once at load time and treated
//! as immutable afterwards; every analysis operation returns a new derived value.

use std::fmt;

use crate::error::{AnalysisError, AnalysisResult};

/// Semantic type of a table column, tagged once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit floating point values (integers are widened on load).
    Numeric,
    /// Free-form UTF-8 text.
    Text,
    /// Text drawn from a small set of labels (e.g. state codes). Stored like [`ColumnType::Text`]
    /// but tagged so callers can tell grouping keys from free-form strings.
    Categorical,
}

/// A single named, typed column in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, unique within a schema.
    pub name: String,
    /// Column semantic type.
    pub column_type: ColumnType,
}

impl Column {
    /// Create a new column descriptor.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// An ordered list of columns describing the shape of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of columns.
    pub columns: Vec<Column>,
}

impl Schema {
    /// Create a new schema from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Iterate column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// A single cell value in a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty cell.
    Null,
    /// Numeric value.
    Number(f64),
    /// UTF-8 text value.
    Text(String),
}

impl Value {
    /// True for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The numeric value, if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// The text value, if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str(""),
            // Integral numbers print without a trailing ".0" (year 2012, not 2012.0).
            Value::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Value::Number(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] columns.
/// Invariant: every row has exactly one value per schema column.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from schema and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length differs from the schema column count.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        let expected = schema.columns.len();
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == expected,
                "row {i} has {} values but the schema has {expected} columns",
                row.len()
            );
        }
        Self { schema, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a column name to its index, failing fast when it is absent.
    pub fn column_index(&self, name: &str) -> AnalysisResult<usize> {
        self.schema
            .index_of(name)
            .ok_or_else(|| AnalysisError::ColumnNotFound {
                column: name.to_owned(),
            })
    }

    /// True if the table contains a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.schema.index_of(name).is_some()
    }

    /// Create a new table containing only rows that match `predicate`.
    ///
    /// The returned table preserves the original schema and row order.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&[Value]) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .filter(|row| predicate(row.as_slice()))
            .cloned()
            .collect();
        Self {
            schema: self.schema.clone(),
            rows,
        }
    }

    /// Create a new table with only the first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> Self {
        Self {
            schema: self.schema.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Create a new table containing only the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> AnalysisResult<Self> {
        let mut idxs = Vec::with_capacity(names.len());
        for name in names {
            idxs.push(self.column_index(name)?);
        }

        let columns = idxs
            .iter()
            .map(|&i| self.schema.columns[i].clone())
            .collect();
        let rows = self
            .rows
            .iter()
            .map(|row| idxs.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Ok(Self {
            schema: Schema::new(columns),
            rows,
        })
    }
}
