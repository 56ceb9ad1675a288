//! CSV loading with load-time type inference.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{Column, ColumnType, Schema, Table, Value};

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};

/// Options controlling CSV loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Columns to tag as [`ColumnType::Categorical`]. Listed columns are loaded as text
    /// (no numeric inference) and must exist in the header.
    pub categorical_columns: Vec<String>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Option<LoadSeverity>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("categorical_columns", &self.categorical_columns)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Load a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - The CSV must have a header row; header names become column names.
/// - Column types are inferred from content: a column whose non-empty cells all parse as
///   numbers becomes [`ColumnType::Numeric`], otherwise [`ColumnType::Text`].
/// - Empty/whitespace-only cells load as [`Value::Null`].
/// - Columns listed in [`LoadOptions::categorical_columns`] skip numeric inference and are
///   tagged [`ColumnType::Categorical`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column count stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
pub fn load_csv_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> AnalysisResult<Table> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    let result = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(AnalysisError::from)
        .and_then(|mut rdr| load_csv_from_reader(&mut rdr, options));

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                    columns: table.schema.columns.len(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if options.alert_at_or_above.is_some_and(|threshold| sev >= threshold) {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Load CSV data from an existing CSV reader.
///
/// Reads everything into memory first, then infers column types over the full column
/// content so the type tag is decided exactly once.
pub fn load_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    options: &LoadOptions,
) -> AnalysisResult<Table> {
    let headers = rdr.headers()?.clone();
    let names: Vec<String> = headers.iter().map(|h| h.trim().to_owned()).collect();
    validate_header(&names)?;

    for cat in &options.categorical_columns {
        if !names.iter().any(|n| n == cat) {
            return Err(AnalysisError::ColumnNotFound {
                column: cat.clone(),
            });
        }
    }

    // First pass: collect raw cells. The csv reader rejects ragged rows itself.
    let mut raw_rows: Vec<csv::StringRecord> = Vec::new();
    for record in rdr.records() {
        raw_rows.push(record?);
    }

    let mut columns = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let column_type = if options.categorical_columns.iter().any(|c| c == name) {
            ColumnType::Categorical
        } else {
            infer_column_type(&raw_rows, idx)
        };
        columns.push(Column::new(name.clone(), column_type));
    }
    let schema = Schema::new(columns);

    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in &raw_rows {
        let mut row = Vec::with_capacity(schema.columns.len());
        for (idx, column) in schema.columns.iter().enumerate() {
            row.push(cell_value(record.get(idx).unwrap_or(""), column.column_type));
        }
        rows.push(row);
    }

    Ok(Table::new(schema, rows))
}

fn validate_header(names: &[String]) -> AnalysisResult<()> {
    for (i, name) in names.iter().enumerate() {
        if name.is_empty() {
            return Err(AnalysisError::Malformed {
                message: format!("header column {} has an empty name", i + 1),
            });
        }
        if names[..i].contains(name) {
            return Err(AnalysisError::Malformed {
                message: format!("duplicate header column '{name}'"),
            });
        }
    }
    Ok(())
}

/// A column is numeric iff it has at least one finite numeric cell and every non-empty cell
/// parses as a number. Cells like `NaN` or `inf` parse but are treated as missing, so they
/// neither make a column numeric on their own nor force it to text. All-empty columns
/// default to text.
fn infer_column_type(rows: &[csv::StringRecord], idx: usize) -> ColumnType {
    let mut saw_value = false;
    for record in rows {
        let cell = record.get(idx).unwrap_or("").trim();
        if cell.is_empty() {
            continue;
        }
        match cell.parse::<f64>() {
            Ok(v) if v.is_finite() => saw_value = true,
            Ok(_) => {}
            Err(_) => return ColumnType::Text,
        }
    }
    if saw_value {
        ColumnType::Numeric
    } else {
        ColumnType::Text
    }
}

fn cell_value(raw: &str, column_type: ColumnType) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match column_type {
        ColumnType::Numeric => match trimmed.parse::<f64>() {
            // Non-finite cells (NaN/inf) count as missing, so statistics never see NaN.
            Ok(v) if v.is_finite() => Value::Number(v),
            Ok(_) | Err(_) => Value::Null,
        },
        ColumnType::Text | ColumnType::Categorical => Value::Text(trimmed.to_owned()),
    }
}

fn severity_for_error(e: &AnalysisError) -> LoadSeverity {
    match e {
        AnalysisError::Io(_) => LoadSeverity::Critical,
        AnalysisError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
            _ => LoadSeverity::Error,
        },
        _ => LoadSeverity::Error,
    }
}
