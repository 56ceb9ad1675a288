//! Honey production report: the analysis walkthrough as a text report.
//!
//! [`ReportSummary::compute`] produces structured results so every section is testable
//! without capturing stdout; [`honey_report`] renders those results as human-readable text.
//! Sections whose columns are absent from the loaded table are skipped, uniformly guarded by
//! a column-existence check.

use std::io::Write;

use serde::Serialize;

use crate::analysis::{
    answer_by_filter_then_extreme, arg_extreme, describe_column, filter_where, group_aggregate,
    sort_by, value_counts, Aggregator, Condition, Extreme, Statistics,
};
use crate::error::{AnalysisError, AnalysisResult};
use crate::types::{Table, Value};

const RULE_WIDTH: usize = 70;

/// Structured results for every report section.
///
/// `None`/empty fields mean the section was skipped because its columns are absent.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Statistics for `totalprod`.
    pub production_stats: Option<Statistics>,
    /// Number of records with `year == 2000`.
    pub records_in_2000: Option<usize>,
    /// Number of records with `totalprod > 10_000_000` and `year > 2010`.
    pub high_production_records: Option<usize>,
    /// States ranked by mean `totalprod`, descending, top 10.
    pub top_states_by_mean_production: Vec<(String, f64)>,
    /// Record counts per state, descending, top 10.
    pub records_per_state: Vec<(String, usize)>,
    /// State and amount of the highest `totalprod` among `year == 2012` records.
    pub top_2012_producer: Option<(String, f64)>,
    /// State and amount of the lowest `totalprod` overall.
    pub lowest_producer: Option<(String, f64)>,
    /// Total `totalprod` per year, ascending by year.
    pub annual_production: Vec<(f64, Option<f64>)>,
}

impl ReportSummary {
    /// Run every analysis section against `table`.
    pub fn compute(table: &Table) -> AnalysisResult<Self> {
        let has_state = table.has_column("state");
        let has_year = table.has_column("year");
        let has_prod = table.has_column("totalprod");

        let production_stats = if has_prod {
            skip_if_empty(describe_column(table, "totalprod"))?
        } else {
            None
        };

        let records_in_2000 = if has_year {
            Some(
                filter_where(table, &[Condition::eq("year", Value::Number(2000.0))])?
                    .row_count(),
            )
        } else {
            None
        };

        let high_production_records = if has_prod && has_year {
            Some(
                filter_where(
                    table,
                    &[
                        Condition::gt("totalprod", Value::Number(10_000_000.0)),
                        Condition::gt("year", Value::Number(2010.0)),
                    ],
                )?
                .row_count(),
            )
        } else {
            None
        };

        let top_states_by_mean_production = if has_state && has_prod {
            let mut means: Vec<(String, f64)> =
                group_aggregate(table, "state", "totalprod", Aggregator::Mean)?
                    .into_iter()
                    .filter_map(|(key, agg)| Some((key.to_string(), agg?)))
                    .collect();
            means.sort_by(|a, b| b.1.total_cmp(&a.1));
            means.truncate(10);
            means
        } else {
            Vec::new()
        };

        let records_per_state = if has_state {
            let mut counts: Vec<(String, usize)> = value_counts(table, "state")?
                .into_iter()
                .map(|(v, n)| (v.to_string(), n))
                .collect();
            counts.truncate(10);
            counts
        } else {
            Vec::new()
        };

        let top_2012_producer = if has_state && has_year && has_prod {
            answer_by_filter_then_extreme(
                table,
                &[Condition::eq("year", Value::Number(2012.0))],
                "totalprod",
                Extreme::Max,
            )?
            .and_then(|row| state_and_amount(table, &row))
        } else {
            None
        };

        let lowest_producer = if has_state && has_prod && table.row_count() > 0 {
            skip_if_empty(arg_extreme(table, "totalprod", Extreme::Min))?
                .and_then(|row| state_and_amount(table, &row))
        } else {
            None
        };

        let annual_production = if has_year && has_prod {
            let mut totals: Vec<(f64, Option<f64>)> =
                group_aggregate(table, "year", "totalprod", Aggregator::Sum)?
                    .into_iter()
                    .filter_map(|(key, agg)| Some((key.as_number()?, agg)))
                    .collect();
            totals.sort_by(|a, b| a.0.total_cmp(&b.0));
            totals
        } else {
            Vec::new()
        };

        Ok(Self {
            production_stats,
            records_in_2000,
            high_production_records,
            top_states_by_mean_production,
            records_per_state,
            top_2012_producer,
            lowest_producer,
            annual_production,
        })
    }
}

/// A column with no non-missing values degrades to a skipped section instead of aborting
/// the whole report.
fn skip_if_empty<T>(result: AnalysisResult<T>) -> AnalysisResult<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(AnalysisError::EmptyColumn { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

fn state_and_amount(table: &Table, row: &[Value]) -> Option<(String, f64)> {
    let state_idx = table.schema.index_of("state")?;
    let prod_idx = table.schema.index_of("totalprod")?;
    Some((row[state_idx].to_string(), row[prod_idx].as_number()?))
}

/// Render the full analysis walkthrough for `table` as human-readable text.
pub fn honey_report<W: Write>(table: &Table, out: &mut W) -> AnalysisResult<()> {
    let summary = ReportSummary::compute(table)?;

    section(out, "Simple Data Analysis Report")?;
    writeln!(out, "Loaded {} records.", table.row_count())?;
    writeln!(out)?;

    rule(out, '-')?;
    writeln!(out, "FIRST FEW ROWS")?;
    rule(out, '-')?;
    write_rows(out, &table.head(3))?;
    writeln!(out)?;

    if let Some(stats) = &summary.production_stats {
        section(out, "SECTION 1: CALCULATING STATISTICS")?;
        writeln!(out, "Total Honey Production Statistics:")?;
        rule(out, '-')?;
        writeln!(out, "  Mean (Average):       {}", thousands(stats.mean, 2))?;
        writeln!(out, "  Median (Middle):      {}", thousands(stats.median, 2))?;
        writeln!(out, "  Mode (Most common):   {}", thousands(stats.mode, 2))?;
        writeln!(out, "  Std Dev:              {}", thousands(stats.std_dev, 2))?;
        writeln!(out, "  Minimum:              {}", thousands(stats.min, 2))?;
        writeln!(out, "  Maximum:              {}", thousands(stats.max, 2))?;
        writeln!(out)?;
    }

    if summary.records_in_2000.is_some() || summary.high_production_records.is_some() {
        section(out, "SECTION 2: FILTERING DATA")?;
        if let Some(n) = summary.records_in_2000 {
            writeln!(out, "Records from year 2000:")?;
            rule(out, '-')?;
            writeln!(out, "Found {n} records")?;
            writeln!(out)?;
            let matches =
                filter_where(table, &[Condition::eq("year", Value::Number(2000.0))])?;
            write_rows(out, &matches.head(5))?;
            writeln!(out)?;
        }
        if let Some(n) = summary.high_production_records {
            writeln!(out, "High production years (>10M pounds after 2010):")?;
            rule(out, '-')?;
            writeln!(out, "Found {n} records")?;
            writeln!(out)?;
        }
    }

    if !summary.top_states_by_mean_production.is_empty() {
        section(out, "SECTION 3: GROUPING AND AGGREGATING DATA")?;
        writeln!(out, "Top 10 States by Average Honey Production")?;
        rule(out, '-')?;
        for (i, (state, avg)) in summary.top_states_by_mean_production.iter().enumerate() {
            writeln!(out, "{:2}. {:<20} {} pounds", i + 1, state, thousands(*avg, 0))?;
        }
        writeln!(out)?;
    }

    if table.has_column("totalprod") {
        section(out, "SECTION 4: SORTING DATA")?;
        writeln!(out, "Records with Highest Production")?;
        rule(out, '-')?;
        let sorted = sort_by(table, "totalprod", false)?;
        let shown = ["state", "year", "totalprod"];
        let preview = if shown.iter().all(|c| table.has_column(c)) {
            sorted.select(&shown)?.head(5)
        } else {
            let first: Vec<&str> = table.schema.column_names().take(3).collect();
            sorted.select(&first)?.head(5)
        };
        write_rows(out, &preview)?;
        writeln!(out)?;
    }

    if !summary.records_per_state.is_empty() {
        section(out, "SECTION 5: COUNTING VALUES")?;
        writeln!(out, "Number of records per state (top 10):")?;
        rule(out, '-')?;
        for (state, count) in &summary.records_per_state {
            writeln!(out, "{state:<20} {count:3} records")?;
        }
        writeln!(out)?;
    }

    section(out, "SECTION 6: ANSWERING REAL QUESTIONS")?;
    writeln!(out, "Question: Which state had the highest honey production in 2012?")?;
    rule(out, '-')?;
    match &summary.top_2012_producer {
        Some((state, amount)) => {
            writeln!(out, "Answer: {state}")?;
            writeln!(out, "Production: {} pounds", thousands(*amount, 0))?;
        }
        None => writeln!(out, "No data available to answer this question.")?,
    }
    writeln!(out)?;

    writeln!(out, "Question: Which state had the lowest honey production overall?")?;
    rule(out, '-')?;
    match &summary.lowest_producer {
        Some((state, amount)) => {
            writeln!(out, "Answer: {state}")?;
            writeln!(out, "Production: {} pounds", thousands(*amount, 0))?;
        }
        None => writeln!(out, "No data available to answer this question.")?,
    }
    writeln!(out)?;

    if !summary.annual_production.is_empty() {
        writeln!(out, "Total production by year:")?;
        rule(out, '-')?;
        for (year, total) in &summary.annual_production {
            let year = Value::Number(*year).to_string();
            match total {
                Some(t) => writeln!(out, "{year:<6} {}", thousands(*t, 0))?,
                None => writeln!(out, "{year:<6} (no data)")?,
            }
        }
    }

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    rule(out, '=')?;
    writeln!(out, "{title}")?;
    rule(out, '=')?;
    writeln!(out)
}

fn rule<W: Write>(out: &mut W, ch: char) -> std::io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(RULE_WIDTH))
}

fn write_rows<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    let header: Vec<String> = table.schema.column_names().map(str::to_owned).collect();
    writeln!(out, "{}", format_cells(&header))?;
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(Value::to_string).collect();
        writeln!(out, "{}", format_cells(&cells))?;
    }
    Ok(())
}

fn format_cells(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| format!("{c:<14}"))
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end()
        .to_owned()
}

/// Format with thousands separators, e.g. `1,234,567.89`.
fn thousands(v: f64, decimals: usize) -> String {
    let formatted = format!("{v:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
