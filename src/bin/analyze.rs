//! Command-line entrypoint: load a CSV file and print the analysis report.
//!
//! Usage: `analyze [--json] [--categorical COL]... [PATH]`
//!
//! `PATH` defaults to `data/honey.csv`. With `--json`, the structured summary is printed as
//! JSON instead of the text report.

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use table_analyzer::ingestion::{load_csv_from_path, LoadOptions, LoadSeverity, StdErrObserver};
use table_analyzer::report::{honey_report, ReportSummary};

const USAGE: &str = "usage: analyze [--json] [--categorical COL]... [PATH]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    path: String,
    json: bool,
    categorical: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn parse_args<I: Iterator<Item = String>>(mut it: I) -> Result<Parsed, String> {
    let mut args = Args {
        path: "data/honey.csv".to_string(),
        json: false,
        categorical: Vec::new(),
    };

    let mut path_set = false;
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => args.json = true,
            "--categorical" => {
                let col = it
                    .next()
                    .ok_or_else(|| "--categorical requires a column name".to_string())?;
                args.categorical.push(col);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            other if !path_set => {
                args.path = other.to_string();
                path_set = true;
            }
            other => return Err(format!("unexpected argument '{other}'")),
        }
    }
    Ok(Parsed::Run(args))
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let opts = LoadOptions {
        categorical_columns: args.categorical.clone(),
        observer: Some(Arc::new(StdErrObserver)),
        alert_at_or_above: Some(LoadSeverity::Critical),
    };

    let table = match load_csv_from_path(&args.path, &opts) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("failed to load '{}': {e}", args.path);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = if args.json {
        ReportSummary::compute(&table)
            .map_err(|e| e.to_string())
            .and_then(|summary| {
                serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())
            })
            .and_then(|json| writeln!(out, "{json}").map_err(|e| e.to_string()))
    } else {
        honey_report(&table, &mut out).map_err(|e| e.to_string())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("analysis failed: {msg}");
            ExitCode::FAILURE
        }
    }
}
