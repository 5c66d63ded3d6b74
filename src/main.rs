//! Batch growth screening CLI
//!
//! Reads a JSON array of raw measurement records, evaluates each row
//! against the WHO height-for-age standards, and writes a report that
//! preserves input order and appends the Z-score and classification per
//! row. Row failures are reported in place; they never abort the run.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use log::{info, warn};
use serde::Serialize;

use growth_screen::{
    BatchEvaluator, BatchSummary, Classification, GrowthStatusEvaluator, RawMeasurement,
    ReferenceTable, ScreeningOutcome,
};

#[global_allocator]
static ALLOC: snmalloc_rs::SnMalloc = snmalloc_rs::SnMalloc;

/// One row of the output report: the raw input columns, plus the appended
/// score columns (or the row's error)
#[derive(Serialize)]
struct ReportRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    sex: &'a str,
    age_months: &'a str,
    height_cm: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    z_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    classification: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> ReportRow<'a> {
    fn new(record: &'a RawMeasurement, outcome: &ScreeningOutcome) -> Self {
        let (z_score, classification, error) = match &outcome.result {
            Ok(result) => (
                Some(result.z_score),
                Some(result.classification.who_label()),
                None,
            ),
            Err(e) => (None, None, Some(e.to_string())),
        };
        Self {
            id: record.id.as_deref(),
            sex: &record.sex,
            age_months: &record.age_months,
            height_cm: &record.height_cm,
            z_score,
            classification,
            error,
        }
    }
}

struct Args {
    input: PathBuf,
    table: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args() -> Option<Args> {
    let mut input = None;
    let mut table = None;
    let mut output = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--table" => table = Some(PathBuf::from(args.next()?)),
            "--output" => output = Some(PathBuf::from(args.next()?)),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }

    Some(Args {
        input: input?,
        table,
        output,
    })
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Load the reference table: an explicit standards file, or the
    // embedded WHO table
    let table = match &args.table {
        Some(path) => ReferenceTable::from_file(path)
            .with_context(|| format!("failed to load reference table {}", path.display()))?,
        None => ReferenceTable::embedded().context("embedded reference table is invalid")?,
    };
    if let Some(source) = table.source() {
        info!("reference table: {source}");
    }

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read input file {}", args.input.display()))?;
    let records: Vec<RawMeasurement> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse input file {}", args.input.display()))?;
    info!("screening {} records from {}", records.len(), args.input.display());

    let evaluator = BatchEvaluator::new(GrowthStatusEvaluator::new(table));

    let bar = ProgressBar::new(records.len() as u64).with_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let start = Instant::now();
    let outcomes: Vec<ScreeningOutcome> = evaluator
        .evaluate_records_iter(&records)
        .progress_with(bar)
        .collect();
    info!("evaluated {} rows in {:?}", outcomes.len(), start.elapsed());

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!(
        "normal: {} ({:.1}%), stunted: {} ({:.1}%), severely stunted: {} ({:.1}%)",
        summary.normal,
        summary.percentage(Classification::Normal),
        summary.stunted,
        summary.percentage(Classification::Stunted),
        summary.severely_stunted,
        summary.percentage(Classification::SeverelyStunted),
    );
    if summary.failed > 0 {
        warn!("{} of {} rows failed; see per-row errors in the report", summary.failed, summary.total);
    }

    let rows: Vec<ReportRow<'_>> = records
        .iter()
        .zip(&outcomes)
        .map(|(record, outcome)| ReportRow::new(record, outcome))
        .collect();
    let report = serde_json::to_string_pretty(&rows).context("failed to serialize report")?;

    match &args.output {
        Some(path) => {
            fs::write(path, report)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => println!("{report}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(args) = parse_args() else {
        eprintln!("usage: growth-screen <input.json> [--table <who.json>] [--output <report.json>]");
        return ExitCode::FAILURE;
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
