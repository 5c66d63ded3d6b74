//! Small end-to-end demonstration of the screening API: load the embedded
//! WHO table, evaluate a handful of raw records, and print the per-row
//! outcomes and the batch summary.

use growth_screen::{
    BatchEvaluator, BatchSummary, GrowthStatusEvaluator, RawMeasurement, ReferenceTable, Result,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let table = ReferenceTable::embedded()?;
    let evaluator = BatchEvaluator::new(GrowthStatusEvaluator::new(table));

    let records = vec![
        RawMeasurement::new("M", "12", "75.0").with_id("normal-12m"),
        RawMeasurement::new("F", "24", "79.0").with_id("stunted-24m"),
        RawMeasurement::new("M", "24", "70.0").with_id("severe-24m"),
        RawMeasurement::new("M", "72", "95.0").with_id("age-out-of-range"),
    ];

    let outcomes = evaluator.evaluate_records(&records);
    for outcome in &outcomes {
        let id = outcome.id.as_deref().unwrap_or("-");
        match &outcome.result {
            Ok(result) => println!(
                "{id}: z = {:+.2} -> {}",
                result.z_score, result.classification
            ),
            Err(e) => println!("{id}: {e}"),
        }
    }

    let summary = BatchSummary::from_outcomes(&outcomes);
    println!(
        "{} rows: {} normal, {} stunted, {} severely stunted, {} failed",
        summary.total, summary.normal, summary.stunted, summary.severely_stunted, summary.failed
    );

    Ok(())
}
