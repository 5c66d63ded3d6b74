//! Batch evaluation
//!
//! Order-stable evaluation over a sequence of measurements. Every row is
//! evaluated independently: a failing row is captured as that row's
//! outcome and never aborts or perturbs the rest of the batch. Large
//! batches can fan out across the rayon thread pool; rows are reassembled
//! in input order, so both paths produce identical output.

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::BatchConfig;
use crate::models::{ChildMeasurement, Classification, RawMeasurement, ScreeningOutcome};

use super::evaluator::GrowthStatusEvaluator;

/// Batch wrapper around a [`GrowthStatusEvaluator`]
#[derive(Debug, Clone)]
pub struct BatchEvaluator {
    evaluator: GrowthStatusEvaluator,
    config: BatchConfig,
}

impl BatchEvaluator {
    /// Create a batch evaluator with the default configuration
    #[must_use]
    pub fn new(evaluator: GrowthStatusEvaluator) -> Self {
        Self::with_config(evaluator, BatchConfig::default())
    }

    /// Create a batch evaluator with an explicit configuration
    #[must_use]
    pub const fn with_config(evaluator: GrowthStatusEvaluator, config: BatchConfig) -> Self {
        Self { evaluator, config }
    }

    /// The underlying single-measurement evaluator
    #[must_use]
    pub const fn evaluator(&self) -> &GrowthStatusEvaluator {
        &self.evaluator
    }

    fn evaluate_row(&self, index: usize, measurement: &ChildMeasurement) -> ScreeningOutcome {
        match self.evaluator.evaluate(measurement) {
            Ok(result) => ScreeningOutcome::ok(index, None, *measurement, result),
            Err(e) => ScreeningOutcome::err(index, None, Some(*measurement), e),
        }
    }

    fn evaluate_record_row(&self, index: usize, record: &RawMeasurement) -> ScreeningOutcome {
        match record.parse() {
            Ok(measurement) => match self.evaluator.evaluate(&measurement) {
                Ok(result) => {
                    ScreeningOutcome::ok(index, record.id.clone(), measurement, result)
                }
                Err(e) => ScreeningOutcome::err(index, record.id.clone(), Some(measurement), e),
            },
            Err(e) => ScreeningOutcome::err(index, record.id.clone(), None, e),
        }
    }

    /// Evaluate a sequence of validated measurements
    ///
    /// `output[i]` always corresponds to `measurements[i]`.
    #[must_use]
    pub fn evaluate_all(&self, measurements: &[ChildMeasurement]) -> Vec<ScreeningOutcome> {
        if self.use_parallel(measurements.len()) {
            // Indexed parallel collect preserves input order
            measurements
                .par_iter()
                .enumerate()
                .map(|(i, m)| self.evaluate_row(i, m))
                .collect()
        } else {
            measurements
                .iter()
                .enumerate()
                .map(|(i, m)| self.evaluate_row(i, m))
                .collect()
        }
    }

    /// Evaluate a sequence of raw records, parsing each at the boundary
    ///
    /// A row that fails to parse is captured as that row's `InvalidInput`
    /// outcome; parsing failures never block neighbouring rows.
    #[must_use]
    pub fn evaluate_records(&self, records: &[RawMeasurement]) -> Vec<ScreeningOutcome> {
        if self.use_parallel(records.len()) {
            records
                .par_iter()
                .enumerate()
                .map(|(i, r)| self.evaluate_record_row(i, r))
                .collect()
        } else {
            self.evaluate_records_iter(records).collect()
        }
    }

    /// Sequential row-by-row evaluation as an iterator
    ///
    /// Lets a caller drive progress reporting per row, the way the batch
    /// screening binary does.
    pub fn evaluate_records_iter<'a>(
        &'a self,
        records: &'a [RawMeasurement],
    ) -> impl Iterator<Item = ScreeningOutcome> + 'a {
        records
            .iter()
            .enumerate()
            .map(|(i, r)| self.evaluate_record_row(i, r))
    }

    fn use_parallel(&self, rows: usize) -> bool {
        self.config.parallel && rows >= self.config.parallel_threshold
    }
}

/// Classification counts over a finished batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Total number of rows in the batch
    pub total: usize,
    /// Rows classified Normal
    pub normal: usize,
    /// Rows classified Stunted
    pub stunted: usize,
    /// Rows classified SeverelyStunted
    pub severely_stunted: usize,
    /// Rows that failed (invalid input or missing reference data)
    pub failed: usize,
}

impl BatchSummary {
    /// Tally classifications over a batch result
    #[must_use]
    pub fn from_outcomes(outcomes: &[ScreeningOutcome]) -> Self {
        let counts = outcomes
            .iter()
            .filter_map(ScreeningOutcome::classification)
            .counts();

        let classified: usize = counts.values().sum();
        Self {
            total: outcomes.len(),
            normal: counts.get(&Classification::Normal).copied().unwrap_or(0),
            stunted: counts.get(&Classification::Stunted).copied().unwrap_or(0),
            severely_stunted: counts
                .get(&Classification::SeverelyStunted)
                .copied()
                .unwrap_or(0),
            failed: outcomes.len() - classified,
        }
    }

    /// Share of classified rows in the given band, as a percentage of the
    /// whole batch (0.0 for an empty batch)
    #[must_use]
    pub fn percentage(&self, classification: Classification) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = match classification {
            Classification::Normal => self.normal,
            Classification::Stunted => self.stunted,
            Classification::SeverelyStunted => self.severely_stunted,
        };
        #[allow(clippy::cast_precision_loss)]
        {
            count as f64 / self.total as f64 * 100.0
        }
    }
}
