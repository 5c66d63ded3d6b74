//! Growth status evaluation
//!
//! The core of the crate: convert a validated child measurement into a
//! height-for-age Z-score and a WHO classification band. Pure computation
//! over an immutable reference table; the same input always produces the
//! same output.

use crate::error::Result;
use crate::models::{ChildMeasurement, Classification, EvaluationResult};
use crate::reference::ReferenceTable;

/// Z-score boundary between Stunted and Normal
pub const STUNTED_THRESHOLD: f64 = -2.0;

/// Z-score boundary between SeverelyStunted and Stunted
pub const SEVERELY_STUNTED_THRESHOLD: f64 = -3.0;

/// Map a height-for-age Z-score to its WHO classification band
///
/// The three bands partition the real line with no gap or overlap, and the
/// boundaries are exact: -3.0 is Stunted, -2.0 is Normal.
#[must_use]
pub fn classify(z_score: f64) -> Classification {
    if z_score < SEVERELY_STUNTED_THRESHOLD {
        Classification::SeverelyStunted
    } else if z_score < STUNTED_THRESHOLD {
        Classification::Stunted
    } else {
        Classification::Normal
    }
}

/// Evaluator for single measurements
///
/// Holds the reference table it was constructed with; the table is injected
/// explicitly and never mutated, so an evaluator can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct GrowthStatusEvaluator {
    table: ReferenceTable,
}

impl GrowthStatusEvaluator {
    /// Create an evaluator over a loaded reference table
    #[must_use]
    pub const fn new(table: ReferenceTable) -> Self {
        Self { table }
    }

    /// The reference table this evaluator uses
    #[must_use]
    pub const fn table(&self) -> &ReferenceTable {
        &self.table
    }

    /// Evaluate one measurement
    ///
    /// Looks up the reference median and SD for the measurement's exact
    /// (sex, month) cell, computes the Z-score, and classifies it. Range
    /// validation happens when the `ChildMeasurement` is constructed, so
    /// the only failure left here is a gap in the reference table,
    /// surfaced as `ReferenceDataMissing`.
    pub fn evaluate(&self, measurement: &ChildMeasurement) -> Result<EvaluationResult> {
        let point = self
            .table
            .lookup(measurement.sex(), measurement.age_months())?;

        let z_score = (measurement.height_cm() - point.median_cm) / point.sd_cm;

        Ok(EvaluationResult {
            z_score,
            classification: classify(z_score),
        })
    }
}
