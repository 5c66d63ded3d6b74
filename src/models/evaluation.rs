//! Evaluation result models
//!
//! Output types produced by the evaluator: the per-measurement
//! `EvaluationResult` and the `ScreeningOutcome` wrapper used by batch
//! evaluation to pair each input row with its own result or error.

use serde::Serialize;

use crate::error::{GrowthScreenError, Result};
use crate::models::measurement::ChildMeasurement;
use crate::models::types::Classification;

/// Result of evaluating a single measurement against the WHO standards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// Height-for-age Z-score
    pub z_score: f64,
    /// WHO classification band for that Z-score
    pub classification: Classification,
}

impl EvaluationResult {
    /// Whether this result counts as stunting under the WHO definition
    #[must_use]
    pub const fn is_stunted(&self) -> bool {
        self.classification.is_stunted()
    }
}

/// One row of a batch evaluation
///
/// Carries the original input (and its position in the batch) next to the
/// per-row outcome, so a failing row stays traceable to its source without
/// affecting any other row.
#[derive(Debug)]
pub struct ScreeningOutcome {
    /// Position of this row in the input sequence
    pub index: usize,
    /// Optional source row identifier, when the input carried one
    pub id: Option<String>,
    /// The measurement as parsed (None when parsing itself failed)
    pub measurement: Option<ChildMeasurement>,
    /// The evaluation result, or the error for this row alone
    pub result: Result<EvaluationResult>,
}

impl ScreeningOutcome {
    /// Shorthand for a successfully evaluated row
    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.result.as_ref().ok().map(|r| r.classification)
    }

    /// Whether this row failed with a user-correctable input error
    #[must_use]
    pub fn failed_on_input(&self) -> bool {
        matches!(&self.result, Err(e) if e.is_invalid_input())
    }

    pub(crate) fn ok(
        index: usize,
        id: Option<String>,
        measurement: ChildMeasurement,
        result: EvaluationResult,
    ) -> Self {
        Self {
            index,
            id,
            measurement: Some(measurement),
            result: Ok(result),
        }
    }

    pub(crate) fn err(
        index: usize,
        id: Option<String>,
        measurement: Option<ChildMeasurement>,
        error: GrowthScreenError,
    ) -> Self {
        Self {
            index,
            id,
            measurement,
            result: Err(error),
        }
    }
}
