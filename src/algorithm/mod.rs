//! Evaluation algorithms
//!
//! Single-measurement Z-score evaluation and the order-stable batch
//! wrapper around it.

pub mod batch;
pub mod evaluator;

pub use batch::{BatchEvaluator, BatchSummary};
pub use evaluator::{
    GrowthStatusEvaluator, SEVERELY_STUNTED_THRESHOLD, STUNTED_THRESHOLD, classify,
};
