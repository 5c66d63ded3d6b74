//! A Rust library for WHO height-for-age Z-score evaluation and stunting
//! classification, with order-stable batch screening over raw tabular
//! records.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;

// Re-export the most common types for easier use
// Core types
pub use config::BatchConfig;
pub use error::{GrowthScreenError, Result};
pub use models::{
    ChildMeasurement, Classification, EvaluationResult, MAX_AGE_MONTHS, RawMeasurement,
    ScreeningOutcome, Sex,
};
pub use reference::{ReferencePoint, ReferenceTable};

// Evaluation
pub use algorithm::{
    BatchEvaluator, BatchSummary, GrowthStatusEvaluator, SEVERELY_STUNTED_THRESHOLD,
    STUNTED_THRESHOLD, classify,
};
