//! Typed domain models for growth screening
//!
//! The models follow a strict boundary: raw string records are parsed into
//! validated measurement types here, and everything downstream operates on
//! the typed forms only.

pub mod evaluation;
pub mod measurement;
pub mod types;

pub use evaluation::{EvaluationResult, ScreeningOutcome};
pub use measurement::{ChildMeasurement, MAX_AGE_MONTHS, RawMeasurement};
pub use types::{Classification, Sex};
