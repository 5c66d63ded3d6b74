//! Error handling for growth screening.
//!
//! The taxonomy separates user-correctable input problems from
//! configuration-level reference-data problems: an `InvalidInput` means the
//! measurement itself is malformed, while `ReferenceDataMissing` means the
//! loaded WHO table has no row for an otherwise valid (sex, age) pair.

use crate::models::Sex;

/// Errors produced while loading reference data or evaluating measurements
#[derive(Debug, thiserror::Error)]
pub enum GrowthScreenError {
    /// Malformed or out-of-range measurement (user-correctable)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No WHO reference row for the given sex and age month
    #[error("no WHO reference data for sex {sex}, age {age_months} months")]
    ReferenceDataMissing {
        /// Sex of the measurement that missed the table
        sex: Sex,
        /// Age in completed months
        age_months: u32,
    },

    /// Reference table failed validation at load time
    #[error("reference table error: {0}")]
    ReferenceTable(String),

    /// Error reading a reference or input file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing JSON data
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GrowthScreenError {
    /// Build an `InvalidInput` error from anything displayable
    pub fn invalid_input(reason: impl std::fmt::Display) -> Self {
        Self::InvalidInput(reason.to_string())
    }

    /// Whether this error is user-correctable (a bad measurement, not a
    /// configuration problem)
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

/// Result type for growth-screening operations
pub type Result<T> = std::result::Result<T, GrowthScreenError>;
