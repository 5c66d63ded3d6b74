//! Child measurement model
//!
//! This module contains the validated `ChildMeasurement` input type and the
//! `RawMeasurement` parsing boundary. Raw string fields (as they arrive from
//! a form or a tabular file) are parsed and range-checked here, before any
//! domain logic runs; a measurement that constructs successfully always
//! satisfies the domain invariants.

use serde::{Deserialize, Serialize};

use crate::error::{GrowthScreenError, Result};
use crate::models::types::Sex;

/// Oldest age, in completed months, covered by the WHO under-five standards
pub const MAX_AGE_MONTHS: u32 = 60;

/// A validated child measurement
///
/// Fields are read-only after construction; use [`ChildMeasurement::new`]
/// so the range invariants hold for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChildMeasurement {
    sex: Sex,
    age_months: u32,
    height_cm: f64,
}

impl ChildMeasurement {
    /// Create a validated measurement
    ///
    /// Rejects ages above [`MAX_AGE_MONTHS`] and heights that are not
    /// strictly positive finite numbers.
    pub fn new(sex: Sex, age_months: u32, height_cm: f64) -> Result<Self> {
        if age_months > MAX_AGE_MONTHS {
            return Err(GrowthScreenError::invalid_input(format!(
                "age {age_months} months is outside the supported range 0-{MAX_AGE_MONTHS}"
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(GrowthScreenError::invalid_input(format!(
                "height must be a positive number of centimetres, got {height_cm}"
            )));
        }
        Ok(Self {
            sex,
            age_months,
            height_cm,
        })
    }

    /// Sex of the child
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Age in completed months
    #[must_use]
    pub const fn age_months(&self) -> u32 {
        self.age_months
    }

    /// Current length/height in centimetres
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// An unvalidated measurement record, exactly as it arrives from the edge
///
/// Every field is a raw string; [`RawMeasurement::parse`] is the single
/// place where these are turned into a typed [`ChildMeasurement`]. The
/// optional `id` is carried through batch output for traceability back to
/// the source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMeasurement {
    /// Optional row identifier from the source data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Sex code ("M"/"F", "male"/"female", "1"/"2")
    pub sex: String,
    /// Age in completed months, 0-60
    pub age_months: String,
    /// Current length/height in centimetres
    pub height_cm: String,
}

impl RawMeasurement {
    /// Build a raw record from its three field values
    #[must_use]
    pub fn new(sex: &str, age_months: &str, height_cm: &str) -> Self {
        Self {
            id: None,
            sex: sex.to_string(),
            age_months: age_months.to_string(),
            height_cm: height_cm.to_string(),
        }
    }

    /// Attach a source row identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Parse and validate into a typed [`ChildMeasurement`]
    ///
    /// Malformed fields and out-of-range values are all reported as
    /// `InvalidInput`. A negative age is rejected here rather than wrapped
    /// by the unsigned conversion.
    pub fn parse(&self) -> Result<ChildMeasurement> {
        let sex: Sex = self.sex.parse()?;

        let age_trimmed = self.age_months.trim();
        let age_months: i64 = age_trimmed.parse().map_err(|_| {
            GrowthScreenError::invalid_input(format!(
                "age must be a whole number of months, got {age_trimmed:?}"
            ))
        })?;
        let age_months = u32::try_from(age_months).map_err(|_| {
            GrowthScreenError::invalid_input(format!(
                "age {age_months} months is outside the supported range 0-{MAX_AGE_MONTHS}"
            ))
        })?;

        let height_trimmed = self.height_cm.trim();
        let height_cm: f64 = height_trimmed.parse().map_err(|_| {
            GrowthScreenError::invalid_input(format!(
                "height must be a number of centimetres, got {height_trimmed:?}"
            ))
        })?;

        ChildMeasurement::new(sex, age_months, height_cm)
    }
}
