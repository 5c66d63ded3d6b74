//! WHO reference table
//!
//! Loading, validation, and lookup of the WHO Child Growth Standards
//! height-for-age table: one (median, SD) pair per sex per completed month,
//! months 0 through 60. The table is loaded once at startup, validated for
//! full coverage, and treated as immutable afterwards. Lookup is an exact
//! integer-month match; there is no interpolation and no clamping.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{GrowthScreenError, Result};
use crate::models::{MAX_AGE_MONTHS, Sex};

/// WHO height-for-age table bundled with the crate, transcribed from the
/// published length/height-for-age standards (height-based from 24 months)
const EMBEDDED_TABLE: &str = include_str!("who_lhfa_0_60.json");

/// Reference median and standard deviation for one (sex, month) cell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Median length/height in centimetres
    pub median_cm: f64,
    /// Standard deviation in centimetres
    pub sd_cm: f64,
}

/// One row of the on-disk table format
#[derive(Debug, Deserialize)]
struct ReferenceRow {
    age_months: u32,
    median_cm: f64,
    sd_cm: f64,
}

/// On-disk table format: per-sex row lists plus provenance metadata
#[derive(Debug, Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    source: Option<String>,
    male: Vec<ReferenceRow>,
    female: Vec<ReferenceRow>,
}

/// Immutable WHO height-for-age reference table
///
/// Construct once with [`ReferenceTable::embedded`] or
/// [`ReferenceTable::from_file`] and pass it into the evaluator explicitly;
/// there is no ambient global table.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    points: FxHashMap<(Sex, u32), ReferencePoint>,
    source: Option<String>,
}

impl ReferenceTable {
    /// Load the WHO table bundled with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_TABLE)
    }

    /// Load a table from a JSON string in the bundled format
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ReferenceFile = serde_json::from_str(json)?;
        Self::from_rows(file)
    }

    /// Load a table from a JSON file in the bundled format
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        log::info!("loaded reference table from {}", path.display());
        Self::from_json_str(&content)
    }

    fn from_rows(file: ReferenceFile) -> Result<Self> {
        let mut points = FxHashMap::default();
        points.reserve(2 * (MAX_AGE_MONTHS as usize + 1));

        for (sex, rows) in [(Sex::Male, &file.male), (Sex::Female, &file.female)] {
            for row in rows {
                if row.age_months > MAX_AGE_MONTHS {
                    return Err(GrowthScreenError::ReferenceTable(format!(
                        "{sex} row for month {} is outside 0-{MAX_AGE_MONTHS}",
                        row.age_months
                    )));
                }
                if !row.median_cm.is_finite() || row.median_cm <= 0.0 {
                    return Err(GrowthScreenError::ReferenceTable(format!(
                        "{sex} month {}: median must be positive, got {}",
                        row.age_months, row.median_cm
                    )));
                }
                if !row.sd_cm.is_finite() || row.sd_cm <= 0.0 {
                    return Err(GrowthScreenError::ReferenceTable(format!(
                        "{sex} month {}: standard deviation must be positive, got {}",
                        row.age_months, row.sd_cm
                    )));
                }
                let point = ReferencePoint {
                    median_cm: row.median_cm,
                    sd_cm: row.sd_cm,
                };
                if points.insert((sex, row.age_months), point).is_some() {
                    return Err(GrowthScreenError::ReferenceTable(format!(
                        "duplicate {sex} row for month {}",
                        row.age_months
                    )));
                }
            }
        }

        let table = Self {
            points,
            source: file.source,
        };
        table.validate_coverage()?;
        Ok(table)
    }

    /// Check that every (sex, month) cell for months 0-60 is present
    fn validate_coverage(&self) -> Result<()> {
        for sex in [Sex::Male, Sex::Female] {
            for month in 0..=MAX_AGE_MONTHS {
                if !self.points.contains_key(&(sex, month)) {
                    return Err(GrowthScreenError::ReferenceTable(format!(
                        "incomplete table: no {sex} row for month {month}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Exact-month lookup
    ///
    /// A miss is a `ReferenceDataMissing` configuration error, distinct
    /// from the `InvalidInput` a caller gets for an out-of-range age.
    pub fn lookup(&self, sex: Sex, age_months: u32) -> Result<ReferencePoint> {
        self.points
            .get(&(sex, age_months))
            .copied()
            .ok_or(GrowthScreenError::ReferenceDataMissing { sex, age_months })
    }

    /// Provenance string from the loaded table, if present
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Number of (sex, month) cells in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table holds no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
