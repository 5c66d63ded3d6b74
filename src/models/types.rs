//! Common domain type definitions
//!
//! This module contains the enum types shared across the growth-screening
//! models. Parsing from the coded forms found in source data is strict:
//! an unrecognized code is an `InvalidInput` error, never a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GrowthScreenError;

/// Sex of a child, as used by the WHO growth standards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Short code used in tabular exports ("M" / "F")
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = GrowthScreenError;

    /// Parse the coded forms used in source data: "M"/"F", "male"/"female",
    /// or the numeric codes "1"/"2". Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" | "1" => Ok(Self::Male),
            "f" | "female" | "2" => Ok(Self::Female),
            other => Err(GrowthScreenError::invalid_input(format!(
                "unrecognized sex value: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// WHO height-for-age classification bands
///
/// Variants are ordered by severity so that `Ord` gives the "healthier"
/// direction: `SeverelyStunted < Stunted < Normal`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Height-for-age Z-score below -3
    SeverelyStunted = 1,
    /// Height-for-age Z-score in [-3, -2)
    Stunted = 2,
    /// Height-for-age Z-score of -2 or above
    Normal = 3,
}

impl Classification {
    /// WHO-style label, as the source application reports it
    #[must_use]
    pub const fn who_label(self) -> &'static str {
        match self {
            Self::SeverelyStunted => "Severely stunted (WHO)",
            Self::Stunted => "Stunted (WHO)",
            Self::Normal => "Not stunted (WHO)",
        }
    }

    /// Whether this band counts as stunting under the WHO definition
    #[must_use]
    pub const fn is_stunted(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeverelyStunted => write!(f, "Severely Stunted"),
            Self::Stunted => write!(f, "Stunted"),
            Self::Normal => write!(f, "Normal"),
        }
    }
}
