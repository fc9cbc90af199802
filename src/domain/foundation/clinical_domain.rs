//! Clinical domain enumeration.
//!
//! Every catalog question belongs to exactly one clinical domain. Each domain
//! carries a fixed cumulative-score threshold and the follow-up assessment it
//! triggers when met. The table is static configuration, never mutated at
//! runtime.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Clinical category a question is grouped under.
///
/// Declaration order is the deterministic iteration order used by scoring,
/// so triggered assessments always come out in a stable sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalDomain {
    Depression,
    Anxiety,
    Mania,
    SubstanceUse,
}

impl ClinicalDomain {
    /// All domains in deterministic order.
    pub fn all() -> &'static [ClinicalDomain] {
        &[
            ClinicalDomain::Depression,
            ClinicalDomain::Anxiety,
            ClinicalDomain::Mania,
            ClinicalDomain::SubstanceUse,
        ]
    }

    /// Canonical storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClinicalDomain::Depression => "depression",
            ClinicalDomain::Anxiety => "anxiety",
            ClinicalDomain::Mania => "mania",
            ClinicalDomain::SubstanceUse => "substance_use",
        }
    }

    /// Cumulative score at or above which the domain triggers its assessment.
    pub fn threshold(&self) -> i32 {
        match self {
            ClinicalDomain::Depression => 2,
            ClinicalDomain::Anxiety => 2,
            ClinicalDomain::Mania => 2,
            ClinicalDomain::SubstanceUse => 1,
        }
    }

    /// Name of the follow-up assessment this domain triggers.
    ///
    /// Depression and anxiety both map to PHQ-9; scoring deduplicates.
    pub fn assessment(&self) -> &'static str {
        match self {
            ClinicalDomain::Depression => "PHQ-9",
            ClinicalDomain::Anxiety => "PHQ-9",
            ClinicalDomain::Mania => "ASRM",
            ClinicalDomain::SubstanceUse => "ASSIST",
        }
    }
}

impl fmt::Display for ClinicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClinicalDomain {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "depression" => Ok(ClinicalDomain::Depression),
            "anxiety" => Ok(ClinicalDomain::Anxiety),
            "mania" => Ok(ClinicalDomain::Mania),
            "substance_use" => Ok(ClinicalDomain::SubstanceUse),
            other => Err(ValidationError::invalid_format(
                "domain",
                format!("unknown clinical domain '{}'", other),
            )),
        }
    }
}
