use std::fmt;

use serde::Serialize;

/// Why a resource was left alone by the sweep filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The name does not start with the acceptance-test prefix.
    PrefixMismatch { prefix: String },
    /// The resource lives outside the region being swept.
    RegionMismatch {
        resource_location: String,
        target_region: String,
    },
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::PrefixMismatch { .. } => "prefix_mismatch",
            SkipReason::RegionMismatch { .. } => "region_mismatch",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::PrefixMismatch { prefix } => {
                write!(f, "name doesn't start with `{}`", prefix)
            }
            SkipReason::RegionMismatch {
                resource_location,
                target_region,
            } => write!(f, "region {:?} isn't {:?}", resource_location, target_region),
        }
    }
}

/// Outcome of evaluating one resource against the sweep filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum SweepDecision {
    Eligible,
    Skipped(SkipReason),
}

impl SweepDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, SweepDecision::Eligible)
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            SweepDecision::Eligible => None,
            SweepDecision::Skipped(reason) => Some(reason),
        }
    }
}
