use serde::Serialize;

use sweeper_core::{SweepDecision, SweepPlan};

/// Single-resource decision for `check --json`.
#[derive(Serialize)]
pub struct CheckOutput<'a> {
    pub name: &'a str,
    /// Location as given; a region mismatch reason carries the normalized forms.
    pub location: &'a str,
    pub region: &'a str,
    pub eligible: bool,
    #[serde(flatten)]
    pub decision: &'a SweepDecision,
}

/// Plan output for `plan --json`.
#[derive(Serialize)]
pub struct PlanOutput<'a> {
    pub prefix: &'a str,
    pub eligible_count: usize,
    pub skipped_count: usize,
    #[serde(flatten)]
    pub plan: &'a SweepPlan,
}
