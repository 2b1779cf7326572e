//! Reporting for sweep filter rejections.
//!
//! The filter itself is a pure predicate; observers decide how skipped
//! resources are reported.

use tracing::info;

use super::types::SkipReason;

/// Receives a callback for every resource the filter rejects.
pub trait SweepObserver: Send + Sync {
    fn on_skipped(&self, name: &str, reason: &SkipReason);
}

/// Logs rejections as structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SweepObserver for TracingObserver {
    fn on_skipped(&self, name: &str, reason: &SkipReason) {
        match reason {
            SkipReason::PrefixMismatch { prefix } => {
                info!(
                    event = "core.filter.skipped_prefix_mismatch",
                    resource = name,
                    prefix = %prefix,
                    "Ignoring resource as it doesn't start with the acceptance test prefix"
                );
            }
            SkipReason::RegionMismatch {
                resource_location,
                target_region,
            } => {
                info!(
                    event = "core.filter.skipped_region_mismatch",
                    resource = name,
                    resource_location = %resource_location,
                    target_region = %target_region,
                    "Resource region doesn't match the sweep region"
                );
            }
        }
    }
}

/// Ignores every rejection.
impl SweepObserver for () {
    fn on_skipped(&self, _name: &str, _reason: &SkipReason) {}
}
