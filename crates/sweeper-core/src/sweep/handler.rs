use tracing::{error, info, warn};

use crate::filter::{SweepDecision, SweepFilter, SweepObserver};

use super::traits::ResourceDeleter;
use super::types::{ResourceDescriptor, SweepPlan, SweepSummary};

/// Split discovered resources into those to delete and those to leave alone.
///
/// Every rejection is reported to `observer`. Nothing is deleted here.
pub fn plan_sweep(
    resources: impl IntoIterator<Item = ResourceDescriptor>,
    target_region: &str,
    filter: &SweepFilter,
    observer: &dyn SweepObserver,
) -> SweepPlan {
    info!(
        event = "core.sweep.plan_started",
        target_region = target_region,
        prefix = filter.prefix(),
    );

    let mut plan = SweepPlan {
        target_region: target_region.to_string(),
        ..Default::default()
    };

    for resource in resources {
        match filter.evaluate(&resource.name, &resource.location, target_region) {
            SweepDecision::Eligible => plan.eligible.push(resource),
            SweepDecision::Skipped(reason) => {
                observer.on_skipped(&resource.name, &reason);
                plan.skipped.push((resource, reason));
            }
        }
    }

    info!(
        event = "core.sweep.plan_completed",
        target_region = target_region,
        eligible = plan.eligible.len(),
        skipped = plan.skipped.len(),
    );

    plan
}

/// Delete every eligible resource in `plan`.
///
/// Individual failures are recorded and the sweep carries on; use
/// [`SweepSummary::into_result`] to turn failures into an error.
pub fn execute_sweep(plan: &SweepPlan, deleter: &dyn ResourceDeleter) -> SweepSummary {
    let resource_type = deleter.resource_type();
    info!(
        event = "core.sweep.execute_started",
        resource_type = resource_type,
        target_region = %plan.target_region,
        count = plan.eligible.len(),
    );

    let mut summary = SweepSummary {
        resource_type: resource_type.to_string(),
        skipped: plan.skipped.len(),
        ..Default::default()
    };

    for resource in &plan.eligible {
        match deleter.delete(resource) {
            Ok(()) => {
                info!(
                    event = "core.sweep.resource_deleted",
                    resource_type = resource_type,
                    resource = %resource.name,
                );
                summary.deleted.push(resource.name.clone());
            }
            Err(e) => {
                error!(
                    event = "core.sweep.resource_delete_failed",
                    resource_type = resource_type,
                    resource = %resource.name,
                    error = %e,
                );
                summary.failed.push((resource.name.clone(), e.to_string()));
            }
        }
    }

    if summary.failed.is_empty() {
        info!(
            event = "core.sweep.execute_completed",
            resource_type = resource_type,
            deleted = summary.deleted.len(),
        );
    } else {
        warn!(
            event = "core.sweep.execute_completed_with_failures",
            resource_type = resource_type,
            deleted = summary.deleted.len(),
            failed = summary.failed.len(),
        );
    }

    summary
}
