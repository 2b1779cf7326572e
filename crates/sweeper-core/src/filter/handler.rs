//! Sweep eligibility decisions.

use std::sync::LazyLock;

use crate::region::{LocationNormalizer, RegionNormalizer};

use super::observer::{SweepObserver, TracingObserver};
use super::types::{SkipReason, SweepDecision};

/// Name prefix shared by every resource an acceptance test creates.
pub const ACCEPTANCE_TEST_PREFIX: &str = "acctest";

static DEFAULT_FILTER: LazyLock<SweepFilter> = LazyLock::new(SweepFilter::default);

/// Decides whether a live resource was left behind by an acceptance test.
///
/// A resource is eligible only if its name starts with the prefix
/// (case-insensitive, strict prefix) AND its normalized location equals the
/// normalized target region. The prefix is checked first.
///
/// Holds only immutable data, so one filter can be shared by any number of
/// sweep workers.
pub struct SweepFilter {
    prefix: String,
    normalizer: Box<dyn LocationNormalizer>,
}

impl SweepFilter {
    pub fn new(prefix: &str, normalizer: impl LocationNormalizer + 'static) -> Self {
        Self {
            prefix: prefix.to_lowercase(),
            normalizer: Box::new(normalizer),
        }
    }

    /// Filter with a custom prefix and the default normalizer.
    pub fn with_prefix(prefix: &str) -> Self {
        Self::new(prefix, RegionNormalizer::new())
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn normalizer(&self) -> &dyn LocationNormalizer {
        self.normalizer.as_ref()
    }

    /// Evaluate one resource. Pure: no logging, no shared state.
    pub fn evaluate(&self, name: &str, resource_location: &str, target_region: &str) -> SweepDecision {
        if !name.to_lowercase().starts_with(&self.prefix) {
            return SweepDecision::Skipped(SkipReason::PrefixMismatch {
                prefix: self.prefix.clone(),
            });
        }

        let resource_location = self.normalizer.normalize(resource_location);
        let target_region = self.normalizer.normalize(target_region);

        if resource_location != target_region {
            return SweepDecision::Skipped(SkipReason::RegionMismatch {
                resource_location,
                target_region,
            });
        }

        SweepDecision::Eligible
    }

    pub fn is_eligible(&self, name: &str, resource_location: &str, target_region: &str) -> bool {
        self.evaluate(name, resource_location, target_region)
            .is_eligible()
    }

    /// Evaluate and report any rejection to `observer`.
    pub fn should_sweep(
        &self,
        name: &str,
        resource_location: &str,
        target_region: &str,
        observer: &dyn SweepObserver,
    ) -> bool {
        match self.evaluate(name, resource_location, target_region) {
            SweepDecision::Eligible => true,
            SweepDecision::Skipped(reason) => {
                observer.on_skipped(name, &reason);
                false
            }
        }
    }
}

impl Default for SweepFilter {
    fn default() -> Self {
        Self::new(ACCEPTANCE_TEST_PREFIX, RegionNormalizer::new())
    }
}

impl std::fmt::Debug for SweepFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SweepFilter")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Whether a resource should be swept, using the default prefix and
/// normalizer. Rejections are logged through [`TracingObserver`].
pub fn is_eligible(name: &str, resource_location: &str, target_region: &str) -> bool {
    DEFAULT_FILTER.should_sweep(name, resource_location, target_region, &TracingObserver)
}
