//! Core library for SWEEPER.
//!
//! Decides which live cloud resources were left behind by acceptance tests
//! and bootstraps the authenticated client used to delete them.

pub mod auth;
pub mod errors;
pub mod filter;
pub mod logging;
pub mod region;
pub mod sweep;

pub use auth::{
    AuthOptions, BootstrapError, CanAuthenticate, CanBuildClient, ClientHandle, ClientOptions,
    CollaboratorError, bootstrap,
};
pub use errors::{SweeperError, SweeperResult};
pub use filter::{
    ACCEPTANCE_TEST_PREFIX, SkipReason, SweepDecision, SweepFilter, SweepObserver,
    TracingObserver, is_eligible,
};
pub use logging::init_logging;
pub use region::{LocationNormalizer, RegionNormalizer, normalize_location};
pub use sweep::{
    ResourceDeleter, ResourceDescriptor, SweepPlan, SweepRunError, SweepSummary, execute_sweep,
    plan_sweep,
};

pub use sweeper_config::{ConfigError, Credentials};
