pub mod errors;
pub mod handler;
pub mod traits;
pub mod types;

// Public API exports
pub use errors::SweepRunError;
pub use handler::{execute_sweep, plan_sweep};
pub use traits::ResourceDeleter;
pub use types::{ResourceDescriptor, SweepPlan, SweepSummary};
