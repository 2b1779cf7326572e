pub mod handler;
pub mod observer;
pub mod types;

// Public API exports
pub use handler::{ACCEPTANCE_TEST_PREFIX, SweepFilter, is_eligible};
pub use observer::{SweepObserver, TracingObserver};
pub use types::{SkipReason, SweepDecision};
