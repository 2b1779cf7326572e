pub mod bootstrap;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export public API
pub use bootstrap::bootstrap;
pub use errors::{BootstrapError, CollaboratorError};
pub use traits::{CanAuthenticate, CanBuildClient};
pub use types::{AuthOptions, ClientHandle, ClientOptions};
