//! Credential configuration for acceptance-test sweepers.
//!
//! Identity material is read once from the process environment (or any other
//! [`EnvSource`]) and handed to the rest of the workspace as an immutable
//! [`Credentials`] value.

pub mod credentials;
pub mod env;
pub mod errors;

pub use credentials::{Credentials, PUBLIC_CLOUD_ENVIRONMENT, resolve, resolve_from};
pub use env::{
    ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_ENVIRONMENT, ENV_SUBSCRIPTION_ID, ENV_TENANT_ID,
    EnvSource, ProcessEnv, REQUIRED_ENV_VARS,
};
pub use errors::ConfigError;
