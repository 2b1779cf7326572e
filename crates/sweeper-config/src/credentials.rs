//! Credential resolution from environment variables.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::env::{
    ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_ENVIRONMENT, ENV_SUBSCRIPTION_ID, ENV_TENANT_ID,
    EnvSource, ProcessEnv,
};
use crate::errors::ConfigError;

/// Environment name used when `ARM_ENVIRONMENT` is unset or empty.
pub const PUBLIC_CLOUD_ENVIRONMENT: &str = "public";

/// Identity material for one sweep run.
///
/// Built once by [`resolve`] and never mutated afterwards. The client secret
/// is neither serialized nor shown in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    subscription_id: String,
    client_id: String,
    #[serde(skip_serializing)]
    client_secret: String,
    tenant_id: String,
    environment: String,
}

impl Credentials {
    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("subscription_id", &self.subscription_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Resolve credentials from the process environment.
pub fn resolve() -> Result<Credentials, ConfigError> {
    resolve_from(&ProcessEnv)
}

/// Resolve credentials from an arbitrary environment source.
///
/// Fails with [`ConfigError::MissingCredentials`] if any identity variable is
/// unset or empty. Performs no I/O beyond reading `env`.
pub fn resolve_from(env: &impl EnvSource) -> Result<Credentials, ConfigError> {
    debug!(event = "config.credentials.resolve_started");

    let mut missing = Vec::new();
    let mut read_required = |key: &'static str| -> String {
        let value = env.var(key).unwrap_or_default();
        if value.is_empty() {
            missing.push(key);
        }
        value
    };

    let subscription_id = read_required(ENV_SUBSCRIPTION_ID);
    let client_id = read_required(ENV_CLIENT_ID);
    let client_secret = read_required(ENV_CLIENT_SECRET);
    let tenant_id = read_required(ENV_TENANT_ID);

    let environment = env
        .var(ENV_ENVIRONMENT)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| PUBLIC_CLOUD_ENVIRONMENT.to_string());

    if !missing.is_empty() {
        warn!(
            event = "config.credentials.resolve_failed",
            missing = ?missing,
        );
        return Err(ConfigError::MissingCredentials { missing });
    }

    debug!(
        event = "config.credentials.resolve_completed",
        subscription_id = %subscription_id,
        tenant_id = %tenant_id,
        environment = %environment,
    );

    Ok(Credentials {
        subscription_id,
        client_id,
        client_secret,
        tenant_id,
        environment,
    })
}
