//! Credential-to-client bootstrap.

use sweeper_config::Credentials;
use tracing::{error, info};

use super::errors::BootstrapError;
use super::traits::{CanAuthenticate, CanBuildClient};
use super::types::{AuthOptions, ClientHandle, ClientOptions};

/// Build an authenticated client for a sweep run.
///
/// Authenticates with client-secret support enabled, then builds the client
/// in non-strict (read-write) mode. Neither step is retried; collaborator
/// failures are returned with their message intact.
pub fn bootstrap<A, B>(
    credentials: &Credentials,
    authenticator: &A,
    builder: &B,
) -> Result<ClientHandle<B::Client>, BootstrapError>
where
    A: CanAuthenticate + ?Sized,
    B: CanBuildClient<A::Output> + ?Sized,
{
    info!(
        event = "core.auth.bootstrap_started",
        subscription_id = credentials.subscription_id(),
        environment = credentials.environment(),
    );

    let auth = authenticator
        .authenticate(credentials, AuthOptions::for_sweepers())
        .map_err(|source| {
            error!(event = "core.auth.authenticate_failed", error = %source);
            BootstrapError::Authentication { source }
        })?;

    let options = ClientOptions::for_sweepers();
    let client = builder.build_client(auth, options).map_err(|source| {
        error!(event = "core.auth.build_client_failed", error = %source);
        BootstrapError::ClientConstruction { source }
    })?;

    info!(
        event = "core.auth.bootstrap_completed",
        subscription_id = credentials.subscription_id(),
    );

    Ok(ClientHandle::new(client, credentials, options))
}
