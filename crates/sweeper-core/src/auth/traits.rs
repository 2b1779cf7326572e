//! Collaborator traits for client bootstrap.
//!
//! Token exchange and SDK client assembly live outside this crate. Sweepers
//! only need these two narrow capabilities, which keeps the bootstrap path
//! testable without network access.

use sweeper_config::Credentials;

use super::errors::CollaboratorError;
use super::types::{AuthOptions, ClientOptions};

/// Exchanges credentials for an authentication result (e.g. an OAuth token source).
pub trait CanAuthenticate: Send + Sync {
    /// Opaque result handed on to [`CanBuildClient`].
    type Output;

    /// Authenticate against the cloud identity provider.
    ///
    /// May perform network I/O. Retries and timeouts are the implementor's
    /// responsibility.
    fn authenticate(
        &self,
        credentials: &Credentials,
        options: AuthOptions,
    ) -> Result<Self::Output, CollaboratorError>;
}

/// Assembles the SDK client from an authentication result.
pub trait CanBuildClient<A>: Send + Sync {
    type Client;

    fn build_client(&self, auth: A, options: ClientOptions) -> Result<Self::Client, CollaboratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockAuthenticator;

    impl CanAuthenticate for MockAuthenticator {
        type Output = String;

        fn authenticate(
            &self,
            credentials: &Credentials,
            options: AuthOptions,
        ) -> Result<String, CollaboratorError> {
            if options.supports_client_secret_auth && !credentials.client_secret().is_empty() {
                Ok(format!("token-for-{}", credentials.client_id()))
            } else {
                Err("client secret auth not supported".into())
            }
        }
    }

    struct MockBuilder;

    impl CanBuildClient<String> for MockBuilder {
        type Client = (String, bool);

        fn build_client(
            &self,
            auth: String,
            options: ClientOptions,
        ) -> Result<(String, bool), CollaboratorError> {
            Ok((auth, options.skip_provider_registration))
        }
    }

    #[test]
    fn mock_collaborators_chain() {
        let env = std::collections::HashMap::from([
            ("ARM_SUBSCRIPTION_ID".to_string(), "sub".to_string()),
            ("ARM_CLIENT_ID".to_string(), "app".to_string()),
            ("ARM_CLIENT_SECRET".to_string(), "secret".to_string()),
            ("ARM_TENANT_ID".to_string(), "tenant".to_string()),
        ]);
        let creds = sweeper_config::resolve_from(&env).unwrap();

        let token = MockAuthenticator
            .authenticate(&creds, AuthOptions::for_sweepers())
            .unwrap();
        let client = MockBuilder
            .build_client(token, ClientOptions::for_sweepers())
            .unwrap();
        assert_eq!(client, ("token-for-app".to_string(), false));
    }
}
