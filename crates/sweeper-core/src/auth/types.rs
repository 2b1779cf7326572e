use sweeper_config::Credentials;

/// Capability flags passed to the authentication collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthOptions {
    /// Non-interactive client-secret authentication is allowed.
    pub supports_client_secret_auth: bool,
}

impl AuthOptions {
    /// Options used by sweepers: service principal with a client secret only.
    pub const fn for_sweepers() -> Self {
        Self {
            supports_client_secret_auth: true,
        }
    }
}

/// Mode flags passed to the client-construction collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientOptions {
    /// Strict mode: do not register resource providers on the subscription.
    pub skip_provider_registration: bool,
}

impl ClientOptions {
    /// Non-strict, read-write mode used by sweepers.
    pub const fn for_sweepers() -> Self {
        Self {
            skip_provider_registration: false,
        }
    }
}

/// An authenticated client bound to the credentials it was built from.
#[derive(Debug)]
pub struct ClientHandle<C> {
    client: C,
    subscription_id: String,
    environment: String,
    options: ClientOptions,
}

impl<C> ClientHandle<C> {
    pub(crate) fn new(client: C, credentials: &Credentials, options: ClientOptions) -> Self {
        Self {
            client,
            subscription_id: credentials.subscription_id().to_string(),
            environment: credentials.environment().to_string(),
            options,
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn skip_provider_registration(&self) -> bool {
        self.options.skip_provider_registration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweeper_options() {
        assert!(AuthOptions::for_sweepers().supports_client_secret_auth);
        assert!(!ClientOptions::for_sweepers().skip_provider_registration);
    }
}
