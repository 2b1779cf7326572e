use std::error::Error;

pub use sweeper_config::ConfigError;

/// Base trait for all sweeper errors
pub trait SweeperError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the operator can fix this by changing their environment or input
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type SweeperResult<T> = Result<T, Box<dyn SweeperError>>;

impl SweeperError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::MissingCredentials { .. } => "CONFIG_MISSING_CREDENTIALS",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, ConfigError::MissingCredentials { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_boxed() -> SweeperResult<()> {
        Err(Box::new(ConfigError::MissingCredentials {
            missing: vec!["ARM_TENANT_ID"],
        }))
    }

    #[test]
    fn test_sweeper_result() {
        let _result: SweeperResult<i32> = Ok(42);
    }

    #[test]
    fn test_config_error_codes() {
        let error = ConfigError::MissingCredentials {
            missing: vec!["ARM_CLIENT_ID"],
        };
        assert_eq!(error.error_code(), "CONFIG_MISSING_CREDENTIALS");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_boxed_config_error_keeps_code() {
        let error = resolve_boxed().unwrap_err();
        assert_eq!(error.error_code(), "CONFIG_MISSING_CREDENTIALS");
        assert!(error.to_string().contains("ARM_TENANT_ID"));
    }
}
