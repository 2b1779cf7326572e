//! Client bootstrap error types.

use crate::errors::SweeperError;

/// Boxed failure reported by an authentication or client-construction collaborator.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Error building ARM Client: {source}")]
    Authentication {
        #[source]
        source: CollaboratorError,
    },

    #[error("Error constructing ARM Client: {source}")]
    ClientConstruction {
        #[source]
        source: CollaboratorError,
    },
}

impl SweeperError for BootstrapError {
    fn error_code(&self) -> &'static str {
        match self {
            BootstrapError::Authentication { .. } => "AUTH_FAILED",
            BootstrapError::ClientConstruction { .. } => "CLIENT_CONSTRUCTION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_authentication_error_keeps_cause_text() {
        let error = BootstrapError::Authentication {
            source: "AADSTS7000215: Invalid client secret provided".into(),
        };
        assert_eq!(
            error.to_string(),
            "Error building ARM Client: AADSTS7000215: Invalid client secret provided"
        );
        assert_eq!(error.error_code(), "AUTH_FAILED");
        assert!(!error.is_user_error());
        assert!(error.source().is_some());
    }

    #[test]
    fn test_client_construction_error_keeps_cause_text() {
        let error = BootstrapError::ClientConstruction {
            source: "unknown environment \"mars\"".into(),
        };
        assert!(error.to_string().ends_with("unknown environment \"mars\""));
        assert_eq!(error.error_code(), "CLIENT_CONSTRUCTION_FAILED");
    }
}
