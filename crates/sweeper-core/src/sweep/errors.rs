use crate::errors::SweeperError;

#[derive(Debug, thiserror::Error)]
pub enum SweepRunError {
    #[error("Failed to delete {resource_type} {name:?}: {message}")]
    DeleteFailed {
        resource_type: String,
        name: String,
        message: String,
    },

    #[error("Sweep of {resource_type} finished with {failed} of {attempted} deletions failing")]
    PartialFailure {
        resource_type: String,
        failed: usize,
        attempted: usize,
    },
}

impl SweeperError for SweepRunError {
    fn error_code(&self) -> &'static str {
        match self {
            SweepRunError::DeleteFailed { .. } => "SWEEP_DELETE_FAILED",
            SweepRunError::PartialFailure { .. } => "SWEEP_PARTIAL_FAILURE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_failed_display() {
        let error = SweepRunError::DeleteFailed {
            resource_type: "resource group".to_string(),
            name: "acctestRG-1".to_string(),
            message: "409 Conflict".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to delete resource group \"acctestRG-1\": 409 Conflict"
        );
        assert_eq!(error.error_code(), "SWEEP_DELETE_FAILED");
    }

    #[test]
    fn test_partial_failure_display() {
        let error = SweepRunError::PartialFailure {
            resource_type: "storage account".to_string(),
            failed: 2,
            attempted: 5,
        };
        assert_eq!(
            error.to_string(),
            "Sweep of storage account finished with 2 of 5 deletions failing"
        );
        assert!(!error.is_user_error());
    }
}
