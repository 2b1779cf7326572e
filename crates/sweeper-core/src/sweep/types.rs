use serde::{Deserialize, Serialize};

use crate::filter::SkipReason;

use super::errors::SweepRunError;

/// A live resource discovered by a listing call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    pub name: String,
    pub location: String,
}

impl ResourceDescriptor {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Resources split by the sweep filter, before anything is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepPlan {
    pub target_region: String,
    pub eligible: Vec<ResourceDescriptor>,
    pub skipped: Vec<(ResourceDescriptor, SkipReason)>,
}

impl SweepPlan {
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }
}

/// Result of executing a sweep plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepSummary {
    pub resource_type: String,
    pub deleted: Vec<String>,
    /// `(name, error message)` for each failed deletion.
    pub failed: Vec<(String, String)>,
    pub skipped: usize,
}

impl SweepSummary {
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    /// Convert a summary with failed deletions into an error.
    pub fn into_result(self) -> Result<SweepSummary, SweepRunError> {
        if self.failed.is_empty() {
            Ok(self)
        } else {
            Err(SweepRunError::PartialFailure {
                failed: self.failed.len(),
                attempted: self.attempted(),
                resource_type: self.resource_type,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_descriptor_deserializes_from_listing_json() {
        let json = r#"[{"name": "acctestRG-1", "location": "East US"}]"#;
        let resources: Vec<ResourceDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(resources, vec![ResourceDescriptor::new("acctestRG-1", "East US")]);
    }

    #[test]
    fn test_summary_without_failures_is_ok() {
        let summary = SweepSummary {
            resource_type: "resource group".to_string(),
            deleted: vec!["acctestRG-1".to_string()],
            ..Default::default()
        };
        assert_eq!(summary.attempted(), 1);
        assert!(summary.into_result().is_ok());
    }

    #[test]
    fn test_summary_with_failures_is_partial_failure() {
        let summary = SweepSummary {
            resource_type: "resource group".to_string(),
            deleted: vec!["acctestRG-1".to_string()],
            failed: vec![("acctestRG-2".to_string(), "locked".to_string())],
            skipped: 3,
        };
        match summary.into_result() {
            Err(SweepRunError::PartialFailure {
                failed, attempted, ..
            }) => {
                assert_eq!(failed, 1);
                assert_eq!(attempted, 2);
            }
            other => panic!("expected partial failure, got {:?}", other),
        }
    }
}
