//! Deletion collaborator trait.

use super::errors::SweepRunError;
use super::types::ResourceDescriptor;

/// Deletes one kind of cloud resource.
///
/// Each resource type (resource groups, storage accounts, ...) provides its
/// own implementation. Only resources the sweep filter accepted are passed in.
pub trait ResourceDeleter: Send + Sync {
    /// Human readable resource type, used in logs and errors (e.g. "resource group").
    fn resource_type(&self) -> &'static str;

    fn delete(&self, resource: &ResourceDescriptor) -> Result<(), SweepRunError>;
}
