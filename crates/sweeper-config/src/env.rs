//! Environment variable names and the sources they are read from.

use std::collections::HashMap;

pub const ENV_SUBSCRIPTION_ID: &str = "ARM_SUBSCRIPTION_ID";
pub const ENV_CLIENT_ID: &str = "ARM_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "ARM_CLIENT_SECRET";
pub const ENV_TENANT_ID: &str = "ARM_TENANT_ID";

/// Optional cloud environment override. Falls back to the public cloud.
pub const ENV_ENVIRONMENT: &str = "ARM_ENVIRONMENT";

/// Identity variables that must all be non-empty before a sweep can start.
///
/// Order matters: it is the order used when the variables are listed in
/// error messages.
pub const REQUIRED_ENV_VARS: &[&str] = &[
    ENV_SUBSCRIPTION_ID,
    ENV_CLIENT_ID,
    ENV_CLIENT_SECRET,
    ENV_TENANT_ID,
];

/// A read-only source of environment values.
///
/// The process environment is the usual source; maps are accepted so callers
/// can resolve credentials without touching global state.
pub trait EnvSource {
    /// Look up a variable. Unset and non-unicode values both read as `None`.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_env_vars_are_valid_posix_names() {
        for var in REQUIRED_ENV_VARS {
            assert!(!var.is_empty());
            assert!(
                var.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "required var {:?} should be upper snake case",
                var
            );
        }
    }

    #[test]
    fn test_required_env_vars_exclude_environment_override() {
        assert_eq!(REQUIRED_ENV_VARS.len(), 4);
        assert!(!REQUIRED_ENV_VARS.contains(&ENV_ENVIRONMENT));
    }

    #[test]
    fn test_process_env_reads_set_variable() {
        temp_env::with_var("SWEEPER_TEST_PROCESS_ENV", Some("value"), || {
            assert_eq!(
                ProcessEnv.var("SWEEPER_TEST_PROCESS_ENV"),
                Some("value".to_string())
            );
        });
    }

    #[test]
    fn test_process_env_unset_variable_is_none() {
        temp_env::with_var_unset("SWEEPER_TEST_PROCESS_ENV_UNSET", || {
            assert_eq!(ProcessEnv.var("SWEEPER_TEST_PROCESS_ENV_UNSET"), None);
        });
    }

    #[test]
    fn test_hash_map_source() {
        let mut map = HashMap::new();
        map.insert(ENV_TENANT_ID.to_string(), "tenant".to_string());
        assert_eq!(map.var(ENV_TENANT_ID), Some("tenant".to_string()));
        assert_eq!(map.var(ENV_CLIENT_ID), None);
    }
}
