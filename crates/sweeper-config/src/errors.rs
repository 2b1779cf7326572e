use crate::env::REQUIRED_ENV_VARS;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more identity variables were unset or empty.
    ///
    /// The message always names every required variable so the environment
    /// can be fixed in one pass; `missing` records which ones were absent.
    #[error("{} must be set for acceptance tests", required_vars_sentence())]
    MissingCredentials { missing: Vec<&'static str> },
}

impl ConfigError {
    /// Variables that were missing when resolution failed.
    pub fn missing_vars(&self) -> &[&'static str] {
        match self {
            ConfigError::MissingCredentials { missing } => missing,
        }
    }
}

/// "A, B, C and D"
fn required_vars_sentence() -> String {
    match REQUIRED_ENV_VARS.split_last() {
        Some((last, [])) => (*last).to_string(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
        None => String::new(),
    }
}
