//! Structured logging setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the log filter: `RUST_LOG` wins, otherwise `warn` when quiet and
/// `info` when verbose.
fn build_filter(quiet: bool) -> EnvFilter {
    let default_level = if quiet { "warn" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install a JSON subscriber writing to stderr.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(quiet))
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }

    #[test]
    fn test_build_filter_defaults() {
        temp_env::with_var_unset("RUST_LOG", || {
            assert_eq!(build_filter(true).to_string(), "warn");
            assert_eq!(build_filter(false).to_string(), "info");
        });
    }
}
