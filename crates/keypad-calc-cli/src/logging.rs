//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set; otherwise the filter comes from the verbosity
//! level. Events go to stderr so stdout stays clean for displays and JSON.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, Verbosity};
use crate::error::{CliError, CliResult};

/// Builds the event filter for a verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber
pub fn init(verbosity: Verbosity, format: LogFormat) -> CliResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(verbosity));
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    match format {
        LogFormat::Text => registry.with(layer).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    }
    .map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_builds_for_every_level() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
            Verbosity::Trace,
        ] {
            assert!(!env_filter(verbosity).to_string().is_empty());
        }
    }

    #[test]
    fn test_second_init_fails() {
        // The first call may race with other tests; the second never succeeds.
        let _ = init(Verbosity::Quiet, LogFormat::Text);
        let err = init(Verbosity::Quiet, LogFormat::Json);
        assert!(matches!(err, Err(CliError::Logging { .. })));
    }
}
