//! Runtime configuration for harness processes.
//!
//! Input shape (element type and count) is fixed at compile time per
//! program; only ambient behaviour such as log verbosity is configurable.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "PROBE_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Ambient settings for a harness process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HarnessConfig {
    /// `tracing_subscriber` filter directive, e.g. `"info"` or `"probe_core=debug"`.
    pub log_filter: String,
}

impl HarnessConfig {
    /// Config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.to_owned() }
    }

    /// Read settings from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(LOG_ENV) {
            Ok(filter) if !filter.trim().is_empty() => Self::new().with_log_filter(filter),
            _ => Self::new(),
        }
    }

    /// Replace the log filter directive.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Install the global tracing subscriber.
    ///
    /// Logs go to stderr so stdout stays reserved for the program's own
    /// output. Calling this more than once is harmless.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_new(&self.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_warn() {
        assert_eq!(HarnessConfig::default().log_filter, "warn");
    }

    #[test]
    fn with_log_filter_overrides_default() {
        let config = HarnessConfig::new().with_log_filter("probe_core=debug");
        assert_eq!(config.log_filter, "probe_core=debug");
    }

    #[test]
    fn init_tracing_tolerates_repeat_and_bad_filter() {
        HarnessConfig::new().with_log_filter("=[not a filter").init_tracing();
        HarnessConfig::new().init_tracing();
    }
}
