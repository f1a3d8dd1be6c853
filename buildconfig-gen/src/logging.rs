//! Tracing subscriber set-up for the binary.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding `EnvFilter` directives.
pub const LOG_ENV: &str = "BUILDCONFIG_LOG";

/// Directives used when [`LOG_ENV`] is unset or invalid.
pub const DEFAULT_DIRECTIVES: &str = "buildconfig_gen=info,buildconfig_codegen=warn";

/// Builds the filter from [`LOG_ENV`], falling back to [`DEFAULT_DIRECTIVES`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber, logging to stderr.
///
/// Call once, from `main`.
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use test_helpers::figment::with_jail;

    #[rstest]
    fn filter_reads_log_variable() {
        let directives = with_jail(|jail| {
            jail.set_env(LOG_ENV, "buildconfig_gen=trace");
            Ok(env_filter().to_string())
        })
        .unwrap_or_else(|err| panic!("run jail: {err}"));
        assert_eq!(directives, "buildconfig_gen=trace");
    }

    #[rstest]
    fn invalid_directives_fall_back_to_defaults() {
        let directives = with_jail(|jail| {
            jail.set_env(LOG_ENV, "buildconfig_gen=[");
            Ok(env_filter().to_string())
        })
        .unwrap_or_else(|err| panic!("run jail: {err}"));
        assert!(directives.contains("buildconfig_gen=info"));
        assert!(directives.contains("buildconfig_codegen=warn"));
    }
}
