// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! The filter comes from `POSTIFY_LOG` (standard `EnvFilter` directives),
//! then the `--log-level` flag, then [`DEFAULT_FILTER`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives.
pub const ENV_LOG: &str = "POSTIFY_LOG";

/// Filter used when neither the environment nor the CLI provides one.
pub const DEFAULT_FILTER: &str = "postify=info,warn";

/// Resolves the filter from the environment, then `cli_level`, then the default.
fn build_filter(cli_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| match cli_level {
            Some(level) => EnvFilter::try_new(format!("postify={level},warn")),
            None => EnvFilter::try_new(DEFAULT_FILTER),
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber writing to stderr.
///
/// Calling it twice is harmless: the second installation is ignored.
pub fn init(cli_level: Option<&str>) {
    let filter = build_filter(cli_level);
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_level_is_applied_to_crate_target() {
        if std::env::var_os(ENV_LOG).is_some() {
            return;
        }
        let filter = build_filter(Some("debug"));
        assert!(filter.to_string().contains("postify=debug"));
    }

    #[test]
    fn invalid_cli_level_falls_back_to_warn() {
        if std::env::var_os(ENV_LOG).is_some() {
            return;
        }
        let filter = build_filter(Some("not a level!"));
        assert!(!filter.to_string().contains("postify"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(None);
        init(Some("trace"));
    }
}
