//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Map CLI verbosity (`--quiet`, `--debug`) onto a filter directive
//!
//! # Design Decisions
//! - `RUST_LOG` always wins over configuration
//! - Human-readable fmt output; this is a local tool

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Pick the effective log level from configuration and verbosity flags.
pub fn effective_level(config: &ObservabilityConfig, quiet: bool) -> &str {
    if quiet {
        "error"
    } else if config.debug {
        "debug"
    } else {
        &config.log_level
    }
}

/// Default filter directive for `level`.
pub fn default_directive(level: &str) -> String {
    format!("mdv={level},tower_http={level}")
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(config: &ObservabilityConfig, quiet: bool) {
    let directive = default_directive(effective_level(config, quiet));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| directive.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_beats_debug() {
        let config = ObservabilityConfig {
            debug: true,
            ..Default::default()
        };
        assert_eq!(effective_level(&config, true), "error");
        assert_eq!(effective_level(&config, false), "debug");
    }

    #[test]
    fn test_configured_level_is_default() {
        let config = ObservabilityConfig {
            log_level: "warn".into(),
            ..Default::default()
        };
        assert_eq!(effective_level(&config, false), "warn");
        assert_eq!(default_directive("warn"), "mdv=warn,tower_http=warn");
    }
}
