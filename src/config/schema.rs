//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the documentation server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (host, port, probing).
    pub listener: ListenerConfig,

    /// Document root and listing behavior.
    pub docs: DocsConfig,

    /// File search API limits.
    pub search: SearchConfig,

    /// Security hardening.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind host (e.g., "localhost", "0.0.0.0").
    pub host: String,

    /// Preferred port.
    pub port: u16,

    /// How many consecutive ports to try, starting at `port`.
    pub port_attempts: u16,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
            port_attempts: 10,
        }
    }
}

/// Document root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory served as the document root.
    pub root: PathBuf,

    /// List dot-files in directory indexes.
    pub show_hidden: bool,

    /// Directory overriding the embedded `page.html` / `error.html`.
    pub template_dir: Option<PathBuf>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            show_hidden: false,
            template_dir: None,
        }
    }
}

/// Search API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of results returned.
    pub max_results: usize,

    /// Maximum directory depth walked.
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 50,
            max_depth: 5,
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Send CSP and related headers.
    pub headers: bool,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            headers: true,
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Debug mode: verbose logs and error details on error pages.
    pub debug: bool,

    /// Prometheus endpoint bind address; disabled when unset.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            debug: false,
            metrics_address: None,
        }
    }
}
