//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports, limits, timeouts)
//! - Check that the document root exists and is a directory
//! - Canonicalize the document root once, at startup
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Runs before config is accepted into the system

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.port must be between 1 and 65535")]
    ZeroPort,
    #[error("listener.port_attempts must be at least 1")]
    ZeroPortAttempts,
    #[error("port range {port}+{attempts} exceeds 65535")]
    PortRangeOverflow { port: u16, attempts: u16 },
    #[error("document root {0} does not exist")]
    RootMissing(PathBuf),
    #[error("document root {0} is not a directory")]
    RootNotDirectory(PathBuf),
    #[error("template directory {0} is not a directory")]
    TemplateDirInvalid(PathBuf),
    #[error("search.{0} must be greater than 0")]
    ZeroSearchLimit(&'static str),
    #[error("security.request_timeout_secs must be greater than 0")]
    ZeroTimeout,
    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}

/// Validate `config`, replacing `docs.root` with its canonical form.
pub fn validate_config(config: &mut ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let listener = &config.listener;
    if listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }
    if listener.port_attempts == 0 {
        errors.push(ValidationError::ZeroPortAttempts);
    } else if listener.port.checked_add(listener.port_attempts - 1).is_none() {
        errors.push(ValidationError::PortRangeOverflow {
            port: listener.port,
            attempts: listener.port_attempts,
        });
    }

    match fs::metadata(&config.docs.root) {
        Ok(meta) if meta.is_dir() => match fs::canonicalize(&config.docs.root) {
            Ok(real) => config.docs.root = real,
            Err(_) => errors.push(ValidationError::RootMissing(config.docs.root.clone())),
        },
        Ok(_) => errors.push(ValidationError::RootNotDirectory(config.docs.root.clone())),
        Err(_) => errors.push(ValidationError::RootMissing(config.docs.root.clone())),
    }

    if let Some(dir) = &config.docs.template_dir {
        if !dir.is_dir() {
            errors.push(ValidationError::TemplateDirInvalid(dir.clone()));
        }
    }

    if config.search.max_results == 0 {
        errors.push(ValidationError::ZeroSearchLimit("max_results"));
    }
    if config.search.max_depth == 0 {
        errors.push(ValidationError::ZeroSearchLimit("max_depth"));
    }

    if config.security.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let observability = &config.observability;
    if let Some(addr) = &observability.metrics_address {
        if addr.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidMetricsAddress(addr.clone()));
        }
    }
    if !LOG_LEVELS.contains(&observability.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::InvalidLogLevel(observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
