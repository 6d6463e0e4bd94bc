//! mdv: serve a directory of Markdown documents over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ net::listener ──▶ http::server (trace, request id,
//!                                        headers, timeout, guard)
//!                                              │
//!                                              ▼
//!                                        http::routes ──▶ security::path
//!                                              │            (resolve)
//!                                              ▼
//!     Client Response                    docs + render
//!     ◀────────────── html shell ◀────── (markdown, code, listing)
//! ```

use std::process::ExitCode;

use clap::Parser;

use mdv::cli::{Cli, Launch};
use mdv::config::{validate_config, ConfigError};
use mdv::lifecycle;
use mdv::observability::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("Error: cannot read current directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    let Launch {
        mut config,
        quiet,
        open_path,
    } = match cli.into_launch(&cwd) {
        Ok(launch) => launch,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&config.observability, quiet);
    tracing::info!("mdv v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(errors) = validate_config(&mut config) {
        let err = ConfigError::Validation(errors);
        tracing::error!(error = %err, "Invalid configuration");
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    tracing::info!(
        host = %config.listener.host,
        port = config.listener.port,
        root = %config.docs.root.display(),
        request_timeout_secs = config.security.request_timeout_secs,
        "Configuration loaded"
    );

    match lifecycle::serve(config, open_path).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}
