//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the optional metrics exporter
//! - Bind the listener on the first free port
//! - Run the server until a shutdown signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Expects a config that already passed validation

use std::net::SocketAddr;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::lifecycle::{shutdown::Shutdown, signals};
use crate::net::{bind_available, ListenerError};
use crate::observability::metrics;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serve `config.docs.root` until Ctrl+C or SIGTERM.
///
/// When `open_path` is set, the full URL of that document is printed once
/// the listener is bound.
pub async fn serve(config: ServerConfig, open_path: Option<String>) -> Result<(), StartupError> {
    if let Some(addr) = &config.observability.metrics_address {
        match addr.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(metrics_address = %addr, error = %e, "Failed to parse metrics address"),
        }
    }

    let listener = bind_available(
        &config.listener.host,
        config.listener.port,
        config.listener.port_attempts,
    )
    .await?;
    let local_addr = listener.local_addr()?;
    let url = format!("http://{}:{}", config.listener.host, local_addr.port());

    tracing::info!(
        url = %url,
        root = %config.docs.root.display(),
        "Serving documents"
    );
    if let Some(path) = open_path {
        println!("{url}{path}");
    }

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let signal_task = signals::spawn_signal_handler(shutdown);

    let server = HttpServer::new(config);
    let result = server.run(listener, receiver).await;
    signal_task.abort();
    result?;

    tracing::info!("Shutdown complete");
    Ok(())
}
