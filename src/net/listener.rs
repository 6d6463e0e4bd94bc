//! TCP listener with port fallback.
//!
//! # Responsibilities
//! - Bind the configured host on the first free port of a short range
//! - Log each busy port and move on
//! - Fail with the whole range in the error once it is exhausted
//!
//! # Design Decisions
//! - Binds directly; there is no separate availability check
//! - Only "in use" and "permission denied" count as busy, other bind errors are fatal

use std::io;

use tokio::net::TcpListener;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Failed to bind for a reason other than the port being taken.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    /// Every port in the range was busy.
    #[error("no available port in range {start}-{end}")]
    Exhausted { start: u16, end: u16 },
}

/// Bind `host` on `port`, or on one of the next `attempts - 1` ports.
pub async fn bind_available(
    host: &str,
    port: u16,
    attempts: u16,
) -> Result<TcpListener, ListenerError> {
    let attempts = attempts.max(1);
    let end = port.saturating_add(attempts - 1);

    for candidate in port..=end {
        let addr = format!("{host}:{candidate}");
        match TcpListener::bind(&addr).await {
            Ok(listener) => {
                if candidate != port {
                    tracing::info!(requested = port, bound = candidate, "Using next free port");
                }
                return Ok(listener);
            }
            Err(e) if is_busy(&e) => {
                tracing::warn!(port = candidate, error = %e, "Port unavailable, trying next");
            }
            Err(source) => return Err(ListenerError::Bind { addr, source }),
        }
    }

    Err(ListenerError::Exhausted { start: port, end })
}

fn is_busy(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::AddrInUse | io::ErrorKind::PermissionDenied
    )
}
