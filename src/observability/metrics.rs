//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mdv_requests_total` (counter): requests by route and status
//! - `mdv_request_duration_seconds` (histogram): handler latency by route
//! - `mdv_path_rejections_total` (counter): denied paths by kind

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder with its own HTTP listener.
///
/// Must run inside a tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(route: &'static str, status: u16, start: Instant) {
    counter!("mdv_requests_total", "route" => route, "status" => status.to_string()).increment(1);
    histogram!("mdv_request_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}

/// Record a denied request path.
pub fn record_rejection(kind: &'static str) {
    counter!("mdv_path_rejections_total", "kind" => kind).increment(1);
}
