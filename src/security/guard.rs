//! Suspicious path pre-filter.
//!
//! Rejects raw request paths carrying obvious traversal markers before any
//! handler runs. The resolver remains the authority; this only turns the
//! noisiest traversal attempts away early with a 403.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::request::request_id;
use crate::observability::metrics;

/// Markers matched case-insensitively against the still-encoded path.
const SUSPICIOUS_MARKERS: &[&str] = &["../", "..\\", "%2e%2e/", "%2e%2e\\", "%252e%252e", "\0"];

/// Returns the first marker found in `raw_path`, if any.
pub fn find_suspicious_marker(raw_path: &str) -> Option<&'static str> {
    let lowered = raw_path.to_ascii_lowercase();
    SUSPICIOUS_MARKERS
        .iter()
        .copied()
        .find(|marker| lowered.contains(marker))
}

/// Middleware rejecting requests whose raw path looks like a traversal attempt.
pub async fn traversal_guard(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path();

    if let Some(marker) = find_suspicious_marker(path) {
        tracing::warn!(
            request_id = %request_id(request.headers()),
            path = %path.escape_debug(),
            marker = %marker.escape_debug(),
            "Suspicious path pattern rejected"
        );
        metrics::record_rejection("suspicious_pattern");
        return (StatusCode::FORBIDDEN, "Access denied").into_response();
    }

    next.run(request).await
}
