//! Security response headers.
//!
//! # Responsibilities
//! - Content Security Policy allowing the CDN the page shell loads from
//! - Framing, sniffing and referrer restrictions
//! - Disable caching so edits show up on reload
//!
//! # Design Decisions
//! - Headers override anything a handler set
//! - Applied as tower-http layers, one per header

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; \
    style-src 'self' 'unsafe-inline' https://cdn.jsdelivr.net; \
    font-src 'self' https://cdn.jsdelivr.net data:; \
    img-src 'self' data: https:; \
    connect-src 'self'";

/// The full header set sent with every response.
pub fn security_headers() -> Vec<(HeaderName, HeaderValue)> {
    vec![
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ),
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
        (
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate"),
        ),
        (header::PRAGMA, HeaderValue::from_static("no-cache")),
    ]
}

/// Wrap `router` so every response carries [`security_headers`].
pub fn apply<S>(mut router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(name, value));
    }
    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_set_is_complete() {
        let names: Vec<HeaderName> = security_headers().into_iter().map(|(n, _)| n).collect();
        assert!(names.contains(&header::CONTENT_SECURITY_POLICY));
        assert!(names.contains(&header::X_FRAME_OPTIONS));
        assert!(names.contains(&header::CACHE_CONTROL));
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_csp_is_single_line() {
        assert!(!CONTENT_SECURITY_POLICY.contains('\n'));
        assert!(CONTENT_SECURITY_POLICY.starts_with("default-src 'self';"));
    }
}
