//! Embedded client assets.

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const BASE_CSS: &str = include_str!("../../../static/styles/base.css");
const APP_JS: &str = include_str!("../../../static/js/app.js");
const FAVICON: &str = include_str!("../../../static/favicon.svg");

/// Embedded asset body and content type for `file`.
pub fn lookup(file: &str) -> Option<(&'static str, &'static str)> {
    match file.trim_start_matches('/') {
        "styles/base.css" => Some((BASE_CSS, "text/css; charset=utf-8")),
        "js/app.js" => Some((APP_JS, "application/javascript; charset=utf-8")),
        "favicon.svg" => Some((FAVICON, "image/svg+xml")),
        _ => None,
    }
}

pub async fn static_file(Path(file): Path<String>) -> Response {
    match lookup(&file) {
        Some((body, mime)) => ([(header::CONTENT_TYPE, mime)], body).into_response(),
        None => (StatusCode::NOT_FOUND, "Not found").into_response(),
    }
}
