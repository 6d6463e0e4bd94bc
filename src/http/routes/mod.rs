//! Request handlers.
//!
//! # Data Flow
//! ```text
//! GET /health            → health.rs
//! GET /static/{*file}    → static_files.rs (embedded assets)
//! GET /api/search        → api.rs
//! GET anything else      → documents():
//!     markdown.rs → raw.rs → assets.rs → directory.rs → 404
//! ```
//!
//! # Design Decisions
//! - Each document handler either answers or passes to the next one
//! - Every filesystem access goes through the resolver first
//! - Blocking filesystem work runs on the blocking pool

pub mod api;
pub mod assets;
pub mod directory;
pub mod health;
pub mod markdown;
pub mod raw;
pub mod static_files;

use std::time::Instant;

use axum::{
    extract::State,
    http::{HeaderMap, Uri},
    response::Response,
};
use percent_encoding::percent_decode_str;

use crate::http::error::{handle_error, not_found, AppError};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;

/// What a document handler did with a request.
pub enum Outcome {
    Respond(Response),
    /// Not this handler's kind of path; try the next one.
    Next,
}

/// Run `work` on the blocking pool.
pub(crate) async fn blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work).await?
}

/// Decoded final segment of a raw request path.
pub(crate) fn file_name(request_path: &str) -> String {
    let last = request_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    percent_decode_str(last).decode_utf8_lossy().into_owned()
}

pub(crate) fn has_extension(name: &str, wanted: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case(wanted))
}

/// Handler for every document path.
pub async fn documents(State(state): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);
    let path = uri.path();

    tracing::debug!(request_id = %request_id, path = %path, "Serving document");

    let response = match chain(&state, path).await {
        Ok(Outcome::Respond(response)) => response,
        Ok(Outcome::Next) => not_found(&state, request_id, path),
        Err(err) => handle_error(&state, request_id, path, err),
    };

    metrics::record_request("document", response.status().as_u16(), start);
    response
}

async fn chain(state: &AppState, path: &str) -> Result<Outcome, AppError> {
    if let answered @ Outcome::Respond(_) = markdown::serve(state, path).await? {
        return Ok(answered);
    }
    if let answered @ Outcome::Respond(_) = raw::serve(state, path).await? {
        return Ok(answered);
    }
    if let answered @ Outcome::Respond(_) = assets::serve(state, path).await? {
        return Ok(answered);
    }
    directory::serve(state, path).await
}
