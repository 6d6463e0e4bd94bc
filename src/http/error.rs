//! Error responses.
//!
//! # Responsibilities
//! - Map resolver verdicts and I/O failures to status codes
//! - Render the HTML error page from the `error` shell
//! - Log each failure once, at a level matching its severity
//!
//! # Design Decisions
//! - Clients see only a category message, never filesystem paths
//! - Error text reaches the page only in debug mode, and never for denials
//! - Traversal and null-byte denials log at warn for intrusion detection

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render::TemplateError;
use crate::security::ResolveError;

/// Failure of a document handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
    #[error("blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Resolve(ResolveError::Traversal) => StatusCode::FORBIDDEN,
            AppError::Resolve(ResolveError::NullByte) => StatusCode::BAD_REQUEST,
            AppError::Resolve(ResolveError::NotFound) => StatusCode::NOT_FOUND,
            AppError::Resolve(ResolveError::Io(_))
            | AppError::Io(_)
            | AppError::Template(_)
            | AppError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show any client.
    pub fn public_message(&self) -> &'static str {
        match self.status() {
            StatusCode::FORBIDDEN => "Access denied.",
            StatusCode::BAD_REQUEST => "Bad request.",
            StatusCode::NOT_FOUND => "The requested file was not found on this server.",
            _ => "An internal error occurred. Please try again later.",
        }
    }

    /// Whether the error text may appear as page details in debug mode.
    fn shows_details(&self) -> bool {
        self.status().is_server_error()
    }
}

/// Reason phrase used as the error page title.
pub fn error_title(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        408 => "Request Timeout",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Error",
    }
}

/// Log `err` once and turn it into an error page.
pub fn handle_error(state: &AppState, request_id: &str, path: &str, err: AppError) -> Response {
    let status = err.status();

    if let AppError::Resolve(resolve_err) = &err {
        if let Some(kind) = resolve_err.kind() {
            if resolve_err.is_security_relevant() {
                tracing::warn!(
                    request_id = %request_id,
                    path = %path.escape_debug(),
                    kind = %kind,
                    "Request path rejected"
                );
            }
            metrics::record_rejection(kind.as_str());
        }
    }
    if status.is_server_error() {
        tracing::error!(request_id = %request_id, path = %path, error = %err, "Request failed");
    } else if status == StatusCode::NOT_FOUND {
        tracing::warn!(request_id = %request_id, path = %path, "404 Not Found");
    }

    let details = (state.debug() && err.shows_details()).then(|| err.to_string());
    error_page(state, status, err.public_message(), details.as_deref())
}

/// Render an error page, falling back to plain text if the shell is unusable.
pub fn error_page(
    state: &AppState,
    status: StatusCode,
    message: &str,
    details: Option<&str>,
) -> Response {
    let code = status.as_u16().to_string();
    let details = details.unwrap_or_default();

    let rendered = state.templates().render(
        "error",
        &[
            ("statusCode", code.as_str()),
            ("title", error_title(status)),
            ("message", message),
            ("details", details),
        ],
    );

    match rendered {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error template unavailable");
            let mut response = (status, format!("{code} {}", error_title(status))).into_response();
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            );
            response
        }
    }
}

/// The 404 page for a path no handler answered.
pub fn not_found(state: &AppState, request_id: &str, path: &str) -> Response {
    tracing::warn!(request_id = %request_id, path = %path, "404 Not Found");
    let shown = percent_encoding::percent_decode_str(path).decode_utf8_lossy();
    let message = format!("The requested path \"{shown}\" was not found on this server.");
    error_page(state, StatusCode::NOT_FOUND, &message, None)
}
