//! File name search API.

use std::fs;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::docs::{collect_files, filter_files, SearchResults};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::security::{resolve, ResolveError};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub dir: Option<String>,
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    let response = run_search(&state, request_id(&headers), query).await;
    metrics::record_request("search", response.status().as_u16(), start);
    response
}

async fn run_search(state: &AppState, request_id: &str, query: SearchQuery) -> Response {
    let needle = query.q.unwrap_or_default().trim().to_string();
    if needle.is_empty() {
        return Json(SearchResults::empty()).into_response();
    }

    // The query string is already decoded; keep `%` literal for the resolver.
    let dir = query.dir.unwrap_or_else(|| "/".to_string()).replace('%', "%25");
    let root = state.root().to_path_buf();
    let limits = state.config().search.clone();
    let scope = dir.clone();

    let searched = tokio::task::spawn_blocking(move || {
        let target = resolve(&scope, &root)?;
        if !target.is_dir() {
            return Ok(None);
        }
        let real_root = fs::canonicalize(&root).unwrap_or(root);
        let files = collect_files(&target, &real_root, limits.max_depth);
        Ok::<_, ResolveError>(Some(filter_files(&files, &needle, limits.max_results)))
    })
    .await;

    match searched {
        Ok(Ok(Some(results))) => Json(results).into_response(),
        // An existing file, not a rejected path.
        Ok(Ok(None)) => invalid_directory(),
        Ok(Err(err)) => {
            if let Some(kind) = err.kind() {
                if err.is_security_relevant() {
                    tracing::warn!(
                        request_id = %request_id,
                        dir = %dir.escape_debug(),
                        kind = %kind,
                        "Search directory rejected"
                    );
                }
                metrics::record_rejection(kind.as_str());
            } else {
                tracing::error!(request_id = %request_id, error = %err, "Search directory unreadable");
            }
            invalid_directory()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Search task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Search failed" })),
            )
                .into_response()
        }
    }
}

fn invalid_directory() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Invalid directory path" })),
    )
        .into_response()
}
