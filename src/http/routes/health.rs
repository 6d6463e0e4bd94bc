//! Liveness endpoint.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::http::server::AppState;

/// Reports the root by name only, never its full path.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    Json(json!({
        "status": "ok",
        "timestamp": timestamp,
        "doc_root": state.root_name(),
    }))
}
