//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use mdv::{HttpServer, ServerConfig};
use tempfile::TempDir;
use tower::ServiceExt;

pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0, 0, 0];

/// A document root at `<tmp>/docs` with a secret file next to it.
pub struct Fixture {
    _dir: TempDir,
    pub outer: PathBuf,
    pub root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let outer = fs::canonicalize(dir.path()).unwrap();
        let root = outer.join("docs");

        fs::create_dir_all(root.join("subdir")).unwrap();
        fs::create_dir_all(root.join("node_modules").join("pkg")).unwrap();
        fs::write(root.join("test.md"), "# Test Document\n\nSome **bold** text.\n").unwrap();
        fs::write(root.join("subdir").join("nested.md"), "# Nested Document\n").unwrap();
        fs::write(root.join("my notes.md"), "# Notes\n").unwrap();
        fs::write(
            root.join("diagram.md"),
            "# Flow\n\n```mermaid\ngraph TD; A-->B;\n```\n",
        )
        .unwrap();
        fs::write(root.join("script.js"), "if (a < b && c) { run(); }\n").unwrap();
        fs::write(root.join("data.json"), "{\"key\": \"value\"}\n").unwrap();
        fs::write(root.join("image.png"), PNG_BYTES).unwrap();
        fs::write(root.join(".hidden"), "hidden").unwrap();
        fs::write(root.join("node_modules").join("pkg").join("nested.js"), "").unwrap();

        fs::write(outer.join("secret.txt"), "TOP SECRET").unwrap();
        fs::write(outer.join("secret.md"), "# TOP SECRET").unwrap();

        Self {
            _dir: dir,
            outer,
            root,
        }
    }

    pub fn config(&self) -> ServerConfig {
        let mut config = ServerConfig::default();
        config.docs.root = self.root.clone();
        config
    }

    pub fn router(&self) -> Router {
        router_for(self.config())
    }
}

pub fn router_for(config: ServerConfig) -> Router {
    HttpServer::new(config).router()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn content_type(&self) -> &str {
        self.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// Drive one GET through the fully layered router.
pub async fn get(router: &Router, uri: &str) -> TestResponse {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}
