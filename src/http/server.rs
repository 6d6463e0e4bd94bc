//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, security headers, timeout, guard)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::error::AppError;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::routes;
use crate::render::{navigation::breadcrumbs, Templates};
use crate::security::{guard, headers};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
    templates: Arc<Templates>,
    root_name: Arc<str>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let root_name: Arc<str> = config
            .docs
            .root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.docs.root.display().to_string())
            .into();
        let templates = Arc::new(Templates::new(config.docs.template_dir.clone()));

        Self {
            config: Arc::new(config),
            templates,
            root_name,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The document root every request path is resolved against.
    pub fn root(&self) -> &Path {
        &self.config.docs.root
    }

    /// Final component of the document root, shown in titles and `/health`.
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    pub fn debug(&self) -> bool {
        self.config.observability.debug
    }

    /// Render `content` into the page shell.
    ///
    /// `title` is escaped by the shell; `content` must already be safe HTML.
    pub fn render_page(
        &self,
        title: &str,
        request_path: &str,
        content: &str,
    ) -> Result<Response, AppError> {
        let crumbs = breadcrumbs(request_path);
        let body = self.templates.render(
            "page",
            &[
                ("title", title),
                ("breadcrumbs", crumbs.as_str()),
                ("content", content),
            ],
        )?;
        Ok(Html(body).into_response())
    }
}

/// HTTP server for the document tree.
pub struct HttpServer {
    router: Router,
    config: Arc<ServerConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(config);
        let config = state.config.clone();
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/health", get(routes::health::health))
            .route("/static/{*file}", get(routes::static_files::static_file))
            .route("/api/search", get(routes::api::search))
            .route("/", get(routes::documents))
            .route("/{*path}", get(routes::documents))
            .with_state(state)
            .layer(middleware::from_fn(guard::traversal_guard))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.security.request_timeout_secs,
            )));

        let router = if config.security.headers {
            headers::apply(router)
        } else {
            router
        };

        router
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
    }

    /// A handle on the fully layered router, for driving requests in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root = %self.config.docs.root.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
