//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → security guard + headers
//!     → routes/ (health, static, search API, document chain)
//!         → security::path::resolve before any filesystem access
//!     → error.rs (verdicts and failures → status + error page)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
