//! mdv: a local documentation server.
//!
//! Serves a directory of Markdown and source files as browsable HTML. Every
//! request path passes through [`security::resolve`] before the filesystem is
//! touched, so no request reaches a file outside the document root.

pub mod cli;
pub mod config;
pub mod docs;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod render;
pub mod security;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use security::{check_path, resolve, PathCheck, ResolveError};
