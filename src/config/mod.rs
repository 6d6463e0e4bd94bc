//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flags override individual fields
//!     → validation.rs (semantic checks, root canonicalized)
//!     → ServerConfig (validated, immutable)
//!     → shared via Arc with every handler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once the server starts
//! - All fields have defaults to allow running with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    DocsConfig, ListenerConfig, ObservabilityConfig, SearchConfig, SecurityConfig, ServerConfig,
};
pub use validation::{validate_config, ValidationError};
