//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → guard.rs (reject suspicious raw paths early)
//!     → headers.rs (CSP, framing, caching headers on every response)
//!     → route handler
//!         → path.rs (resolve request path under the document root)
//!         → filesystem access only with the resolved path
//! ```
//!
//! # Design Decisions
//! - Defense in depth: the guard is a cheap pre-filter, the resolver is the
//!   authority
//! - Fail closed: any doubt about containment is a denial
//! - No trust in client input

pub mod guard;
pub mod headers;
pub mod path;

pub use path::{check_path, resolve, PathCheck, RejectionKind, ResolveError};
