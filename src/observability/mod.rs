//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request and rejection counters)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → optional Prometheus scrape endpoint
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line a handler emits
//! - Metric updates are no-ops until a recorder is installed
//! - The path resolver never logs; its callers do

pub mod logging;
pub mod metrics;
