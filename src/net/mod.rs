//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! host + first port
//!     → listener.rs (bind, next port on AddrInUse)
//!     → Hand off to HTTP layer
//! ```

pub mod listener;

pub use listener::{bind_available, ListenerError};
