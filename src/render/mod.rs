//! Page rendering subsystem.
//!
//! # Data Flow
//! ```text
//! Resolved file bytes (already confirmed inside the root)
//!     → markdown.rs (pulldown-cmark → HTML fragment)
//!     → language.rs (extension → highlight.js language class)
//!     → icons.rs / navigation.rs (listing icons, sizes, breadcrumbs)
//!     → template.rs (fragment dropped into the page shell)
//!     → HTML response
//! ```
//!
//! # Design Decisions
//! - Renderers never open files; they work on content and display strings
//! - Everything user-controlled is escaped by html.rs before it reaches a shell
//! - Syntax highlighting happens in the browser; the server only tags blocks

pub mod html;
pub mod icons;
pub mod language;
pub mod markdown;
pub mod navigation;
pub mod template;

pub use html::escape_html;
pub use template::{TemplateError, Templates};
