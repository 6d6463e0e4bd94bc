//! Page shell templates.
//!
//! # Responsibilities
//! - Load `page` and `error` shells (override directory first, embedded copy second)
//! - Register each shell with Handlebars the first time it is rendered
//! - Render shells with string variables
//!
//! # Design Decisions
//! - Owned by the server state, never a global
//! - `{{key}}` is HTML-escaped by Handlebars; shells use `{{{key}}}` for fragments
//!   that are already safe HTML (rendered content, breadcrumbs)

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use handlebars::Handlebars;
use serde_json::{Map, Value};

const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Error type for template loading and rendering.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("unknown template {0:?}")]
    Unknown(String),
    #[error("failed to read template {name:?}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid template {name:?}: {source}")]
    Parse {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },
    #[error("failed to render template: {0}")]
    Render(#[from] Box<handlebars::RenderError>),
}

/// Lazily registered page shells.
pub struct Templates {
    dir: Option<PathBuf>,
    registry: RwLock<Handlebars<'static>>,
}

impl Templates {
    /// Templates from `dir`, falling back to the embedded shells.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            registry: RwLock::new(Handlebars::new()),
        }
    }

    /// Render template `name` with `vars`.
    ///
    /// Missing variables render as empty strings.
    pub fn render(&self, name: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
        self.ensure_registered(name)?;

        let data: Map<String, Value> = vars
            .iter()
            .map(|(key, value)| ((*key).to_string(), Value::from(*value)))
            .collect();

        self.registry
            .read()
            .expect("template registry lock poisoned")
            .render(name, &data)
            .map_err(|e| TemplateError::Render(Box::new(e)))
    }

    fn ensure_registered(&self, name: &str) -> Result<(), TemplateError> {
        if self
            .registry
            .read()
            .expect("template registry lock poisoned")
            .has_template(name)
        {
            return Ok(());
        }

        let source = match self.read_override(name)? {
            Some(text) => text,
            None => builtin(name)
                .ok_or_else(|| TemplateError::Unknown(name.to_string()))?
                .to_string(),
        };

        let mut registry = self
            .registry
            .write()
            .expect("template registry lock poisoned");
        if registry.has_template(name) {
            return Ok(());
        }
        registry
            .register_template_string(name, source)
            .map_err(|e| TemplateError::Parse {
                name: name.to_string(),
                source: Box::new(e),
            })
    }

    fn read_override(&self, name: &str) -> Result<Option<String>, TemplateError> {
        let Some(dir) = &self.dir else {
            return Ok(None);
        };
        let path = dir.join(format!("{name}.html"));
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(TemplateError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").field("dir", &self.dir).finish_non_exhaustive()
    }
}

fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "page" => Some(PAGE_TEMPLATE),
        "error" => Some(ERROR_TEMPLATE),
        _ => None,
    }
}
