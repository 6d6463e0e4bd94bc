//! Markdown documents.

use std::fs;

use crate::http::error::AppError;
use crate::http::routes::{blocking, file_name, has_extension, Outcome};
use crate::http::server::AppState;
use crate::render::markdown::render_markdown;
use crate::security::resolve;

pub async fn serve(state: &AppState, path: &str) -> Result<Outcome, AppError> {
    let name = file_name(path);
    if !has_extension(&name, "md") {
        return Ok(Outcome::Next);
    }

    let root = state.root().to_path_buf();
    let request_path = path.to_owned();
    let rendered = blocking(move || {
        let file = resolve(&request_path, &root)?;
        if file.is_dir() {
            return Ok(None);
        }
        let bytes = fs::read(&file)?;
        Ok(Some(render_markdown(&String::from_utf8_lossy(&bytes))))
    })
    .await?;

    // A directory named like a document is listed instead.
    let Some(html) = rendered else {
        return Ok(Outcome::Next);
    };

    let content = format!("<article id=\"markdown-rendered\" class=\"markdown-body\">\n{html}</article>");
    state.render_page(&name, path, &content).map(Outcome::Respond)
}
