//! Source files shown as highlighted code.

use std::fs;

use crate::http::error::AppError;
use crate::http::routes::{blocking, file_name, has_extension, Outcome};
use crate::http::server::AppState;
use crate::render::{escape_html, language::detect_language};
use crate::security::{resolve, ResolveError};

pub async fn serve(state: &AppState, path: &str) -> Result<Outcome, AppError> {
    let name = file_name(path);
    if has_extension(&name, "md") {
        return Ok(Outcome::Next);
    }
    let Some(language) = detect_language(&name) else {
        return Ok(Outcome::Next);
    };

    let root = state.root().to_path_buf();
    let request_path = path.to_owned();
    let source = blocking(move || match resolve(&request_path, &root) {
        Ok(file) if file.is_file() => {
            let bytes = fs::read(&file)?;
            Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
        }
        Ok(_) | Err(ResolveError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    })
    .await?;

    let Some(source) = source else {
        return Ok(Outcome::Next);
    };

    let content = format!(
        "<h1>{}</h1>\n<pre><code class=\"language-{language}\">{}</code></pre>",
        escape_html(&name),
        escape_html(&source)
    );
    let title = format!("{name} - {}", state.root_name());
    state.render_page(&title, path, &content).map(Outcome::Respond)
}
