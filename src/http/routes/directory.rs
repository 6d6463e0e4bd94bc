//! Directory indexes.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::docs::{read_listing, ListingEntry};
use crate::http::error::AppError;
use crate::http::routes::{blocking, Outcome};
use crate::http::server::AppState;
use crate::render::{
    escape_html,
    icons::{format_file_size, icon_class},
};
use crate::security::{resolve, ResolveError};

/// Bytes escaped when a file name becomes one path segment of a link.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub async fn serve(state: &AppState, path: &str) -> Result<Outcome, AppError> {
    let root = state.root().to_path_buf();
    let show_hidden = state.config().docs.show_hidden;
    let request_path = path.to_owned();
    let entries = blocking(move || match resolve(&request_path, &root) {
        Ok(dir) if dir.is_dir() => Ok(Some(read_listing(&dir, show_hidden)?)),
        Ok(_) | Err(ResolveError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    })
    .await?;

    let Some(entries) = entries else {
        return Ok(Outcome::Next);
    };

    let shown = percent_decode_str(path).decode_utf8_lossy();
    let title = format!("Index of {shown}");
    let content = format!(
        "<h1>{}</h1>\n{}",
        escape_html(&title),
        render_listing(path, &entries)
    );
    state.render_page(&title, path, &content).map(Outcome::Respond)
}

/// Listing markup for `entries` of the directory at raw path `request_path`.
pub fn render_listing(request_path: &str, entries: &[ListingEntry]) -> String {
    let base = request_path.trim_end_matches('/');
    let mut html = String::from("<ul class=\"directory-listing\">\n");

    if !base.is_empty() {
        let parent = match base.rfind('/') {
            Some(0) | None => "/",
            Some(i) => &base[..i],
        };
        html.push_str(&format!(
            "<li class=\"parent\"><a href=\"{}\"><span class=\"icon folder-up\"></span>..</a></li>\n",
            escape_html(parent)
        ));
    }

    for entry in entries {
        let mut href = format!("{base}/{}", utf8_percent_encode(&entry.name, SEGMENT));
        let (kind, size) = if entry.is_dir {
            href.push('/');
            ("directory", String::new())
        } else {
            ("file", format_file_size(entry.size))
        };
        html.push_str(&format!(
            "<li class=\"{kind}\"><a href=\"{}\"><span class=\"icon {}\"></span>{}</a><span class=\"size\">{size}</span></li>\n",
            escape_html(&href),
            icon_class(&entry.name, entry.is_dir),
            escape_html(&entry.name),
        ));
    }

    html.push_str("</ul>\n");
    html
}
