//! Breadcrumb navigation.

use percent_encoding::percent_decode_str;

use crate::render::html::escape_html;

/// Breadcrumb HTML for a raw (still percent-encoded) request path.
///
/// Starts at `Home`; the last crumb is the current page and is not a link.
pub fn breadcrumbs(request_path: &str) -> String {
    let mut crumbs = vec![("/".to_string(), "Home".to_string())];

    let mut href = String::new();
    for part in request_path.split('/').filter(|p| !p.is_empty()) {
        href.push('/');
        href.push_str(part);
        let text = percent_decode_str(part).decode_utf8_lossy().into_owned();
        crumbs.push((href.clone(), text));
    }

    let last = crumbs.len() - 1;
    crumbs
        .iter()
        .enumerate()
        .map(|(i, (href, text))| {
            if i == last {
                format!("<span class=\"current\">{}</span>", escape_html(text))
            } else {
                format!("<a href=\"{}\">{}</a>", escape_html(href), escape_html(text))
            }
        })
        .collect::<Vec<_>>()
        .join(" / ")
}
