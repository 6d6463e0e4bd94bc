//! Markdown to HTML.
//!
//! Uses pulldown-cmark with the GitHub-flavored extensions. Fenced `mermaid`
//! blocks are turned into `<div class="mermaid">` containers for the client
//! script; every other fenced block keeps its `language-*` class for
//! highlight.js.

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};

use crate::render::html::escape_html;

fn options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

fn is_mermaid(info: &str) -> bool {
    info.split_whitespace().next() == Some("mermaid")
}

/// Render a Markdown document to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut events = Vec::new();
    let mut diagram: Option<String> = None;
    let mut diagrams = 0usize;

    for event in Parser::new_ext(source, options()) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(ref info))) if is_mermaid(info) => {
                diagram = Some(String::new());
            }
            Event::Text(ref text) if diagram.is_some() => {
                if let Some(body) = diagram.as_mut() {
                    body.push_str(text);
                }
            }
            Event::End(TagEnd::CodeBlock) if diagram.is_some() => {
                let body = diagram.take().unwrap_or_default();
                events.push(Event::Html(CowStr::from(format!(
                    "<div class=\"mermaid\" id=\"mermaid-diagram-{diagrams}\">{}</div>\n",
                    escape_html(&body)
                ))));
                diagrams += 1;
            }
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}
