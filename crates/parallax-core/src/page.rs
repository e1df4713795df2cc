//! Document shell: metadata, stylesheet, root element and wasm bootstrap.

use crate::constants::*;
use crate::markup::escape;
use crate::theme::PAGE_CSS;

#[derive(Clone, Debug, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            description: PAGE_DESCRIPTION.to_string(),
            lang: PAGE_LANG.to_string(),
        }
    }
}

/// Double-quoted JS string literal that is also safe inside a `<script>`
/// element, where HTML entities are not decoded.
pub fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            '<' if chars.peek() == Some(&'/') => out.push_str("<\\"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render the full document. `script` is the JS glue emitted by wasm-bindgen;
/// `None` produces a static page with no scroll behaviour.
pub fn page_shell(meta: &PageMetadata, body: &str, script: Option<&str>) -> String {
    let bootstrap = match script {
        Some(src) => format!(
            "<script type=\"module\">import init from {}; init();</script>",
            js_string(src)
        ),
        None => String::new(),
    };
    format!(
        concat!(
            "<!doctype html>\n",
            "<html lang=\"{lang}\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<meta name=\"description\" content=\"{description}\">\n",
            "<style>{css}</style>\n",
            "</head>\n",
            "<body>\n",
            "<div id=\"{root}\">{body}</div>\n",
            "{bootstrap}\n",
            "</body>\n",
            "</html>\n"
        ),
        lang = escape(&meta.lang),
        title = escape(&meta.title),
        description = escape(&meta.description),
        css = PAGE_CSS,
        root = ROOT_ELEMENT_ID,
        body = body,
        bootstrap = bootstrap,
    )
}
