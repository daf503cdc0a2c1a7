//! Response Formatter — turns raw reply text into display HTML.
//!
//! Cleanup order matters: stray trailing markup first, then the closer
//! sentence, then markdown conversion, then the fixed footer.

use std::sync::OnceLock;

use pulldown_cmark::{html, Parser};
use regex::Regex;

use crate::reply::style::CLOSERS;

/// Footer appended to every rendered reply.
const FOOTER_HTML: &str = "\n<p style='font-style: italic; margin-top: 15px; color:#F5B041; font-weight: bold;'>\n    🌱 “Be the change you wish to see in the world.” – Mahatma Gandhi\n</p>\n";

/// Converts a raw reply to HTML. Markdown conversion is infallible, so every
/// input — including text the model mangled — renders to something showable.
pub fn format_for_display(raw: &str) -> String {
    let cleaned = clean_trailing_html(raw);
    let body = strip_closer(cleaned);

    let mut out = String::with_capacity(body.len() * 2);
    html::push_html(&mut out, Parser::new(body));
    out.push_str(FOOTER_HTML);
    out
}

/// Drops a stray `</div>` (or `<div ...>`) fragment the model sometimes
/// echoes at the very end of its output.
fn clean_trailing_html(text: &str) -> &str {
    static TRAILING_DIV: OnceLock<Regex> = OnceLock::new();
    let re = TRAILING_DIV.get_or_init(|| {
        Regex::new(r"(?i)</?div[^>]*>\s*$").expect("trailing-div pattern is valid")
    });

    let text = text.trim();
    match re.find(text) {
        Some(m) => text[..m.start()].trim_end(),
        None => text,
    }
}

/// Removes the closer sentence: scans [`CLOSERS`] in list order and truncates
/// at the first occurrence of the first closer found anywhere in the text.
/// List order wins over text order.
fn strip_closer(text: &str) -> &str {
    for closer in CLOSERS {
        if let Some(idx) = text.find(closer) {
            return text[..idx].trim_end();
        }
    }
    text
}
