//! HTML-to-text conversion for article bodies and issue spans.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

/// Discard all tags from `markup` and decode entities, keeping only the
/// text nodes of the document body in order.
///
/// The input is parsed as a whole HTML document, so the result is the body's
/// text content as a browser reports it: whitespace ahead of the first
/// element and anything the parser moves into `<head>` (such as `<title>`)
/// are not part of it. Comments are dropped.
pub fn strip_markup(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    let document = Html::parse_document(markup);
    document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| body.text().collect())
        .unwrap_or_default()
}
