//! Markdown rich text used by the content records.
//!
//! Raw HTML in the source is rendered as text.

use pulldown_cmark::{html, Event, Options, Parser};

fn events(text: &str) -> impl Iterator<Item = Event<'_>> {
    Parser::new_ext(text, Options::empty()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    })
}

/// Block-level rendering: paragraphs, lists, emphasis, links.
pub fn to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events(text));
    out
}

/// Rendering for text placed inside an existing element. A single
/// paragraph loses its `<p>` wrapper.
pub fn to_inline_html(text: &str) -> String {
    let rendered = to_html(text);
    let trimmed = rendered.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_and_paragraphs() {
        let html = to_html("Un **mot** en *gras*.\n\nSecond paragraphe.");
        assert!(html.contains("<strong>mot</strong>"));
        assert!(html.contains("<em>gras</em>"));
        assert_eq!(html.matches("<p>").count(), 2);
    }

    #[test]
    fn test_inline_strips_single_paragraph() {
        assert_eq!(to_inline_html("Tout RDV **48h**"), "Tout RDV <strong>48h</strong>");
        assert!(to_inline_html("A\n\nB").starts_with("<p>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = to_html("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_lists() {
        let html = to_html("- un\n- deux");
        assert!(html.contains("<ul>"));
        assert_eq!(html.matches("<li>").count(), 2);
    }
}
