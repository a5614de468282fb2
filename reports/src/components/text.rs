//! Text block component - narrative, headings, formulas and code
//!
//! Prose is CommonMark (bold lead-ins, bullet dictionaries). Raw HTML inside
//! it is escaped like any other text. Every other style is escaped as-is and
//! keeps its whitespace through CSS.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::types::{TextBlock, TextStyle};

/// Render Markdown prose to an HTML fragment, escaping embedded HTML.
pub fn prose_html(source: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Render one text block in its presentation style.
#[component]
pub fn TextBlockView(block: TextBlock) -> impl IntoView {
    let TextBlock { style, content } = block;
    match style {
        TextStyle::Title => view! { <h1>{content}</h1> }.into_any(),
        TextStyle::Header => view! { <h2>{content}</h2> }.into_any(),
        TextStyle::Subheader => view! { <h3>{content}</h3> }.into_any(),
        TextStyle::Prose => {
            let rendered = prose_html(&content);
            view! { <div class="prose" inner_html=rendered></div> }.into_any()
        }
        TextStyle::Latex => view! { <pre class="latex">{content}</pre> }.into_any(),
        TextStyle::Code { language } => view! {
            <div class="code-block">
                <div class="code-language">{language.clone()}</div>
                <pre class="code-listing" data-language=language><code>{content}</code></pre>
            </div>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_lead_in_and_bullets() {
        let out = prose_html("**Excluded Data** Five states\n\n-  **'CASEID':** case id\n");
        assert!(out.contains("<strong>Excluded Data</strong>"));
        assert!(out.contains("<li><strong>'CASEID':</strong> case id</li>"));
    }

    #[test]
    fn embedded_html_is_escaped() {
        let out = prose_html("see <script>alert(1)</script>\n\n<div>block</div>\n");
        assert!(!out.contains("<script>"));
        assert!(!out.contains("<div>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(out.contains("&lt;div&gt;block&lt;/div&gt;"));
    }

    #[test]
    fn plain_prose_is_one_paragraph() {
        assert_eq!(prose_html("Rates fell."), "<p>Rates fell.</p>\n");
    }
}
