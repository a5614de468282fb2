//! Root document component - the complete HTML page
//!
//! Sidebar with a table of contents on the left, the ordered blocks on the
//! right. No scripts: the page is static and scrolls.

use super::BlockView;
use crate::styles::{CSP, REPORT_CSS};
use crate::types::{Block, BlockContent, DocumentMeta, TextStyle};
use leptos::prelude::*;

/// The complete HTML document for the report
#[component]
pub fn ReportDocument(meta: DocumentMeta, blocks: Vec<Block>) -> impl IntoView {
    let toc = table_of_contents(&blocks);

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title.clone()}</title>
                <style>{REPORT_CSS}</style>
            </head>
            <body>
                <div class="report-layout">
                    <aside class="report-sidebar">
                        <h2>"Contents"</h2>
                        <ul>
                            {toc.into_iter().map(|(anchor, label)| view! {
                                <li><a href=format!("#{}", anchor)>{label}</a></li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    </aside>

                    <main class="report-main">
                        {blocks.into_iter().map(|block| view! {
                            <BlockView block=block />
                        }).collect::<Vec<_>>()}
                        <footer class="report-footer">{meta.generator.clone()}</footer>
                    </main>
                </div>
            </body>
        </html>
    }
}

/// `(anchor, label)` for every Header block, in order.
fn table_of_contents(blocks: &[Block]) -> Vec<(String, String)> {
    blocks
        .iter()
        .filter_map(|block| match &block.content {
            BlockContent::Text(text) if text.style == TextStyle::Header => {
                Some((block.anchor(), text.content.clone()))
            }
            _ => None,
        })
        .collect()
}
