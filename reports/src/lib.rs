//! # narrative-leptos
//!
//! Leptos SSR renderer for narrative analytics reports.
//!
//! Takes an ordered list of already-rendered [`types::Block`]s (Markdown
//! prose, pre-aggregated chart figures, raw image bytes) and produces one
//! self-contained, scrollable HTML page: charts become inline SVG, images
//! become `data:` URIs, and nothing is fetched at view time.
//!
//! ## Quick Start
//!
//! ```rust
//! use narrative_leptos::render_document;
//! use narrative_leptos::types::{Block, BlockContent, DocumentMeta, TextBlock, TextStyle};
//!
//! let meta = DocumentMeta {
//!     title: "Quarterly Review".into(),
//!     generator: "narrative".into(),
//! };
//! let blocks = vec![Block {
//!     number: 1,
//!     title: None,
//!     content: BlockContent::Text(TextBlock {
//!         style: TextStyle::Prose,
//!         content: "Discharge rates fell.".into(),
//!     }),
//! }];
//!
//! let html = render_document(&meta, &blocks);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Discharge rates fell."));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Block and figure data structures (serde-friendly)
//! - [`components`] - Leptos UI components, including the SVG charts
//! - [`styles`] - CSS constants
//!
//! The output is a pure function of the inputs: rendering the same blocks
//! twice yields byte-identical HTML.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::ReportDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{Block, DocumentMeta};

/// Render a complete HTML document from ordered blocks.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_document(meta: &DocumentMeta, blocks: &[Block]) -> String {
    let doc = view! {
        <ReportDocument meta=meta.clone() blocks=blocks.to_vec() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
