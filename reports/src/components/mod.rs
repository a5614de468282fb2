//! Leptos UI components for rendering the report.
//!
//! # Component Hierarchy
//!
//! ```text
//! ReportDocument
//! ├── sidebar (table of contents from Header blocks)
//! └── BlockView (per section, in order)
//!     ├── TextBlockView
//!     ├── ChartView
//!     │   ├── BoxPlotChart
//!     │   ├── HistogramChart
//!     │   └── PieChart
//!     └── ImageView
//! ```
//!
//! Components are normally used through [`crate::render_document`], but
//! can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use narrative_leptos::components::BlockView;
//!
//! view! { <BlockView block=my_block /> }
//! ```

pub mod axis;
mod box_plot;
mod document;
mod histogram;
mod image;
mod pie;
mod section;
mod text;

pub use box_plot::BoxPlotChart;
pub use document::ReportDocument;
pub use histogram::HistogramChart;
pub use image::ImageView;
pub use pie::PieChart;
pub use section::{BlockView, ChartView};
pub use text::{TextBlockView, prose_html};
