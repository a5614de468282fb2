//! Block wrapper component - one numbered report section
//!
//! Every block gets a stable anchor (`section-N`) so the sidebar can link to it.

use leptos::prelude::*;

use super::{BoxPlotChart, HistogramChart, ImageView, PieChart, TextBlockView};
use crate::types::{Block, BlockContent, ChartFigure};

/// A single report section in document order
#[component]
pub fn BlockView(block: Block) -> impl IntoView {
    let anchor = block.anchor();
    let kind = block.kind();
    let number = block.number.to_string();

    view! {
        <section id=anchor class="report-block" data-kind=kind data-number=number>
            {block.title.map(|title| view! { <h3 class="block-title">{title}</h3> })}
            {match block.content {
                BlockContent::Text(text) => view! { <TextBlockView block=text /> }.into_any(),
                BlockContent::Chart(figure) => view! { <ChartView figure=figure /> }.into_any(),
                BlockContent::Image(image) => view! { <ImageView image=image /> }.into_any(),
            }}
        </section>
    }
}

/// Dispatch a figure to its chart family component
#[component]
pub fn ChartView(figure: ChartFigure) -> impl IntoView {
    let family = match &figure {
        ChartFigure::Box(_) => "box",
        ChartFigure::Histogram(_) => "histogram",
        ChartFigure::Pie(_) => "pie",
    };

    view! {
        <div class="chart-figure" data-family=family>
            {match figure {
                ChartFigure::Box(fig) => view! { <BoxPlotChart figure=fig /> }.into_any(),
                ChartFigure::Histogram(fig) => view! { <HistogramChart figure=fig /> }.into_any(),
                ChartFigure::Pie(fig) => view! { <PieChart figure=fig /> }.into_any(),
            }}
        </div>
    }
}
