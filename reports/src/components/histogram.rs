//! Histogram component - aggregated bars per category, grouped or stacked

use leptos::prelude::*;

use super::axis::{BandScale, CategoryAxis, ChartTitle, LinearScale, PlotArea, ValueAxis};
use crate::types::{BarMode, HistogramFigure, format_number};

const LEGEND_WIDTH: f64 = 150.0;

/// A positioned bar, computed before any markup is built.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub hover: String,
}

/// Inline SVG bar chart with a legend on the right.
#[component]
pub fn HistogramChart(figure: HistogramFigure) -> impl IntoView {
    let has_legend = figure.series.len() > 1 || !figure.legend_title.is_empty();
    let right = if has_legend { LEGEND_WIDTH } else { 30.0 };
    let area = PlotArea::with_margins(figure.width, figure.height, right);
    let scale = LinearScale::nice(0.0, figure.max_extent(), 8);
    let bars = layout_bars(&figure, &scale, &area);
    let legend_x = area.right() + 16.0;
    let legend_entries = figure
        .series
        .iter()
        .map(|s| (s.name.clone(), s.color.clone()))
        .collect::<Vec<_>>();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=format!("0 0 {} {}", figure.width, figure.height)
            width=figure.width.to_string()
            height=figure.height.to_string()
            class="chart chart-histogram"
        >
            <ChartTitle title=figure.title.clone() width=figure.width />
            <ValueAxis scale=scale area=area title=figure.y_title.clone() />
            <CategoryAxis
                categories=figure.categories.clone()
                ticks=figure.x_ticks.clone()
                area=area
                title=figure.x_title.clone()
            />
            <g class="bars">
                {bars.into_iter().map(|bar| view! {
                    <rect
                        x=format!("{:.2}", bar.x)
                        y=format!("{:.2}", bar.y)
                        width=format!("{:.2}", bar.width)
                        height=format!("{:.2}", bar.height)
                        fill=bar.color
                    >
                        <title>{bar.hover}</title>
                    </rect>
                }).collect::<Vec<_>>()}
            </g>
            {has_legend.then(|| view! {
                <g class="legend">
                    <text x=format!("{:.2}", legend_x) y=format!("{:.2}", area.top) font-size="12" font-weight="600" fill="#1f2328">
                        {figure.legend_title.clone()}
                    </text>
                    {legend_entries.into_iter().enumerate().map(|(idx, (name, color))| {
                        let y = area.top + 14.0 + idx as f64 * 20.0;
                        view! {
                            <rect x=format!("{:.2}", legend_x) y=format!("{:.2}", y) width="12" height="12" fill=color />
                            <text x=format!("{:.2}", legend_x + 18.0) y=format!("{:.2}", y + 10.0) font-size="11" fill="#1f2328">
                                {name}
                            </text>
                        }
                    }).collect::<Vec<_>>()}
                </g>
            })}
        </svg>
    }
}

/// Place every non-zero bar inside the plot area.
pub(crate) fn layout_bars(
    figure: &HistogramFigure,
    scale: &LinearScale,
    area: &PlotArea,
) -> Vec<BarRect> {
    let bands = BandScale::new(figure.categories.len(), area);
    let inner = bands.band() * 0.8;
    let series_count = figure.series.len().max(1);
    let mut bars = Vec::new();

    for (cat_idx, category) in figure.categories.iter().enumerate() {
        let band_left = bands.center(cat_idx) - inner / 2.0;
        let mut stacked = 0.0;
        for (series_idx, series) in figure.series.iter().enumerate() {
            let value = series.values.get(cat_idx).copied().unwrap_or(0.0);
            if value <= 0.0 {
                continue;
            }
            let (x, width, base) = match figure.bar_mode {
                BarMode::Group => {
                    let width = inner / series_count as f64;
                    (band_left + width * series_idx as f64, width, 0.0)
                }
                BarMode::Stack => (band_left, inner, stacked),
            };
            let top = scale.to_y(base + value, area);
            let bottom = scale.to_y(base, area);
            bars.push(BarRect {
                x,
                y: top,
                width,
                height: (bottom - top).max(0.0),
                color: series.color.clone(),
                hover: format!("{}\n{}: {}", category, series.name, format_number(value)),
            });
            stacked += value;
        }
    }
    bars
}
