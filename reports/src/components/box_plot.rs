//! Box plot component - one (optionally notched) box per x category

use leptos::prelude::*;

use super::axis::{BandScale, CategoryAxis, ChartTitle, LinearScale, PlotArea, ValueAxis};
use crate::types::{BoxGroup, BoxPlotFigure};

/// Relative inset of the notch waist, as a fraction of the box width.
const NOTCH_WIDTH: f64 = 0.25;

/// Inline SVG box plot.
#[component]
pub fn BoxPlotChart(figure: BoxPlotFigure) -> impl IntoView {
    let area = PlotArea::with_margins(figure.width, figure.height, 30.0);
    let (lo, hi) = value_extent(&figure.groups);
    let scale = LinearScale::nice(lo, hi, 8);
    let bands = BandScale::new(figure.groups.len(), &area);
    let box_width = bands.band() * 0.5;
    let categories = figure.groups.iter().map(|g| g.key.clone()).collect::<Vec<_>>();
    let color = figure.color.clone();
    let notched = figure.notched;

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=format!("0 0 {} {}", figure.width, figure.height)
            width=figure.width.to_string()
            height=figure.height.to_string()
            class="chart chart-box"
        >
            <ChartTitle title=figure.title.clone() width=figure.width />
            <ValueAxis scale=scale.clone() area=area title=figure.y_title.clone() />
            <CategoryAxis
                categories=categories
                ticks=figure.x_ticks.clone()
                area=area
                title=figure.x_title.clone()
            />
            {figure.groups.into_iter().enumerate().map(|(idx, group)| {
                let cx = bands.center(idx);
                let y = |v: f64| scale.to_y(v, &area);
                let half = box_width / 2.0;
                let outline = box_outline(&group, cx, half, notched, &y);
                let inset = if notched { half * 2.0 * NOTCH_WIDTH } else { 0.0 };
                let stats = group.stats.clone();
                let summary = format!(
                    "{}\nn={}\nmedian={:.4}\nq1={:.4}\nq3={:.4}",
                    group.key, stats.n, stats.median, stats.q1, stats.q3
                );
                view! {
                    <g class="box-group" data-key=group.key.clone()>
                        // Whiskers with caps
                        <line
                            x1=fmt(cx) x2=fmt(cx)
                            y1=fmt(y(stats.q3)) y2=fmt(y(stats.upper_whisker))
                            stroke=color.clone() stroke-width="1.5"
                        />
                        <line
                            x1=fmt(cx) x2=fmt(cx)
                            y1=fmt(y(stats.q1)) y2=fmt(y(stats.lower_whisker))
                            stroke=color.clone() stroke-width="1.5"
                        />
                        <line
                            x1=fmt(cx - half / 2.0) x2=fmt(cx + half / 2.0)
                            y1=fmt(y(stats.upper_whisker)) y2=fmt(y(stats.upper_whisker))
                            stroke=color.clone() stroke-width="1.5"
                        />
                        <line
                            x1=fmt(cx - half / 2.0) x2=fmt(cx + half / 2.0)
                            y1=fmt(y(stats.lower_whisker)) y2=fmt(y(stats.lower_whisker))
                            stroke=color.clone() stroke-width="1.5"
                        />
                        <path
                            d=outline
                            fill=color.clone()
                            fill-opacity="0.5"
                            stroke=color.clone()
                            stroke-width="1.5"
                        >
                            <title>{summary}</title>
                        </path>
                        <line
                            x1=fmt(cx - half + inset) x2=fmt(cx + half - inset)
                            y1=fmt(y(stats.median)) y2=fmt(y(stats.median))
                            stroke=color.clone() stroke-width="2"
                        />
                        {group.outliers.into_iter().map(|point| {
                            view! {
                                <circle
                                    cx=fmt(cx)
                                    cy=fmt(y(point.value))
                                    r="3"
                                    fill="none"
                                    stroke=color.clone()
                                    stroke-width="1.2"
                                >
                                    <title>{point.hover_text()}</title>
                                </circle>
                            }
                        }).collect::<Vec<_>>()}
                    </g>
                }
            }).collect::<Vec<_>>()}
        </svg>
    }
}

fn fmt(v: f64) -> String {
    format!("{:.2}", v)
}

/// Smallest and largest value drawn (whiskers, outliers, notches).
fn value_extent(groups: &[BoxGroup]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for group in groups {
        let s = &group.stats;
        lo = lo.min(s.lower_whisker);
        hi = hi.max(s.upper_whisker);
        if let Some((n_lo, n_hi)) = s.notch {
            lo = lo.min(n_lo);
            hi = hi.max(n_hi);
        }
        for p in &group.outliers {
            lo = lo.min(p.value);
            hi = hi.max(p.value);
        }
    }
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

/// SVG path of the box, pinched at the median when notched.
fn box_outline(
    group: &BoxGroup,
    cx: f64,
    half: f64,
    notched: bool,
    y: &dyn Fn(f64) -> f64,
) -> String {
    let s = &group.stats;
    let (left, right) = (cx - half, cx + half);
    match (notched, s.notch) {
        (true, Some((n_lo, n_hi))) => {
            let inset = half * 2.0 * NOTCH_WIDTH;
            format!(
                "M{l:.2},{q1:.2} L{l:.2},{nl:.2} L{li:.2},{m:.2} L{l:.2},{nh:.2} L{l:.2},{q3:.2} \
                 L{r:.2},{q3:.2} L{r:.2},{nh:.2} L{ri:.2},{m:.2} L{r:.2},{nl:.2} L{r:.2},{q1:.2} Z",
                l = left,
                r = right,
                li = left + inset,
                ri = right - inset,
                q1 = y(s.q1),
                q3 = y(s.q3),
                m = y(s.median),
                nl = y(n_lo),
                nh = y(n_hi),
            )
        }
        _ => format!(
            "M{l:.2},{q1:.2} L{l:.2},{q3:.2} L{r:.2},{q3:.2} L{r:.2},{q1:.2} Z",
            l = left,
            r = right,
            q1 = y(s.q1),
            q3 = y(s.q3),
        ),
    }
}
