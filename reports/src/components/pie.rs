//! Pie / donut chart component

use std::f64::consts::PI;

use leptos::prelude::*;

use crate::types::{PieFigure, format_number};

/// Slices narrower than this get no percentage label.
const MIN_LABEL_FRACTION: f64 = 0.03;

/// Inline SVG pie. Slices start at 12 o'clock and run clockwise; with a
/// hole the title sits in the middle of the donut.
#[component]
pub fn PieChart(figure: PieFigure) -> impl IntoView {
    let width = figure.width as f64;
    let height = figure.height as f64;
    let cx = width * 0.4;
    let cy = height / 2.0 + 10.0;
    let radius = (height / 2.0 - 40.0).min(width * 0.3).max(20.0);
    let inner = radius * figure.hole.clamp(0.0, 0.95);
    let fractions = figure.fractions();
    let legend_x = width * 0.75;

    let mut start = 0.0;
    let slices = figure
        .slices
        .iter()
        .zip(fractions)
        .map(|(slice, fraction)| {
            let sweep = fraction * 2.0 * PI;
            let path = slice_path(cx, cy, radius, inner, start, sweep);
            let mid = start + sweep / 2.0;
            let label_r = (radius + inner) / 2.0;
            let label = (fraction >= MIN_LABEL_FRACTION).then(|| {
                (
                    cx + label_r * mid.sin(),
                    cy - label_r * mid.cos(),
                    format!("{:.1}%", fraction * 100.0),
                )
            });
            start += sweep;
            (
                slice.color.clone(),
                path,
                label,
                format!(
                    "{}\n{} ({:.1}%)",
                    slice.label,
                    format_number(slice.value),
                    fraction * 100.0
                ),
            )
        })
        .collect::<Vec<_>>();

    let centered_title = inner > 0.0;
    let legend = figure
        .slices
        .iter()
        .map(|s| (s.label.clone(), s.color.clone()))
        .collect::<Vec<_>>();

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=format!("0 0 {} {}", figure.width, figure.height)
            width=figure.width.to_string()
            height=figure.height.to_string()
            class="chart chart-pie"
        >
            {slices.into_iter().map(|(color, path, label, hover)| view! {
                <path d=path fill=color stroke="#ffffff" stroke-width="1">
                    <title>{hover}</title>
                </path>
                {label.map(|(x, y, text)| view! {
                    <text
                        x=format!("{:.2}", x)
                        y=format!("{:.2}", y)
                        text-anchor="middle"
                        dominant-baseline="middle"
                        font-size="12"
                        fill="#ffffff"
                    >
                        {text}
                    </text>
                })}
            }).collect::<Vec<_>>()}
            <text
                class="chart-title"
                x=format!("{:.2}", if centered_title { cx } else { width / 2.0 })
                y=format!("{:.2}", if centered_title { cy } else { 28.0 })
                text-anchor="middle"
                dominant-baseline="middle"
                font-size="15"
                font-weight="700"
                fill="#1f2328"
            >
                {figure.title.clone()}
            </text>
            <g class="legend">
                {legend.into_iter().enumerate().map(|(idx, (label, color))| {
                    let y = cy - radius + idx as f64 * 22.0;
                    view! {
                        <rect x=format!("{:.2}", legend_x) y=format!("{:.2}", y) width="12" height="12" fill=color />
                        <text x=format!("{:.2}", legend_x + 18.0) y=format!("{:.2}", y + 10.0) font-size="12" fill="#1f2328">
                            {label}
                        </text>
                    }
                }).collect::<Vec<_>>()}
            </g>
        </svg>
    }
}

/// Annular sector path. Angles are radians clockwise from 12 o'clock.
pub(crate) fn slice_path(
    cx: f64,
    cy: f64,
    outer: f64,
    inner: f64,
    start: f64,
    sweep: f64,
) -> String {
    // A full-circle arc degenerates when start == end.
    let sweep = sweep.min(2.0 * PI - 1e-4);
    let end = start + sweep;
    let large = if sweep > PI { 1 } else { 0 };
    let point = |r: f64, a: f64| (cx + r * a.sin(), cy - r * a.cos());

    let (ox1, oy1) = point(outer, start);
    let (ox2, oy2) = point(outer, end);
    if inner <= 0.0 {
        return format!(
            "M{cx:.2},{cy:.2} L{ox1:.2},{oy1:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox2:.2},{oy2:.2} Z"
        );
    }
    let (ix1, iy1) = point(inner, start);
    let (ix2, iy2) = point(inner, end);
    format!(
        "M{ox1:.2},{oy1:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox2:.2},{oy2:.2} \
         L{ix2:.2},{iy2:.2} A{inner:.2},{inner:.2} 0 {large} 0 {ix1:.2},{iy1:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_slice_starts_at_twelve_oclock() {
        let path = slice_path(100.0, 100.0, 50.0, 0.0, 0.0, PI / 2.0);
        assert!(path.starts_with("M100.00,100.00 L100.00,50.00"));
        assert!(path.contains("150.00,100.00"));
    }

    #[test]
    fn donut_slice_has_two_arcs() {
        let path = slice_path(100.0, 100.0, 50.0, 20.0, 0.0, PI);
        assert_eq!(path.matches('A').count(), 2);
    }

    #[test]
    fn full_circle_uses_large_arc() {
        let path = slice_path(0.0, 0.0, 10.0, 4.0, 0.0, 2.0 * PI);
        assert!(path.contains(" 0 1 1 "));
    }
}
