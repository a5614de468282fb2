//! Shared axis geometry and axis components for the SVG charts.
//!
//! Value axes use the "nice numbers" step selection; category axes split
//! the plot width into equal bands.

use leptos::prelude::*;

/// Pixel rectangle the data is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Width
    pub width: f64,
    /// Height
    pub height: f64,
}

impl PlotArea {
    /// Standard margins for a titled chart with axis titles.
    pub fn with_margins(width: u32, height: u32, right: f64) -> Self {
        let (left, top, bottom) = (70.0, 50.0, 60.0);
        Self {
            left,
            top,
            width: (width as f64 - left - right).max(10.0),
            height: (height as f64 - top - bottom).max(10.0),
        }
    }

    /// Bottom edge
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Linear value scale with evenly spaced ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearScale {
    /// Axis minimum (a multiple of `step`)
    pub min: f64,
    /// Axis maximum (a multiple of `step`)
    pub max: f64,
    /// Tick spacing
    pub step: f64,
}

impl LinearScale {
    /// Scale covering `[data_min, data_max]` with roughly `target_ticks` ticks.
    pub fn nice(data_min: f64, data_max: f64, target_ticks: usize) -> Self {
        if !data_min.is_finite() || !data_max.is_finite() {
            return Self {
                min: 0.0,
                max: 1.0,
                step: 0.2,
            };
        }
        if (data_max - data_min).abs() < 1e-12 {
            let pad = if data_min.abs() > 1e-12 { data_min.abs() * 0.1 } else { 1.0 };
            return Self::nice(data_min - pad, data_max + pad, target_ticks);
        }
        let rough = (data_max - data_min) / (target_ticks.max(2) - 1) as f64;
        let step = nice_step(rough);
        Self {
            min: (data_min / step).floor() * step,
            max: (data_max / step).ceil() * step,
            step,
        }
    }

    /// Tick positions from `min` to `max`.
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as usize;
        (0..=count).map(|i| self.min + self.step * i as f64).collect()
    }

    /// Map a data value to a y pixel inside `area` (larger values go up).
    pub fn to_y(&self, value: f64, area: &PlotArea) -> f64 {
        let frac = (value - self.min) / (self.max - self.min);
        area.bottom() - frac * area.height
    }

    /// Tick label with as many decimals as the step needs.
    pub fn label(&self, value: f64) -> String {
        let decimals = if self.step >= 1.0 {
            0
        } else {
            (-self.step.log10().floor()) as usize
        };
        if decimals == 0 {
            let v = if value.abs() < self.step * 0.01 { 0.0 } else { value };
            format!("{}", v.round() as i64)
        } else {
            format!("{:.prec$}", value, prec = decimals)
        }
    }
}

fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

/// Equal-width bands for categorical x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    left: f64,
    width: f64,
}

impl BandScale {
    /// Split the plot width into `count` bands.
    pub fn new(count: usize, area: &PlotArea) -> Self {
        Self {
            count: count.max(1),
            left: area.left,
            width: area.width,
        }
    }

    /// Width of one band.
    pub fn band(&self) -> f64 {
        self.width / self.count as f64
    }

    /// Center x of band `idx`.
    pub fn center(&self, idx: usize) -> f64 {
        self.left + self.band() * (idx as f64 + 0.5)
    }
}

/// Horizontal gridlines, tick labels and the rotated y title.
#[component]
pub fn ValueAxis(
    /// Value scale the ticks are taken from.
    scale: LinearScale,
    /// Plot area the gridlines span.
    area: PlotArea,
    /// Y axis title, drawn rotated left of the labels.
    title: String,
) -> impl IntoView {
    let ticks = scale.ticks();
    let title_x = area.left - 52.0;
    let title_y = area.top + area.height / 2.0;

    view! {
        <g class="axis axis-y">
            {ticks.into_iter().map(|tick| {
                let y = scale.to_y(tick, &area);
                view! {
                    <line
                        x1=format!("{:.2}", area.left)
                        x2=format!("{:.2}", area.right())
                        y1=format!("{:.2}", y)
                        y2=format!("{:.2}", y)
                        stroke="#e5e7eb"
                        stroke-width="1"
                    />
                    <text
                        x=format!("{:.2}", area.left - 8.0)
                        y=format!("{:.2}", y)
                        text-anchor="end"
                        dominant-baseline="middle"
                        font-size="11"
                        fill="#59636e"
                    >
                        {scale.label(tick)}
                    </text>
                }
            }).collect::<Vec<_>>()}
            <text
                x=format!("{:.2}", title_x)
                y=format!("{:.2}", title_y)
                text-anchor="middle"
                font-size="12"
                fill="#1f2328"
                transform=format!("rotate(-90 {:.2} {:.2})", title_x, title_y)
            >
                {title}
            </text>
        </g>
    }
}

/// Baseline, category tick labels (only those in `ticks`) and the x title.
#[component]
pub fn CategoryAxis(
    /// Every category, in axis order.
    categories: Vec<String>,
    /// The subset of `categories` that gets a label.
    ticks: Vec<String>,
    /// Plot area the baseline spans.
    area: PlotArea,
    /// X axis title, centered below the labels.
    title: String,
) -> impl IntoView {
    let bands = BandScale::new(categories.len(), &area);
    let labelled = categories
        .into_iter()
        .enumerate()
        .filter(|(_, key)| ticks.contains(key))
        .collect::<Vec<_>>();

    view! {
        <g class="axis axis-x">
            <line
                x1=format!("{:.2}", area.left)
                x2=format!("{:.2}", area.right())
                y1=format!("{:.2}", area.bottom())
                y2=format!("{:.2}", area.bottom())
                stroke="#8c959f"
                stroke-width="1"
            />
            {labelled.into_iter().map(|(idx, key)| {
                let x = bands.center(idx);
                view! {
                    <line
                        x1=format!("{:.2}", x)
                        x2=format!("{:.2}", x)
                        y1=format!("{:.2}", area.bottom())
                        y2=format!("{:.2}", area.bottom() + 4.0)
                        stroke="#8c959f"
                        stroke-width="1"
                    />
                    <text
                        x=format!("{:.2}", x)
                        y=format!("{:.2}", area.bottom() + 18.0)
                        text-anchor="middle"
                        font-size="11"
                        fill="#59636e"
                    >
                        {key}
                    </text>
                }
            }).collect::<Vec<_>>()}
            <text
                x=format!("{:.2}", area.left + area.width / 2.0)
                y=format!("{:.2}", area.bottom() + 44.0)
                text-anchor="middle"
                font-size="12"
                fill="#1f2328"
            >
                {title}
            </text>
        </g>
    }
}

/// Bold chart title centered over the full figure width.
#[component]
pub fn ChartTitle(
    /// Title text.
    title: String,
    /// Full figure width in pixels.
    width: u32,
) -> impl IntoView {
    view! {
        <text
            class="chart-title"
            x=format!("{:.2}", width as f64 / 2.0)
            y="28"
            text-anchor="middle"
            font-size="16"
            font-weight="700"
            fill="#1f2328"
        >
            {title}
        </text>
    }
}
