//! Chart directives (declared on a section) and the `ChartSpec` derived
//! from them at render time.

use narrative_leptos::types::BarMode;

use super::stats::QuartileMethod;

/// Default qualitative palette, in assignment order.
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Tick cap used for the year axes throughout the report.
pub const MAX_X_TICKS: usize = 15;

pub const DEFAULT_WIDTH: u32 = 700;
pub const DEFAULT_HEIGHT: u32 = 450;

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

/// Box plot over a categorical x.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxDirective {
    pub title: String,
    pub x: String,
    pub y: String,
    pub hover: Vec<String>,
    pub color: Option<String>,
    pub notched: bool,
    pub quartiles: QuartileMethod,
    pub max_x_ticks: Option<usize>,
    pub size: (u32, u32),
}

impl BoxDirective {
    pub fn new(title: impl Into<String>, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x: x.into(),
            y: y.into(),
            hover: Vec::new(),
            color: None,
            notched: false,
            quartiles: QuartileMethod::default(),
            max_x_ticks: Some(MAX_X_TICKS),
            size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    pub fn hover(mut self, field: impl Into<String>) -> Self {
        self.hover.push(field.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn notched(mut self) -> Self {
        self.notched = true;
        self
    }

    pub fn quartiles(mut self, method: QuartileMethod) -> Self {
        self.quartiles = method;
        self
    }

    pub fn max_x_ticks(mut self, max: Option<usize>) -> Self {
        self.max_x_ticks = max;
        self
    }
}

/// Aggregated bars: sum of `y` (or row count) per `(x, color)`.
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramDirective {
    pub title: String,
    pub x: String,
    pub y: Option<String>,
    pub color: Option<String>,
    pub bar_mode: BarMode,
    pub y_title: Option<String>,
    pub palette: Option<Vec<String>>,
    pub max_x_ticks: Option<usize>,
    pub size: (u32, u32),
}

impl HistogramDirective {
    pub fn new(title: impl Into<String>, x: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x: x.into(),
            y: None,
            color: None,
            bar_mode: BarMode::Group,
            y_title: None,
            palette: None,
            max_x_ticks: Some(MAX_X_TICKS),
            size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    pub fn y(mut self, field: impl Into<String>) -> Self {
        self.y = Some(field.into());
        self
    }

    pub fn color_by(mut self, field: impl Into<String>) -> Self {
        self.color = Some(field.into());
        self
    }

    pub fn bar_mode(mut self, mode: BarMode) -> Self {
        self.bar_mode = mode;
        self
    }

    pub fn y_title(mut self, title: impl Into<String>) -> Self {
        self.y_title = Some(title.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }
}

/// Where pie slice values come from.
#[derive(Clone, Debug, PartialEq)]
pub enum PieValues {
    /// Declared up front, one per distinct label.
    Static(Vec<f64>),
    /// Per-label sum of a column.
    Column(String),
}

/// Static partition keyed by the distinct values of a label column.
#[derive(Clone, Debug, PartialEq)]
pub struct PieDirective {
    pub title: String,
    pub label: String,
    pub values: PieValues,
    pub hole: f64,
    pub colors: Vec<String>,
    pub size: (u32, u32),
}

impl PieDirective {
    pub fn new(title: impl Into<String>, label: impl Into<String>, values: PieValues) -> Self {
        Self {
            title: title.into(),
            label: label.into(),
            values,
            hole: 0.0,
            colors: Vec::new(),
            size: (DEFAULT_WIDTH, DEFAULT_HEIGHT),
        }
    }

    pub fn hole(mut self, hole: f64) -> Self {
        self.hole = hole.clamp(0.0, 0.95);
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }
}

/// Rendering directive stored on a chart section.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartDirective {
    Box(BoxDirective),
    Histogram(HistogramDirective),
    Pie(PieDirective),
}

impl From<BoxDirective> for ChartDirective {
    fn from(d: BoxDirective) -> Self {
        ChartDirective::Box(d)
    }
}

impl From<HistogramDirective> for ChartDirective {
    fn from(d: HistogramDirective) -> Self {
        ChartDirective::Histogram(d)
    }
}

impl From<PieDirective> for ChartDirective {
    fn from(d: PieDirective) -> Self {
        ChartDirective::Pie(d)
    }
}

/// Family-specific parameters of a [`ChartSpec`].
#[derive(Clone, Debug, PartialEq)]
pub enum ChartFamily {
    Box {
        notched: bool,
        quartiles: QuartileMethod,
    },
    Histogram {
        bar_mode: BarMode,
    },
    Pie {
        hole: f64,
        static_values: Option<Vec<f64>>,
    },
}

/// Declarative projection of one table into one chart. Derived on demand,
/// never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub family: ChartFamily,
    pub x: Option<String>,
    pub y: Option<String>,
    pub color: Option<String>,
    pub hover: Vec<String>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub legend_title: String,
    pub max_x_ticks: Option<usize>,
    pub palette: Vec<String>,
    pub width: u32,
    pub height: u32,
}

impl ChartSpec {
    pub fn derive(directive: &ChartDirective) -> Self {
        match directive {
            ChartDirective::Box(d) => Self {
                family: ChartFamily::Box {
                    notched: d.notched,
                    quartiles: d.quartiles,
                },
                x: Some(d.x.clone()),
                y: Some(d.y.clone()),
                color: None,
                hover: d.hover.clone(),
                label: None,
                value: None,
                title: d.title.clone(),
                x_title: d.x.clone(),
                y_title: d.y.clone(),
                legend_title: String::new(),
                max_x_ticks: d.max_x_ticks,
                palette: d
                    .color
                    .clone()
                    .map(|c| vec![c])
                    .unwrap_or_else(default_palette),
                width: d.size.0,
                height: d.size.1,
            },
            ChartDirective::Histogram(d) => {
                let y_title = d.y_title.clone().unwrap_or_else(|| match &d.y {
                    Some(y) => format!("sum of {y}"),
                    None => "count".to_string(),
                });
                Self {
                    family: ChartFamily::Histogram {
                        bar_mode: d.bar_mode,
                    },
                    x: Some(d.x.clone()),
                    y: d.y.clone(),
                    color: d.color.clone(),
                    hover: Vec::new(),
                    label: None,
                    value: None,
                    title: d.title.clone(),
                    x_title: d.x.clone(),
                    y_title,
                    legend_title: d.color.clone().unwrap_or_default(),
                    max_x_ticks: d.max_x_ticks,
                    palette: d.palette.clone().unwrap_or_else(default_palette),
                    width: d.size.0,
                    height: d.size.1,
                }
            }
            ChartDirective::Pie(d) => {
                let (static_values, value) = match &d.values {
                    PieValues::Static(values) => (Some(values.clone()), None),
                    PieValues::Column(column) => (None, Some(column.clone())),
                };
                Self {
                    family: ChartFamily::Pie {
                        hole: d.hole,
                        static_values,
                    },
                    x: None,
                    y: None,
                    color: None,
                    hover: Vec::new(),
                    label: Some(d.label.clone()),
                    value,
                    title: d.title.clone(),
                    x_title: String::new(),
                    y_title: String::new(),
                    legend_title: d.label.clone(),
                    max_x_ticks: None,
                    palette: if d.colors.is_empty() {
                        default_palette()
                    } else {
                        d.colors.clone()
                    },
                    width: d.size.0,
                    height: d.size.1,
                }
            }
        }
    }

    /// Every column the spec reads, in validation order:
    /// x, y, color, hover..., label, value.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut fields = Vec::new();
        fields.extend(self.x.as_deref());
        fields.extend(self.y.as_deref());
        fields.extend(self.color.as_deref());
        fields.extend(self.hover.iter().map(String::as_str));
        fields.extend(self.label.as_deref());
        fields.extend(self.value.as_deref());
        fields
    }

    /// Palette color for the `idx`-th series or slice, cycling.
    pub fn color_at(&self, idx: usize) -> String {
        if self.palette.is_empty() {
            return DEFAULT_PALETTE[idx % DEFAULT_PALETTE.len()].to_string();
        }
        self.palette[idx % self.palette.len()].clone()
    }
}
