//! Report data types for the presentation layer.
//!
//! These types are the contract between the renderer that walks report
//! sections and the HTML document built here. They're designed to be:
//!
//! - **Serializable** - the same block list can be dumped as JSON
//! - **Clone-friendly** - components own their data, no borrowing across views
//! - **Pre-computed** - charts arrive fully aggregated; nothing here reads files
//!
//! # Example
//!
//! ```rust
//! use narrative_leptos::types::{Block, BlockContent, TextBlock, TextStyle};
//!
//! let block = Block {
//!     number: 1,
//!     title: None,
//!     content: BlockContent::Text(TextBlock {
//!         style: TextStyle::Header,
//!         content: "Overview".into(),
//!     }),
//! };
//! assert_eq!(block.kind(), "text");
//! ```

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Document-level metadata rendered around the blocks.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DocumentMeta {
    /// `<title>` and sidebar heading
    pub title: String,
    /// Footer line naming the tool that produced the document
    pub generator: String,
}

/// One rendered section, in declaration order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Block {
    /// 1-based section number
    pub number: usize,
    /// Optional section title (charts carry their own title in the figure)
    #[serde(default)]
    pub title: Option<String>,
    /// The rendered payload
    pub content: BlockContent,
}

impl Block {
    /// Short kind tag: `"text"`, `"chart"` or `"image"`.
    pub fn kind(&self) -> &'static str {
        match self.content {
            BlockContent::Text(_) => "text",
            BlockContent::Chart(_) => "chart",
            BlockContent::Image(_) => "image",
        }
    }

    /// DOM anchor for this block.
    pub fn anchor(&self) -> String {
        format!("section-{}", self.number)
    }
}

/// Payload of a [`Block`].
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum BlockContent {
    /// Static narrative, emitted verbatim
    Text(TextBlock),
    /// A chart projected from a tabular artifact
    Chart(ChartFigure),
    /// An opaque image artifact
    Image(ImageBlock),
}

/// How a text block is presented. The content itself is never altered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// Page title (`<h1>`)
    Title,
    /// Section header (`<h2>`), also listed in the sidebar
    Header,
    /// Sub-section header (`<h3>`)
    Subheader,
    /// Narrative paragraph(s)
    Prose,
    /// Formula source
    Latex,
    /// Code listing
    Code {
        /// Language hint for the listing
        language: String,
    },
}

/// A block of literal text.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextBlock {
    /// Presentation style
    pub style: TextStyle,
    /// Literal content
    pub content: String,
}

/// An image artifact carried byte-for-byte.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageBlock {
    /// Logical artifact name the bytes were loaded from
    pub source: String,
    /// MIME type inferred from the artifact's extension
    pub mime: String,
    /// Raw file bytes (base64 in JSON)
    #[serde(with = "base64_bytes")]
    pub bytes: Vec<u8>,
    /// Optional caption shown under the image
    #[serde(default)]
    pub caption: Option<String>,
}

impl ImageBlock {
    /// `data:` URI embedding the unmodified bytes.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

mod base64_bytes {
    use base64::{Engine, engine::general_purpose::STANDARD};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<T, S>(bytes: T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<[u8]>,
        S: Serializer,
    {
        serializer.serialize_str(&STANDARD.encode(bytes.as_ref()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

/// A fully aggregated chart ready to draw.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ChartFigure {
    /// One box per x category
    Box(BoxPlotFigure),
    /// Grouped or stacked bars per x category
    Histogram(HistogramFigure),
    /// Static partition
    Pie(PieFigure),
}

impl ChartFigure {
    /// Chart title (rendered centered above the plot).
    pub fn title(&self) -> &str {
        match self {
            ChartFigure::Box(fig) => &fig.title,
            ChartFigure::Histogram(fig) => &fig.title,
            ChartFigure::Pie(fig) => &fig.title,
        }
    }

    /// Figure size in pixels.
    pub fn size(&self) -> (u32, u32) {
        match self {
            ChartFigure::Box(fig) => (fig.width, fig.height),
            ChartFigure::Histogram(fig) => (fig.width, fig.height),
            ChartFigure::Pie(fig) => (fig.width, fig.height),
        }
    }
}

/// Summary statistics for one box.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BoxStats {
    /// Number of non-missing values
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Smallest value within `q1 - 1.5 * IQR`
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * IQR`
    pub upper_whisker: f64,
    /// Notch bounds around the median, when the plot is notched
    #[serde(default)]
    pub notch: Option<(f64, f64)>,
}

impl BoxStats {
    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// A single point with the hover fields that identify it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HoverPoint {
    /// Measured value
    pub value: f64,
    /// `(field, value)` pairs shown on hover
    #[serde(default)]
    pub hover: Vec<(String, String)>,
}

impl HoverPoint {
    /// Hover text in `field=value` lines.
    pub fn hover_text(&self) -> String {
        let mut lines = vec![format_number(self.value)];
        lines.extend(self.hover.iter().map(|(k, v)| format!("{}={}", k, v)));
        lines.join("\n")
    }
}

/// One box of a box plot.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BoxGroup {
    /// Category key on the x axis
    pub key: String,
    /// Box statistics
    pub stats: BoxStats,
    /// Points outside the whiskers
    #[serde(default)]
    pub outliers: Vec<HoverPoint>,
}

/// Box plot over categorical x.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BoxPlotFigure {
    /// Chart title
    pub title: String,
    /// X axis title
    pub x_title: String,
    /// Y axis title
    pub y_title: String,
    /// Fill/stroke color
    pub color: String,
    /// Draw notches around the median
    pub notched: bool,
    /// Boxes in axis order
    pub groups: Vec<BoxGroup>,
    /// X labels that get a tick (already capped)
    pub x_ticks: Vec<String>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// How histogram series share a category.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    /// Side by side
    #[default]
    Group,
    /// On top of each other
    Stack,
}

/// One colored series of a histogram.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BarSeries {
    /// Legend entry (value of the color field)
    pub name: String,
    /// Bar color
    pub color: String,
    /// One aggregated value per category, aligned with `HistogramFigure::categories`
    pub values: Vec<f64>,
}

/// Aggregated bar chart over categorical x.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HistogramFigure {
    /// Chart title
    pub title: String,
    /// X axis title
    pub x_title: String,
    /// Y axis title
    pub y_title: String,
    /// Legend title (the color field)
    #[serde(default)]
    pub legend_title: String,
    /// Group or stack
    pub bar_mode: BarMode,
    /// X categories in axis order
    pub categories: Vec<String>,
    /// Series in legend order
    pub series: Vec<BarSeries>,
    /// X labels that get a tick (already capped)
    pub x_ticks: Vec<String>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl HistogramFigure {
    /// Largest bar top across categories, honoring the bar mode.
    pub fn max_extent(&self) -> f64 {
        match self.bar_mode {
            BarMode::Group => self
                .series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .fold(0.0, f64::max),
            BarMode::Stack => (0..self.categories.len())
                .map(|i| {
                    self.series
                        .iter()
                        .map(|s| s.values.get(i).copied().unwrap_or(0.0))
                        .sum::<f64>()
                })
                .fold(0.0, f64::max),
        }
    }
}

/// One slice of a pie.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PieSlice {
    /// Slice label
    pub label: String,
    /// Absolute value
    pub value: f64,
    /// Fill color
    pub color: String,
}

/// Pie (or donut, when `hole > 0`) chart.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PieFigure {
    /// Chart title
    pub title: String,
    /// Inner radius as a fraction of the outer radius
    pub hole: f64,
    /// Slices in declaration order
    pub slices: Vec<PieSlice>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl PieFigure {
    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Fraction of the whole for each slice (all zero when the total is zero).
    pub fn fractions(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
            .collect()
    }
}

/// Compact number formatting for labels and hover text.
pub fn format_number(value: f64) -> String {
    if value.fract().abs() < 1e-9 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.4}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_bytes_roundtrip_as_base64() {
        let block = ImageBlock {
            source: "did_results".into(),
            mime: "image/png".into(),
            bytes: vec![0x89, b'P', b'N', b'G', 0, 255],
            caption: None,
        };
        let json = serde_json::to_value(&block).expect("serialize");
        assert_eq!(json["bytes"], "iVBORwD/");
        let back: ImageBlock = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.bytes, block.bytes);
        assert_eq!(block.data_uri(), "data:image/png;base64,iVBORwD/");
    }

    #[test]
    fn stacked_extent_sums_series() {
        let fig = HistogramFigure {
            bar_mode: BarMode::Stack,
            categories: vec!["2009".into(), "2010".into()],
            series: vec![
                BarSeries {
                    name: "Male".into(),
                    values: vec![3.0, 5.0],
                    ..Default::default()
                },
                BarSeries {
                    name: "Female".into(),
                    values: vec![2.0, 1.0],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(fig.max_extent(), 6.0);

        let grouped = HistogramFigure {
            bar_mode: BarMode::Group,
            ..fig
        };
        assert_eq!(grouped.max_extent(), 5.0);
    }

    #[test]
    fn pie_fractions_handle_zero_total() {
        let fig = PieFigure {
            slices: vec![PieSlice {
                label: "21-34".into(),
                value: 0.0,
                color: "red".into(),
            }],
            ..Default::default()
        };
        assert_eq!(fig.fractions(), vec![0.0]);
    }

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(format_number(2449142.0), "2449142");
        assert_eq!(format_number(0.435), "0.435");
        assert_eq!(format_number(0.1234567), "0.1235");
    }

    #[test]
    fn block_content_is_adjacently_tagged() {
        let block = Block {
            number: 3,
            title: None,
            content: BlockContent::Text(TextBlock {
                style: TextStyle::Code {
                    language: "python".into(),
                },
                content: "ols(...)".into(),
            }),
        };
        let json = serde_json::to_value(&block).expect("serialize");
        assert_eq!(json["content"]["kind"], "text");
        assert_eq!(json["content"]["data"]["style"]["code"]["language"], "python");
        assert_eq!(block.anchor(), "section-3");
    }
}
