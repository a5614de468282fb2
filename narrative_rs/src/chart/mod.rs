//! Chart derivation: directive -> [`ChartSpec`] -> projected figure.

pub mod project;
pub mod spec;
pub mod stats;

pub use project::project;
pub use spec::{
    BoxDirective, ChartDirective, ChartFamily, ChartSpec, HistogramDirective, PieDirective,
    PieValues,
};
pub use stats::QuartileMethod;
