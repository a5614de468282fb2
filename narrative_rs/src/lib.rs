//! # narrative
//!
//! Renders a fixed narrative analytics report: static prose, charts projected
//! from pre-aggregated CSV extracts, and opaque result images, in one
//! strictly ordered pass.
//!
//! ## Pipeline
//!
//! ```text
//! narrative.toml -> ArtifactCatalog -> ReportDefinition::resolve
//!     -> ReportRenderer (load -> ChartSpec -> project) -> ReportSink
//! ```
//!
//! - [`config`] - logical artifact names to paths
//! - [`artifact`] - CSV tables and raw image bytes, read fresh per section
//! - [`chart`] - directives, derived chart specs, projection and statistics
//! - [`section`] - the ordered section model and artifact binding
//! - [`renderer`] / [`sink`] - the single sequential render pass
//! - [`medicaid`] - the report this binary ships
//!
//! Any failure is fatal and stops the pass; see [`error::ReportError`].
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use narrative::config::ArtifactCatalog;
//! use narrative::renderer::ReportRenderer;
//! use narrative::sink::BlockSink;
//!
//! let catalog = ArtifactCatalog::default().with("dis_rate", "data/dis_rate_agg.csv");
//! # let catalog = narrative::medicaid::ARTIFACTS
//! #     .iter()
//! #     .fold(catalog, |c, name| c.with(*name, format!("data/{name}")));
//! let report = narrative::medicaid::definition().resolve(&catalog)?;
//! let mut sink = BlockSink::new();
//! ReportRenderer::new(&report).render(&mut sink)?;
//! println!("{} blocks", sink.blocks().len());
//! # Ok::<(), narrative::error::ReportError>(())
//! ```

pub mod artifact;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod medicaid;
pub mod renderer;
pub mod section;
pub mod sink;

pub use error::{ReportError, Result};
