//! Command-line surface of the `narrative` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use narrative_leptos::render_document;
use narrative_leptos::types::{Block, DocumentMeta};
use serde::Serialize;
use tracing::info;

use crate::config::{DEFAULT_CONFIG_FILE, NarrativeConfig};
use crate::medicaid;
use crate::renderer::{RenderSummary, ReportRenderer};
use crate::section::ResolvedReport;
use crate::sink::{BlockSink, NullSink};

#[derive(Parser, Debug, Clone)]
#[command(name = "narrative")]
#[command(about = "Render the Medicaid expansion report into one static HTML page")]
#[command(version)]
pub struct Args {
    /// Artifact catalog (TOML)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Resolve and render everything, but write nothing
    #[arg(long)]
    pub check: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    meta: &'a DocumentMeta,
    blocks: &'a [Block],
}

fn document_meta(report: &ResolvedReport) -> DocumentMeta {
    DocumentMeta {
        title: report.title.clone(),
        generator: format!("narrative {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Load the catalog next to `config_path` and bind the report to it.
pub fn resolve_report(config_path: &Path) -> Result<ResolvedReport> {
    let config = NarrativeConfig::load_from_path(config_path)
        .context("failed to load artifact catalog")?;
    let config_dir = match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let catalog = config.catalog(config_dir);

    let mut definition = medicaid::definition();
    if let Some(title) = config.title {
        definition = definition.retitled(title);
    }
    let report = definition
        .resolve(&catalog)
        .context("report references an unknown artifact")?;
    Ok(report)
}

/// Render into memory and serialize in the requested format.
pub fn render_output(report: &ResolvedReport, format: OutputFormat) -> Result<String> {
    let mut sink = BlockSink::new();
    ReportRenderer::new(report)
        .render(&mut sink)
        .context("report rendering failed")?;

    let meta = document_meta(report);
    let blocks = sink.into_blocks();
    let output = match format {
        OutputFormat::Html => render_document(&meta, &blocks),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonDocument {
            meta: &meta,
            blocks: &blocks,
        })
        .context("failed to serialize blocks")?,
    };
    Ok(output)
}

/// Resolve and render without producing a document.
pub fn check(report: &ResolvedReport) -> Result<RenderSummary> {
    let mut sink = NullSink::default();
    ReportRenderer::new(report)
        .render(&mut sink)
        .context("report rendering failed")
}

/// Entry point behind `main`. Nothing is written unless the whole render
/// succeeded.
pub fn run(args: &Args) -> Result<()> {
    let report = resolve_report(&args.config)?;

    if args.check {
        let summary = check(&report)?;
        info!(
            sections = summary.sections,
            charts = summary.charts,
            images = summary.images,
            "check passed"
        );
        return Ok(());
    }

    let output = render_output(&report, args.format)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = output.len(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let args = Args::parse_from(["narrative"]);
        assert_eq!(args.config, PathBuf::from("narrative.toml"));
        assert_eq!(args.format, OutputFormat::Html);
        assert!(!args.check);
        assert!(args.out.is_none());
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "narrative",
            "--config",
            "data/report.toml",
            "--out",
            "report.json",
            "--format",
            "json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.out.as_deref(), Some(Path::new("report.json")));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn missing_config_names_the_path() {
        let err = resolve_report(Path::new("/nonexistent/narrative.toml")).expect_err("missing");
        let msg = format!("{err:#}");
        assert!(msg.contains("/nonexistent/narrative.toml"));
    }
}
