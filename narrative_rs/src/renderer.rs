//! The report renderer: walks resolved sections strictly in order, loading
//! each bound artifact fresh and appending the result to a sink.
//!
//! ```text
//! Rendering { next: 0 } -> Rendering { next: 1 } -> ... -> Done
//! ```
//!
//! The first error stops the walk. Blocks appended before it stay in the
//! sink; callers must not write a document from a failed render.

use std::path::Path;

use tracing::{debug, info};

use crate::artifact::{load_image, load_table};
use crate::chart::{ChartSpec, project};
use crate::error::{ReportError, Result};
use crate::section::{ResolvedReport, ResolvedSection, Section, SectionBody};
use crate::sink::ReportSink;

/// Where the renderer is in its single pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Index of the next section to render.
    Rendering { next: usize },
    Done,
}

/// Counts of what a completed render appended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub sections: usize,
    pub text: usize,
    pub charts: usize,
    pub images: usize,
}

pub struct ReportRenderer<'a> {
    report: &'a ResolvedReport,
    state: RenderState,
    summary: RenderSummary,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(report: &'a ResolvedReport) -> Self {
        Self {
            report,
            state: RenderState::Rendering { next: 0 },
            summary: RenderSummary::default(),
        }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Render every remaining section into `sink`.
    ///
    /// Once `Done`, further calls return the same summary without touching
    /// the sink.
    pub fn render<S: ReportSink + ?Sized>(&mut self, sink: &mut S) -> Result<RenderSummary> {
        let RenderState::Rendering { next } = self.state else {
            return Ok(self.summary);
        };
        let report = self.report;
        if next == 0 {
            info!(
                title = %report.title,
                sections = report.sections.len(),
                "rendering report"
            );
        }

        for (idx, resolved) in report.sections.iter().enumerate().skip(next) {
            self.state = RenderState::Rendering { next: idx };
            self.render_section(resolved, sink)?;
        }

        self.state = RenderState::Done;
        info!(
            sections = self.summary.sections,
            charts = self.summary.charts,
            images = self.summary.images,
            "report rendered"
        );
        Ok(self.summary)
    }

    fn render_section<S: ReportSink + ?Sized>(
        &mut self,
        resolved: &ResolvedSection,
        sink: &mut S,
    ) -> Result<()> {
        let section = &resolved.section;
        let title = section.title.as_deref();
        debug!(section = section.number, kind = section.kind(), "rendering section");

        match &section.body {
            SectionBody::Text(text) => {
                sink.append_text(section.number, title, text.clone())?;
                self.summary.text += 1;
            }
            SectionBody::Chart {
                artifact,
                directive,
            } => {
                let path = bound_path(section, resolved)?;
                let table = load_table(&artifact.name, path)?;
                let spec = ChartSpec::derive(directive);
                let figure = project(&spec, &table, section.number)?;
                sink.append_chart(section.number, title, figure)?;
                self.summary.charts += 1;
            }
            SectionBody::Image { artifact, caption } => {
                let path = bound_path(section, resolved)?;
                let image = load_image(&artifact.name, path, caption.clone())?;
                sink.append_image(section.number, title, image)?;
                self.summary.images += 1;
            }
        }
        self.summary.sections += 1;
        Ok(())
    }
}

fn bound_path<'r>(section: &Section, resolved: &'r ResolvedSection) -> Result<&'r Path> {
    resolved.path().ok_or_else(|| ReportError::UnresolvedArtifact {
        section: section.number,
        name: section
            .artifact()
            .map(|a| a.name.clone())
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::BoxDirective;
    use crate::config::ArtifactCatalog;
    use crate::section::ReportDefinition;
    use crate::sink::{BlockSink, NullSink};
    use tempfile::TempDir;

    fn definition() -> ReportDefinition {
        ReportDefinition::new("Renderer")
            .heading("Title")
            .chart(
                "dis_rate",
                BoxDirective::new("Rates", "year", "tmp_rate").hover("state"),
            )
            .prose("after the chart")
    }

    #[test]
    fn renders_all_sections_then_done() {
        let temp = TempDir::new().expect("temp dir");
        let csv = temp.path().join("dis.csv");
        std::fs::write(&csv, "year,tmp_rate,state\n2009,0.4,Ohio\n").expect("write");
        let report = definition()
            .resolve(&ArtifactCatalog::default().with("dis_rate", &csv))
            .expect("resolve");

        let mut renderer = ReportRenderer::new(&report);
        let mut sink = BlockSink::new();
        let summary = renderer.render(&mut sink).expect("render");

        assert_eq!(renderer.state(), RenderState::Done);
        assert_eq!(
            summary,
            RenderSummary {
                sections: 3,
                text: 2,
                charts: 1,
                images: 0
            }
        );
        let kinds: Vec<&str> = sink.blocks().iter().map(|b| b.kind()).collect();
        assert_eq!(kinds, ["text", "chart", "text"]);

        // a finished renderer does not append again
        let again = renderer.render(&mut sink).expect("render");
        assert_eq!(again, summary);
        assert_eq!(sink.blocks().len(), 3);
    }

    #[test]
    fn stops_at_first_failure() {
        let temp = TempDir::new().expect("temp dir");
        let report = definition()
            .resolve(&ArtifactCatalog::default().with("dis_rate", temp.path().join("gone.csv")))
            .expect("resolve");

        let mut renderer = ReportRenderer::new(&report);
        let mut sink = NullSink::default();
        let err = renderer.render(&mut sink).expect_err("missing artifact");

        assert!(matches!(err, ReportError::ArtifactNotFound { .. }));
        assert_eq!(sink.appended, 1);
        assert_eq!(renderer.state(), RenderState::Rendering { next: 1 });
    }
}
