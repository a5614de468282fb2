//! Report definition: the fixed, ordered list of sections.
//!
//! Sections are numbered from 1 in declaration order when they are added and
//! never change afterwards. Binding logical artifact names to paths happens
//! once, in [`ReportDefinition::resolve`], before anything is rendered.

use std::path::{Path, PathBuf};

use narrative_leptos::types::{TextBlock, TextStyle};
use tracing::debug;

use crate::artifact::ArtifactRef;
use crate::chart::ChartDirective;
use crate::config::ArtifactCatalog;
use crate::error::{ReportError, Result};

/// What a section renders.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
    /// Literal narrative, emitted verbatim.
    Text(TextBlock),
    /// One chart projected from one tabular artifact.
    Chart {
        artifact: ArtifactRef,
        directive: ChartDirective,
    },
    /// One opaque image artifact.
    Image {
        artifact: ArtifactRef,
        caption: Option<String>,
    },
}

/// One numbered unit of the report.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub number: usize,
    pub title: Option<String>,
    pub body: SectionBody,
}

impl Section {
    pub fn kind(&self) -> &'static str {
        match self.body {
            SectionBody::Text(_) => "text",
            SectionBody::Chart { .. } => "chart",
            SectionBody::Image { .. } => "image",
        }
    }

    /// Bound artifact, for chart and image sections.
    pub fn artifact(&self) -> Option<&ArtifactRef> {
        match &self.body {
            SectionBody::Text(_) => None,
            SectionBody::Chart { artifact, .. } | SectionBody::Image { artifact, .. } => {
                Some(artifact)
            }
        }
    }
}

/// Builder for the ordered section list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportDefinition {
    title: String,
    sections: Vec<Section>,
}

impl ReportDefinition {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the document title (the `title` config key).
    pub fn retitled(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Append a section and return the builder.
    pub fn section(mut self, title: Option<String>, body: SectionBody) -> Self {
        let number = self.sections.len() + 1;
        self.sections.push(Section {
            number,
            title,
            body,
        });
        self
    }

    pub fn text(self, style: TextStyle, content: impl Into<String>) -> Self {
        self.section(
            None,
            SectionBody::Text(TextBlock {
                style,
                content: content.into(),
            }),
        )
    }

    pub fn heading(self, content: impl Into<String>) -> Self {
        self.text(TextStyle::Title, content)
    }

    pub fn header(self, content: impl Into<String>) -> Self {
        self.text(TextStyle::Header, content)
    }

    pub fn subheader(self, content: impl Into<String>) -> Self {
        self.text(TextStyle::Subheader, content)
    }

    pub fn prose(self, content: impl Into<String>) -> Self {
        self.text(TextStyle::Prose, content)
    }

    pub fn latex(self, content: impl Into<String>) -> Self {
        self.text(TextStyle::Latex, content)
    }

    pub fn code(self, language: impl Into<String>, content: impl Into<String>) -> Self {
        self.text(
            TextStyle::Code {
                language: language.into(),
            },
            content,
        )
    }

    pub fn chart(self, artifact: impl Into<String>, directive: impl Into<ChartDirective>) -> Self {
        self.section(
            None,
            SectionBody::Chart {
                artifact: ArtifactRef::tabular(artifact),
                directive: directive.into(),
            },
        )
    }

    pub fn image(self, artifact: impl Into<String>, caption: Option<&str>) -> Self {
        self.section(
            None,
            SectionBody::Image {
                artifact: ArtifactRef::image(artifact),
                caption: caption.map(str::to_string),
            },
        )
    }

    /// Title the most recently added section.
    pub fn titled(mut self, title: impl Into<String>) -> Self {
        if let Some(last) = self.sections.last_mut() {
            last.title = Some(title.into());
        }
        self
    }

    /// Every logical artifact name the report binds, in section order.
    pub fn artifact_names(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(Section::artifact)
            .map(|a| a.name.as_str())
            .collect()
    }

    /// Bind every chart and image section to a path. Fails on the first
    /// section whose artifact the catalog does not know.
    pub fn resolve(&self, catalog: &ArtifactCatalog) -> Result<ResolvedReport> {
        let mut sections = Vec::with_capacity(self.sections.len());
        for section in &self.sections {
            let path = match section.artifact() {
                Some(artifact) => {
                    let path = catalog.resolve(&artifact.name).ok_or_else(|| {
                        ReportError::UnresolvedArtifact {
                            section: section.number,
                            name: artifact.name.clone(),
                        }
                    })?;
                    debug!(section = section.number, artifact = %artifact.name, "bound artifact");
                    Some(path.to_path_buf())
                }
                None => None,
            };
            sections.push(ResolvedSection {
                section: section.clone(),
                path,
            });
        }
        Ok(ResolvedReport {
            title: self.title.clone(),
            sections,
        })
    }
}

/// A section with its artifact path bound.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSection {
    pub section: Section,
    path: Option<PathBuf>,
}

impl ResolvedSection {
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// A definition whose every artifact reference is known to resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedReport {
    pub title: String,
    pub sections: Vec<ResolvedSection>,
}
