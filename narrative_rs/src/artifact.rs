//! Artifact loaders - tabular CSV extracts and opaque image files.
//!
//! Each call performs a fresh read; nothing is cached between sections.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use narrative_leptos::types::ImageBlock;
use tracing::debug;

use crate::error::{ReportError, Result};

/// What a section expects to find behind a logical name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactKind {
    Tabular,
    Image,
}

/// Logical reference to an artifact, resolved through the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactRef {
    pub name: String,
    pub kind: ArtifactKind,
}

impl ArtifactRef {
    pub fn tabular(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ArtifactKind::Tabular,
        }
    }

    pub fn image(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ArtifactKind::Image,
        }
    }
}

/// An in-memory CSV extract: named columns, string cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    name: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse CSV (with a header row) from any reader.
    pub fn from_reader<R: Read>(name: &str, reader: R) -> Result<Self> {
        let malformed = |e: csv::Error| ReportError::MalformedArtifact {
            name: name.to_string(),
            reason: e.to_string(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(malformed)?
            .iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(malformed)?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            name: name.to_string(),
            headers,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a named column.
    pub fn column(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ReportError::SchemaMismatch {
                artifact: self.name.clone(),
                column: column.to_string(),
                available: self.headers.clone(),
            })
    }

    /// Fails on the first field (in the given order) that is not a column.
    pub fn require<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> Result<()> {
        for field in fields {
            self.column(field)?;
        }
        Ok(())
    }

    /// Raw cell text.
    pub fn text(&self, row: usize, col: usize) -> &str {
        self.rows[row].get(col).map(String::as_str).unwrap_or("")
    }

    /// Numeric cell; empty and `nan` cells are missing values.
    pub fn numeric(&self, row: usize, col: usize) -> Result<Option<f64>> {
        let raw = self.text(row, col).trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
            return Ok(None);
        }
        let malformed = |what: &str| ReportError::MalformedArtifact {
            name: self.name.clone(),
            reason: format!(
                "column '{}' row {}: '{}' is not {}",
                self.headers.get(col).map(String::as_str).unwrap_or("?"),
                row + 1,
                raw,
                what
            ),
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            Ok(_) => Err(malformed("finite")),
            Err(_) => Err(malformed("a number")),
        }
    }
}

fn open_artifact(name: &str, path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::ArtifactNotFound {
            name: name.to_string(),
            path: path.to_path_buf(),
        },
        _ => ReportError::Io(e),
    })
}

/// Read a tabular artifact from disk.
pub fn load_table(name: &str, path: &Path) -> Result<Table> {
    let file = open_artifact(name, path)?;
    let table = Table::from_reader(name, file)?;
    debug!(
        artifact = name,
        rows = table.len(),
        columns = table.headers().len(),
        "loaded table"
    );
    Ok(table)
}

/// Read an image artifact; bytes are kept exactly as stored.
pub fn load_image(name: &str, path: &Path, caption: Option<String>) -> Result<ImageBlock> {
    let mut file = open_artifact(name, path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    debug!(artifact = name, bytes = bytes.len(), "loaded image");
    Ok(ImageBlock {
        source: name.to_string(),
        mime: mime_for(path).to_string(),
        bytes,
        caption,
    })
}

/// MIME type from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
