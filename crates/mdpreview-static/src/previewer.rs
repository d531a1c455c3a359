//! Preview page builder.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mdpreview_markdown::render_markdown;

use crate::templates::{PageContext, TemplateEngine};

/// Source document used when none is given.
pub const DEFAULT_SOURCE: &str = "patient.md";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "_preview";

/// File name of the index page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Title used when the source path has no file stem.
///
/// A stem that is not valid UTF-8 is not replaced by this fallback: it is
/// converted lossily, so each invalid byte sequence becomes U+FFFD and the
/// page file name differs from the source stem. [`page_title`] logs a
/// warning when that happens.
const FALLBACK_TITLE: &str = "untitled";

/// Configuration for a single preview run.
#[derive(Debug, Clone)]
pub struct PreviewConfig {
    /// Markdown document to render
    pub source: PathBuf,

    /// Directory receiving the page and the index
    pub output_dir: PathBuf,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// What happened to the index page during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    /// The index did not exist and was written
    Created,
    /// The index already existed and was left untouched
    Kept,
}

/// Result of a preview run.
#[derive(Debug)]
pub struct PreviewResult {
    /// Title computed from the source file name
    pub title: String,

    /// Path of the written page
    pub page: PathBuf,

    /// Index page outcome
    pub index: IndexStatus,
}

/// Errors that can occur while building a preview.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("markdown file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders one Markdown document into a standalone preview page.
pub struct Previewer {
    config: PreviewConfig,
    templates: TemplateEngine,
}

impl Previewer {
    /// Create a previewer for the given configuration.
    pub fn new(config: PreviewConfig) -> Result<Self, PreviewError> {
        Ok(Self {
            config,
            templates: TemplateEngine::new()?,
        })
    }

    /// Render the source document and write the page, creating the index
    /// page if the output directory has none yet.
    ///
    /// Nothing is written when the source document is missing.
    pub fn render(&self) -> Result<PreviewResult, PreviewError> {
        let source = &self.config.source;
        if !source.is_file() {
            return Err(PreviewError::SourceNotFound(source.clone()));
        }

        let output_dir = &self.config.output_dir;
        fs::create_dir_all(output_dir).map_err(|e| PreviewError::CreateDir {
            path: output_dir.clone(),
            source: e,
        })?;
        tracing::debug!("Output directory ready: {}", output_dir.display());

        // read_to_string rejects invalid UTF-8 with InvalidData
        let markdown = fs::read_to_string(source).map_err(|e| PreviewError::Read {
            path: source.clone(),
            source: e,
        })?;
        tracing::debug!("Read {} bytes from {}", markdown.len(), source.display());

        let title = page_title(source);
        let html = self.templates.render_page(&PageContext {
            title: title.clone(),
            body: render_markdown(&markdown),
        })?;

        let file_name = format!("{}.html", title);
        let page = output_dir.join(&file_name);
        fs::write(&page, html).map_err(|e| PreviewError::Write {
            path: page.clone(),
            source: e,
        })?;
        tracing::info!("Wrote page {}", page.display());

        let index = self.write_index(&file_name)?;

        Ok(PreviewResult { title, page, index })
    }

    /// Write the index page unless one already exists.
    fn write_index(&self, file_name: &str) -> Result<IndexStatus, PreviewError> {
        let path = self.config.output_dir.join(INDEX_FILE);
        let write_error = |e: io::Error| PreviewError::Write {
            path: path.clone(),
            source: e,
        };

        // Render first so a template failure never leaves an empty index behind
        let html = self.templates.render_index(file_name)?;

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                tracing::debug!("Keeping existing index {}", path.display());
                return Ok(IndexStatus::Kept);
            }
            Err(e) => return Err(write_error(e)),
        };
        file.write_all(html.as_bytes()).map_err(write_error)?;
        tracing::info!("Created index {}", path.display());

        Ok(IndexStatus::Created)
    }
}

/// Render `source` into `output_dir` with a fresh [`Previewer`].
pub fn render(
    source: impl Into<PathBuf>,
    output_dir: impl Into<PathBuf>,
) -> Result<PreviewResult, PreviewError> {
    Previewer::new(PreviewConfig {
        source: source.into(),
        output_dir: output_dir.into(),
    })?
    .render()
}

/// Title of the page generated for `source`: its file name without the
/// extension.
///
/// Stems that are not valid UTF-8 are converted lossily.
pub fn page_title(source: &Path) -> String {
    match source.file_stem() {
        Some(stem) if !stem.is_empty() => match stem.to_str() {
            Some(title) => title.to_string(),
            None => {
                let title = stem.to_string_lossy().into_owned();
                tracing::warn!(
                    "File name of {} is not valid UTF-8, using title {}",
                    source.display(),
                    title
                );
                title
            }
        },
        _ => FALLBACK_TITLE.to_string(),
    }
}
