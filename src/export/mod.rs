//! Recipe export to portable documents.
//!
//! Export happens in two steps. [`layout_recipe`] places the recipe text on
//! pages, and a [`DocumentBackend`] turns the laid-out pages into file bytes.
//! An [`Exporter`] without a backend refuses to export instead of producing a
//! partial file.

use crate::model::Recipe;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

mod layout;
mod metrics;
mod pdf;

pub use layout::{layout_recipe, wrap_text, Document, Font, Page, PageLayout, TextRun};
pub use metrics::text_width;
pub use pdf::PdfBackend;

/// Errors that can occur when exporting a recipe.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Document export is not available")]
    BackendUnavailable,

    #[error("Failed to render document: {0}")]
    RenderError(String),

    #[error("Failed to write {path}: {source}")]
    IoError {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Turns a laid-out document into the bytes of a file format.
pub trait DocumentBackend: Send + Sync {
    /// File extension of the produced format, without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, document: &Document) -> Result<Vec<u8>, ExportError>;
}

/// Derives a file stem from a recipe title.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`, and the result is
/// lower-cased.
///
/// # Examples
///
/// ```
/// use recipe_browser::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("Chef's Special: V2!"), "chef_s_special__v2_");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    static INVALID: OnceLock<Regex> = OnceLock::new();
    let invalid = INVALID.get_or_init(|| Regex::new(r"[^A-Za-z0-9]").expect("valid pattern"));
    invalid.replace_all(name, "_").to_lowercase()
}

/// Exports recipes to files in a directory.
pub struct Exporter {
    layout: PageLayout,
    backend: Option<Box<dyn DocumentBackend>>,
}

impl Default for Exporter {
    fn default() -> Self {
        Exporter::new(PageLayout::default(), Some(Box::new(PdfBackend)))
    }
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("layout", &self.layout)
            .field("backend", &self.backend.as_ref().map(|b| b.extension()))
            .finish()
    }
}

impl Exporter {
    pub fn new(layout: PageLayout, backend: Option<Box<dyn DocumentBackend>>) -> Self {
        Exporter { layout, backend }
    }

    /// An exporter that has no document backend.
    pub fn unavailable() -> Self {
        Exporter::new(PageLayout::default(), None)
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn layout(&self) -> PageLayout {
        self.layout
    }

    /// File name the export of `recipe` is written to.
    pub fn file_name(&self, recipe: &Recipe) -> Option<String> {
        self.backend
            .as_ref()
            .map(|backend| format!("{}.{}", sanitize_file_name(&recipe.title), backend.extension()))
    }

    /// Renders `recipe` to bytes without writing anything.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::BackendUnavailable` when no backend is set, or
    /// `ExportError::RenderError` when the margins leave no room for text.
    pub fn render(&self, recipe: &Recipe) -> Result<Vec<u8>, ExportError> {
        let backend = self.backend.as_ref().ok_or(ExportError::BackendUnavailable)?;
        if self.layout.content_width() <= 0.0 || self.layout.bottom_limit() <= self.layout.margin_mm {
            return Err(ExportError::RenderError(format!(
                "{}x{}mm page has no room inside {}mm margins",
                self.layout.width_mm, self.layout.height_mm, self.layout.margin_mm
            )));
        }
        let document = layout_recipe(recipe, self.layout);
        tracing::debug!(
            title = %recipe.title,
            pages = document.pages.len(),
            "laid out recipe document"
        );
        backend.render(&document)
    }

    /// Writes the document for `recipe` into `out_dir` and returns its path.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::BackendUnavailable` when no backend is set, in
    /// which case nothing is written, or `ExportError::IoError` if the file
    /// cannot be written.
    pub fn export_to_dir<P: AsRef<Utf8Path>>(
        &self,
        recipe: &Recipe,
        out_dir: P,
    ) -> Result<Utf8PathBuf, ExportError> {
        let bytes = self.render(recipe)?;
        let file_name = self.file_name(recipe).ok_or(ExportError::BackendUnavailable)?;
        let path = out_dir.as_ref().join(file_name);
        write_document(&path, &bytes)?;
        Ok(path)
    }
}

/// Writes exported bytes to `path`.
pub(crate) fn write_document(path: &Utf8Path, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, bytes).map_err(|source| ExportError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path, "exported recipe");
    Ok(())
}
