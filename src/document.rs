//! Loading a Markdown file into a renderable HTML document

use std::path::{Path, PathBuf};

use crate::markdown::{render_document, HtmlTemplate};
use crate::util::{filename_for_display, is_likely_binary, validate_file_for_opening, FileOpenError};

/// Application name shown in the window title
pub const APP_TITLE: &str = "Markdown Viewer";

/// A Markdown file rendered to a complete HTML document
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    /// Absolute path of the source file
    pub path: PathBuf,
    pub title: String,
    pub html: String,
}

/// Read, convert and template the Markdown file at `path`
pub fn load_document(path: &Path, template: &HtmlTemplate) -> Result<RenderedDocument, FileOpenError> {
    let path = std::path::absolute(path)?;
    tracing::debug!("Loading {}", path.display());

    validate_file_for_opening(&path)?;
    if is_likely_binary(&path) {
        return Err(FileOpenError::BinaryFile);
    }

    let markdown = std::fs::read_to_string(&path)?;

    // Relative image paths resolve against the file's own directory
    let base_dir = path.parent().unwrap_or(Path::new("/"));
    let html = render_document(&markdown, base_dir, template);

    tracing::debug!(
        "Rendered {} ({} bytes of markdown, {} bytes of HTML)",
        path.display(),
        markdown.len(),
        html.len()
    );

    Ok(RenderedDocument {
        title: window_title(&path),
        html,
        path,
    })
}

/// `Markdown Viewer - readme.md`
pub fn window_title(path: &Path) -> String {
    format!("{} - {}", APP_TITLE, filename_for_display(path))
}
