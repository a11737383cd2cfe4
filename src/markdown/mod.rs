//! Markdown rendering
//!
//! Converts Markdown to HTML, resolves relative image paths and wraps the
//! result in an HTML document template.

mod images;
mod renderer;
mod template;
mod theme;

pub use images::{file_url, resolve_image_url, rewrite_relative_image_paths};
pub use renderer::{markdown_to_html, render_document};
pub use template::{HtmlTemplate, TemplateSource, CONTENT_PLACEHOLDER};
pub use theme::PreviewTheme;
