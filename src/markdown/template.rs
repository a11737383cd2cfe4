//! HTML document template
//!
//! The converted Markdown body is substituted into a template at
//! [`CONTENT_PLACEHOLDER`]. Templates are looked up in order:
//!
//! 1. the `template` path from `config.yaml`
//! 2. `~/.config/mdview/template.html`
//! 3. the built-in template, styled from the selected [`PreviewTheme`]

use std::path::{Path, PathBuf};

use super::PreviewTheme;
use crate::config::ViewerConfig;

/// Marker replaced with the rendered Markdown body
pub const CONTENT_PLACEHOLDER: &str = "<!-- CONTENT_PLACEHOLDER -->";

/// Where the active template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Builtin,
}

#[derive(Debug, Clone)]
pub struct HtmlTemplate {
    source: TemplateSource,
    html: String,
}

impl HtmlTemplate {
    /// Resolve the template for the given configuration
    pub fn load(config: &ViewerConfig) -> Self {
        let theme = PreviewTheme::by_name(&config.theme);
        let candidates = config
            .template
            .iter()
            .cloned()
            .chain(crate::config_paths::template_file().filter(|p| p.exists()));

        Self::first_usable(candidates).unwrap_or_else(|| Self::builtin(&theme))
    }

    /// First candidate that reads successfully and contains the placeholder
    pub fn first_usable(candidates: impl IntoIterator<Item = PathBuf>) -> Option<Self> {
        candidates
            .into_iter()
            .find_map(|path| match Self::from_file(&path) {
                Ok(template) => Some(template),
                Err(e) => {
                    tracing::warn!("{}, falling back", e);
                    None
                }
            })
    }

    /// Read a template from disk
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let html = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read template {}: {}", path.display(), e))?;

        if !html.contains(CONTENT_PLACEHOLDER) {
            return Err(format!(
                "Template {} has no {} marker",
                path.display(),
                CONTENT_PLACEHOLDER
            ));
        }

        tracing::info!("Using HTML template from {}", path.display());
        Ok(Self {
            source: TemplateSource::File(path.to_path_buf()),
            html,
        })
    }

    /// The built-in template for a theme
    pub fn builtin(theme: &PreviewTheme) -> Self {
        let html = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/{highlight}.min.css">
    <style>{css}</style>
</head>
<body>
    <div id="content">{placeholder}</div>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"></script>
    <script>if (typeof hljs !== 'undefined') {{ hljs.highlightAll(); }}</script>
</body>
</html>"#,
            highlight = theme.highlight_style,
            css = generate_css(theme),
            placeholder = CONTENT_PLACEHOLDER,
        );

        Self {
            source: TemplateSource::Builtin,
            html,
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Substitute `body` into the template
    pub fn render(&self, body: &str) -> String {
        self.html.replacen(CONTENT_PLACEHOLDER, body, 1)
    }
}

/// Generate CSS from theme colors
fn generate_css(theme: &PreviewTheme) -> String {
    format!(
        r#"
* {{
    box-sizing: border-box;
}}

body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 15px;
    line-height: 1.6;
    color: {text};
    background: {background};
    padding: 24px;
    max-width: 900px;
    margin: 0 auto;
}}

h1, h2, h3, h4, h5, h6 {{
    color: {heading};
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}}

h1, h2 {{
    border-bottom: 1px solid {border};
    padding-bottom: 0.3em;
}}

h1 {{ font-size: 2em; }}
h2 {{ font-size: 1.5em; }}
h3 {{ font-size: 1.25em; }}
h6 {{ color: {muted}; }}

p {{
    margin-top: 0;
    margin-bottom: 16px;
}}

code {{
    background: {code_background};
    padding: 0.2em 0.4em;
    border-radius: 3px;
    font-family: "SF Mono", "Fira Code", Consolas, "Liberation Mono", Menlo, Courier, monospace;
    font-size: 0.9em;
}}

pre {{
    background: {code_background};
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
}}

pre code {{
    background: none;
    padding: 0;
}}

blockquote {{
    border-left: 4px solid {accent};
    margin: 0 0 16px 0;
    padding: 0 16px;
    color: {muted};
}}

a {{
    color: {link};
    text-decoration: none;
}}

a:hover {{
    text-decoration: underline;
}}

table {{
    border-collapse: collapse;
    margin-bottom: 16px;
    overflow: auto;
}}

th, td {{
    padding: 6px 13px;
    border: 1px solid {border};
}}

tr:nth-child(2n) {{
    background: {code_background};
}}

img {{
    max-width: 100%;
}}

hr {{
    height: 0.25em;
    margin: 24px 0;
    background-color: {border};
    border: 0;
}}

li > input[type="checkbox"] {{
    margin-right: 0.5em;
}}

.footnote-definition {{
    font-size: 0.9em;
    color: {muted};
}}

@media print {{
    body {{
        max-width: none;
        background: #ffffff;
        color: #000000;
    }}
}}
"#,
        text = theme.text,
        background = theme.background,
        heading = theme.heading,
        link = theme.link,
        code_background = theme.code_background,
        border = theme.border,
        accent = theme.accent,
        muted = theme.muted,
    )
}
