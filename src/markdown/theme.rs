//! Preview theme - colors for the built-in HTML template

/// Theme colors for markdown preview (CSS-formatted)
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewTheme {
    pub background: String,
    pub text: String,
    pub heading: String,
    pub link: String,
    pub code_background: String,
    pub border: String,
    pub accent: String,
    pub muted: String,
    /// highlight.js stylesheet name matching the palette
    pub highlight_style: &'static str,
}

impl PreviewTheme {
    pub fn light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#24292f".to_string(),
            heading: "#1f2328".to_string(),
            link: "#0969da".to_string(),
            code_background: "#f6f8fa".to_string(),
            border: "#d0d7de".to_string(),
            accent: "#d0d7de".to_string(),
            muted: "#57606a".to_string(),
            highlight_style: "github",
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            text: "#d4d4d4".to_string(),
            heading: "#569cd6".to_string(),
            link: "#ce9178".to_string(),
            code_background: "#252526".to_string(),
            border: "#3c3c3c".to_string(),
            accent: "#dcdcaa".to_string(),
            muted: "#858585".to_string(),
            highlight_style: "github-dark",
        }
    }

    /// Look up a theme by config name, falling back to light for unknown names
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            other => {
                tracing::warn!("Unknown theme '{}', using light", other);
                Self::light()
            }
        }
    }
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self::light()
    }
}
