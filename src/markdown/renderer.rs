//! Markdown to HTML renderer using pulldown-cmark

use std::path::Path;

use pulldown_cmark::{html, Options, Parser};

use super::{rewrite_relative_image_paths, HtmlTemplate};

/// Extensions enabled on top of CommonMark
fn advanced_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_SMART_PUNCTUATION
        | Options::ENABLE_HEADING_ATTRIBUTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
}

/// Convert markdown to an HTML fragment (no document shell)
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, advanced_options());

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Convert markdown into a complete HTML document ready for the webview
///
/// Relative image references are resolved against `base_dir` because the
/// webview loads the document from memory, not from the file's directory.
pub fn render_document(markdown: &str, base_dir: &Path, template: &HtmlTemplate) -> String {
    let body = markdown_to_html(markdown);
    let body = rewrite_relative_image_paths(&body, base_dir);
    template.render(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::PreviewTheme;

    #[test]
    fn test_markdown_to_html_basic() {
        let html = markdown_to_html("# Hello\n\nWorld");

        assert!(html.contains("<h1>"));
        assert!(html.contains("Hello"));
        assert!(html.contains("<p>"));
        assert!(html.contains("World"));
    }

    #[test]
    fn test_markdown_to_html_code_block() {
        let html = markdown_to_html("```rust\nfn main() {}\n```");

        assert!(html.contains("<pre>"));
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("fn main()"));
    }

    #[test]
    fn test_markdown_to_html_links() {
        let html = markdown_to_html("[Click here](https://example.com)");

        assert!(html.contains("href=\"https://example.com\""));
        assert!(html.contains("Click here"));
    }

    #[test]
    fn test_markdown_to_html_tables() {
        let html = markdown_to_html("| A | B |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
        assert!(html.contains("<th>"));
        assert!(html.contains("<td>"));
    }

    #[test]
    fn test_markdown_to_html_task_list() {
        let html = markdown_to_html("- [x] done\n- [ ] todo");

        assert!(html.contains("type=\"checkbox\""));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_markdown_to_html_strikethrough_and_footnote() {
        let html = markdown_to_html("~~gone~~ text[^1]\n\n[^1]: note");

        assert!(html.contains("<del>gone</del>"));
        assert!(html.contains("footnote-definition"));
    }

    #[test]
    fn test_metadata_block_is_not_rendered() {
        let html = markdown_to_html("---\ntitle: Hidden\n---\n\n# Shown");

        assert!(!html.contains("Hidden"));
        assert!(html.contains("Shown"));
    }

    #[test]
    fn test_render_document_fills_template() {
        let template = HtmlTemplate::builtin(&PreviewTheme::default());
        let html = render_document("# Title", Path::new("/nonexistent"), &template);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Title</h1>"));
        assert!(!html.contains(crate::markdown::CONTENT_PLACEHOLDER));
    }
}
