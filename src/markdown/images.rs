//! Relative image path rewriting
//!
//! The webview renders the document from an in-memory string, so it has no
//! base URL to resolve `<img src="pics/a.png">` against. This pass resolves
//! such references against the Markdown file's directory and turns them into
//! absolute `file:///` URLs.

use std::path::Path;

use std::borrow::Cow;

use once_cell::sync::Lazy;
use percent_encoding::percent_decode_str;
use regex::{Captures, Regex};

/// `<img ... src="VALUE" ...>`, single or double quoted, case-insensitive.
/// `src` must follow whitespace so `data-src` is not mistaken for it.
static RE_IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<img[^>]*?\ssrc\s*=\s*(?:"([^"]+)"|'([^']+)')[^>]*>"#)
        .expect("image tag pattern is valid")
});

/// Prefixes that are already absolute or not file-relative
const ABSOLUTE_PREFIXES: &[&str] = &["http://", "https://", "file://", "data:", "about:", "/"];

/// Rewrite relative `<img>` sources in `html` to `file:///` URLs under `base_dir`
///
/// Tags whose source is absolute, or whose resolved file does not exist, are
/// left byte-for-byte unchanged. Only the attribute value is replaced, so the
/// same text appearing elsewhere in the tag (an `alt`, say) is untouched.
pub fn rewrite_relative_image_paths(html: &str, base_dir: &Path) -> String {
    RE_IMG_SRC
        .replace_all(html, |caps: &Captures| rewrite_tag(caps, base_dir))
        .into_owned()
}

fn rewrite_tag(caps: &Captures, base_dir: &Path) -> String {
    let whole = &caps[0];

    let Some(src) = caps.get(1).or_else(|| caps.get(2)) else {
        return whole.to_string();
    };

    let Some(url) = resolve_image_url(src.as_str(), base_dir) else {
        return whole.to_string();
    };

    // Offsets of the value relative to the start of the tag
    let tag_start = caps.get(0).map_or(0, |m| m.start());
    let start = src.start() - tag_start;
    let end = src.end() - tag_start;

    let mut rewritten = String::with_capacity(whole.len() + url.len());
    rewritten.push_str(&whole[..start]);
    rewritten.push_str(&escape_attribute(&url));
    rewritten.push_str(&whole[end..]);
    rewritten
}

/// Resolve a single `src` value to a `file:///` URL
///
/// Returns `None` when the value is absolute or no file exists at the
/// resolved location. The value is tried as written first, then with HTML
/// entities and `%XX` escapes decoded, since the Markdown converter escapes
/// `&`, spaces and non-ASCII characters in image paths.
pub fn resolve_image_url(src: &str, base_dir: &Path) -> Option<String> {
    if is_absolute_reference(src) {
        return None;
    }

    if let Some(url) = existing_file_url(&base_dir.join(src)) {
        return Some(url);
    }

    let decoded = decode_src(src)?;
    if decoded == src || is_absolute_reference(&decoded) {
        return None;
    }
    existing_file_url(&base_dir.join(&decoded))
}

fn existing_file_url(candidate: &Path) -> Option<String> {
    match candidate.try_exists() {
        Ok(true) if candidate.is_file() => Some(file_url(candidate)),
        Ok(_) => {
            tracing::debug!("Image not found, leaving as-is: {}", candidate.display());
            None
        }
        Err(e) => {
            tracing::debug!("Could not check image {}: {}", candidate.display(), e);
            None
        }
    }
}

/// Undo attribute escaping and percent-encoding of a `src` value
///
/// `None` when the percent escapes do not decode to UTF-8.
fn decode_src(src: &str) -> Option<String> {
    let unescaped = unescape_entities(src);
    let decoded = percent_decode_str(&unescaped).decode_utf8().ok()?;
    Some(decoded.into_owned())
}

/// Entities the HTML writer emits inside attribute values
fn unescape_entities(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&#x27;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}

/// Escape a URL for use inside a quoted attribute value
fn escape_attribute(url: &str) -> Cow<'_, str> {
    if !url.contains(['&', '"', '\'', '<', '>']) {
        return Cow::Borrowed(url);
    }
    Cow::Owned(
        url.replace('&', "&amp;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    )
}

fn is_absolute_reference(src: &str) -> bool {
    ABSOLUTE_PREFIXES
        .iter()
        .any(|prefix| src.starts_with(prefix))
}

/// `file:///` URL for a local path, with forward slashes
///
/// `/docs/a.png` becomes `file:///docs/a.png` and `C:\docs\a.png` becomes
/// `file:///C:/docs/a.png`.
pub fn file_url(path: &Path) -> String {
    let normalized = path.to_string_lossy().replace('\\', "/");
    format!("file:///{}", normalized.trim_start_matches('/'))
}
