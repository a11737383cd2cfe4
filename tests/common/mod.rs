//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use mdview::document::RenderedDocument;
use mdview::messages::Msg;
use mdview::model::ViewerModel;
use mdview::window_state::WindowGeometry;
use tempfile::TempDir;

/// Create `relative` (and its parent directories) under `dir`
pub fn write_file(dir: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

/// A temp directory holding `pics/a.png` and `logo.svg`
pub fn docs_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "pics/a.png", b"\x89PNG");
    write_file(dir.path(), "logo.svg", b"<svg/>");
    dir
}

/// Expected `file:///` URL for a path, computed independently of the crate
pub fn expected_url(path: &Path) -> String {
    let s = path.to_string_lossy().replace('\\', "/");
    format!("file:///{}", s.trim_start_matches('/'))
}

/// A model that has already shown a small document
pub fn loaded_model() -> ViewerModel {
    let mut model = ViewerModel::new(WindowGeometry::default());
    let document = RenderedDocument {
        path: PathBuf::from("/docs/readme.md"),
        title: "Markdown Viewer - readme.md".to_string(),
        html: "<p>hi</p>".to_string(),
    };
    mdview::update::update(
        &mut model,
        Msg::DocumentLoaded {
            path: document.path.clone(),
            result: Ok(document),
        },
    );
    model
}
