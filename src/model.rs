//! Viewer state

use crate::document::{RenderedDocument, APP_TITLE};
use crate::window_state::WindowGeometry;
use crate::zoom::ZoomLevel;

/// The complete viewer state
#[derive(Debug, Clone, Default)]
pub struct ViewerModel {
    /// Loaded document, `None` until the startup load succeeds
    pub document: Option<RenderedDocument>,
    pub zoom: ZoomLevel,
    pub geometry: WindowGeometry,
}

impl ViewerModel {
    pub fn new(geometry: WindowGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    pub fn title(&self) -> &str {
        self.document
            .as_ref()
            .map(|doc| doc.title.as_str())
            .unwrap_or(APP_TITLE)
    }
}
