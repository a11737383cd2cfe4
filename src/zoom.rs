//! Page zoom level

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;

/// Zoom factor applied to the webview, clamped to `[MIN_ZOOM, MAX_ZOOM]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLevel(f64);

impl ZoomLevel {
    pub fn factor(self) -> f64 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Self::clamped(self.0 + ZOOM_STEP)
    }

    pub fn zoom_out(self) -> Self {
        Self::clamped(self.0 - ZOOM_STEP)
    }

    pub fn reset() -> Self {
        Self(1.0)
    }

    /// Round to one decimal so repeated steps don't accumulate float error
    fn clamped(value: f64) -> Self {
        let rounded = (value * 10.0).round() / 10.0;
        Self(rounded.clamp(MIN_ZOOM, MAX_ZOOM))
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::reset()
    }
}
