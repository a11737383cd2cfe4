//! Messages for the Elm-style update loop
//!
//! Every state change in the viewer goes through a [`Msg`] passed to
//! [`crate::update::update`].

use std::path::PathBuf;

use crate::document::RenderedDocument;
use crate::util::FileOpenError;
use crate::window_state::WindowSnapshot;

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Result of loading the startup document
    DocumentLoaded {
        path: PathBuf,
        result: Result<RenderedDocument, FileOpenError>,
    },
    Zoom(ZoomMsg),
    /// Print the current document
    Print,
    /// The webview's print action failed
    PrintFailed(String),
    /// The window is closing normally
    CloseRequested(WindowSnapshot),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMsg {
    In,
    Out,
    Reset,
}
