//! Commands returned by update functions
//!
//! Commands describe side effects for the runtime to perform: showing the
//! document, driving the webview, dialogs and persistence.

use crate::window_state::WindowGeometry;

/// Severity of a user-facing dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Error,
}

/// Commands that can be returned from update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Load `html` into the webview and set the window title
    ShowDocument { title: String, html: String },
    /// Set the webview page zoom
    ApplyZoom(f64),
    /// Invoke the webview's print action
    Print,
    /// Show a modal message dialog
    ShowDialog {
        level: DialogLevel,
        title: String,
        message: String,
    },
    /// Persist window geometry
    SaveGeometry(WindowGeometry),
    /// Close the window and leave the event loop with this exit status
    Exit { code: i32 },
    /// Run several commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Flatten nested batches into the order they should run
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }

    pub fn is_exit(&self) -> bool {
        match self {
            Cmd::Exit { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_exit),
            _ => false,
        }
    }
}
