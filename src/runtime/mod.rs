//! Runtime module - winit/wry platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `dialog` - Native message dialogs
//! - `webview` - The webview showing the rendered document

pub mod app;
pub mod dialog;
pub mod webview;

pub use app::App;

/// Events sent to the event loop from outside winit
#[derive(Debug, Clone)]
pub enum UserEvent {
    /// A message posted by the page via `window.ipc.postMessage`
    Ipc(String),
}
