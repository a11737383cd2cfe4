//! Webview hosting the rendered document
//!
//! A wry WebView fills the winit window. Shortcuts pressed inside the page
//! come back as IPC strings forwarded to the event loop.

use std::rc::Rc;

use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use wry::{Rect, WebView, WebViewBuilder};

use mdview::input::{is_external_link, INPUT_BRIDGE_JS};

use super::UserEvent;

/// The webview showing the current document
pub struct DocumentView {
    webview: WebView,
}

impl DocumentView {
    /// Create a webview covering the whole window
    pub fn new(
        window: &Rc<Window>,
        html: &str,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Result<Self, wry::Error> {
        let bounds = full_window_rect(window.inner_size(), window.scale_factor());

        let webview = WebViewBuilder::new()
            .with_html(html)
            .with_bounds(bounds)
            .with_transparent(false)
            .with_initialization_script(INPUT_BRIDGE_JS)
            .with_ipc_handler(move |request| {
                let _ = proxy.send_event(UserEvent::Ipc(request.body().clone()));
            })
            .with_navigation_handler(|url| {
                if !is_external_link(&url) {
                    return true;
                }
                if let Err(e) = open::that(&url) {
                    tracing::warn!("Failed to open {}: {}", url, e);
                }
                false
            })
            .build_as_child(window)?;

        Ok(Self { webview })
    }

    /// Replace the displayed document
    pub fn load_html(&self, html: &str) -> Result<(), wry::Error> {
        self.webview.load_html(html)
    }

    /// Keep the webview matched to the window's client area
    pub fn resize(&self, size: PhysicalSize<u32>, scale_factor: f64) {
        if let Err(e) = self
            .webview
            .set_bounds(full_window_rect(size, scale_factor))
        {
            tracing::warn!("Failed to resize webview: {}", e);
        }
    }

    pub fn set_zoom(&self, factor: f64) -> Result<(), wry::Error> {
        self.webview.zoom(factor)
    }

    pub fn print(&self) -> Result<(), wry::Error> {
        self.webview.print()
    }
}

/// Window client area in logical points, as wry expects
fn full_window_rect(size: PhysicalSize<u32>, scale_factor: f64) -> Rect {
    use wry::dpi::{LogicalPosition, LogicalSize};

    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(
            size.width as f64 / scale_factor,
            size.height as f64 / scale_factor,
        )
        .into(),
    }
}
