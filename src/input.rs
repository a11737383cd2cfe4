//! Input mapping
//!
//! Shortcuts reach the viewer two ways: as winit events while the window
//! itself has focus, and as IPC strings posted by [`INPUT_BRIDGE_JS`] while
//! the webview has focus. Both are translated into [`Msg`]s here.

use winit::event::MouseScrollDelta;
use winit::keyboard::{Key, ModifiersState};

use crate::messages::{Msg, ZoomMsg};

/// Injected into every page so shortcuts work while the webview has focus
pub const INPUT_BRIDGE_JS: &str = r#"
(function () {
    function send(msg) {
        if (window.ipc && window.ipc.postMessage) {
            window.ipc.postMessage(msg);
        }
    }

    window.addEventListener('wheel', function (e) {
        if (!e.ctrlKey) return;
        e.preventDefault();
        send(e.deltaY < 0 ? 'zoom-in' : 'zoom-out');
    }, { passive: false });

    window.addEventListener('keydown', function (e) {
        if (!(e.ctrlKey || e.metaKey)) return;
        var msg = null;
        switch (e.key) {
            case 'p': case 'P': msg = 'print'; break;
            case '=': case '+': msg = 'zoom-in'; break;
            case '-': case '_': msg = 'zoom-out'; break;
            case '0': msg = 'zoom-reset'; break;
        }
        if (msg) {
            e.preventDefault();
            send(msg);
        }
    });
})();
"#;

/// Translate an IPC string from the webview
pub fn msg_from_ipc(body: &str) -> Option<Msg> {
    match body.trim() {
        "zoom-in" => Some(Msg::Zoom(ZoomMsg::In)),
        "zoom-out" => Some(Msg::Zoom(ZoomMsg::Out)),
        "zoom-reset" => Some(Msg::Zoom(ZoomMsg::Reset)),
        "print" => Some(Msg::Print),
        other => {
            tracing::debug!("Ignoring unknown IPC message: {:?}", other);
            None
        }
    }
}

/// Links that leave the document and belong in the system browser
///
/// Anchors, `about:` and `file:` navigation stay inside the webview.
pub fn is_external_link(url: &str) -> bool {
    let url = url.trim_start();
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Ctrl on Windows/Linux, Cmd on macOS
fn primary_modifier(mods: ModifiersState) -> bool {
    mods.control_key() || mods.super_key()
}

/// Translate a key press with the current modifiers
pub fn msg_from_key(key: &Key, mods: ModifiersState) -> Option<Msg> {
    if !primary_modifier(mods) {
        return None;
    }

    let Key::Character(ch) = key else {
        return None;
    };

    match ch.as_str() {
        "p" | "P" => Some(Msg::Print),
        "=" | "+" => Some(Msg::Zoom(ZoomMsg::In)),
        "-" | "_" => Some(Msg::Zoom(ZoomMsg::Out)),
        "0" => Some(Msg::Zoom(ZoomMsg::Reset)),
        _ => None,
    }
}

/// Ctrl+wheel zooms; plain wheel is left to the webview for scrolling
pub fn msg_from_wheel(delta: &MouseScrollDelta, mods: ModifiersState) -> Option<Msg> {
    if !mods.control_key() {
        return None;
    }

    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => *y as f64,
        MouseScrollDelta::PixelDelta(pos) => pos.y,
    };

    if dy > 0.0 {
        Some(Msg::Zoom(ZoomMsg::In))
    } else if dy < 0.0 {
        Some(Msg::Zoom(ZoomMsg::Out))
    } else {
        None
    }
}
