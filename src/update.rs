//! Update function - handles all state transitions

use crate::commands::{Cmd, DialogLevel};
use crate::messages::{Msg, ZoomMsg};
use crate::model::ViewerModel;

/// Main update function - dispatches to the matching handler
pub fn update(model: &mut ViewerModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::DocumentLoaded {
            result: Ok(document),
            ..
        } => {
            tracing::info!("Showing {}", document.path.display());
            let cmd = Cmd::ShowDocument {
                title: document.title.clone(),
                html: document.html.clone(),
            };
            model.document = Some(document);
            Some(cmd)
        }
        Msg::DocumentLoaded {
            path,
            result: Err(err),
        } => {
            tracing::error!("Failed to load {}: {}", path.display(), err);
            Some(Cmd::Batch(vec![
                Cmd::ShowDialog {
                    level: DialogLevel::Error,
                    title: "Error".to_string(),
                    message: err.user_message(&path),
                },
                Cmd::Exit { code: 1 },
            ]))
        }
        Msg::Zoom(zoom) => update_zoom(model, zoom),
        Msg::Print => model.document.as_ref().map(|_| Cmd::Print),
        Msg::PrintFailed(reason) => {
            tracing::warn!("Print failed: {}", reason);
            Some(Cmd::ShowDialog {
                level: DialogLevel::Error,
                title: "Print Error".to_string(),
                message: format!("Error printing: {}", reason),
            })
        }
        Msg::CloseRequested(snapshot) => {
            model.geometry.record(snapshot);
            Some(Cmd::Batch(vec![
                Cmd::SaveGeometry(model.geometry),
                Cmd::Exit { code: 0 },
            ]))
        }
    }
}

fn update_zoom(model: &mut ViewerModel, msg: ZoomMsg) -> Option<Cmd> {
    let next = match msg {
        ZoomMsg::In => model.zoom.zoom_in(),
        ZoomMsg::Out => model.zoom.zoom_out(),
        ZoomMsg::Reset => crate::zoom::ZoomLevel::reset(),
    };

    if next == model.zoom {
        return None;
    }

    tracing::debug!("Zoom {:.1} -> {:.1}", model.zoom.factor(), next.factor());
    model.zoom = next;
    Some(Cmd::ApplyZoom(next.factor()))
}
