//! Update loop tests: document display, zoom, print and close

mod common;

use std::path::PathBuf;

use common::loaded_model;
use mdview::commands::{Cmd, DialogLevel};
use mdview::messages::{Msg, ZoomMsg};
use mdview::model::ViewerModel;
use mdview::update::update;
use mdview::util::FileOpenError;
use mdview::window_state::{WindowGeometry, WindowSnapshot};
use mdview::zoom::{MAX_ZOOM, MIN_ZOOM};

// ========================================================================
// Document loading
// ========================================================================

#[test]
fn test_loaded_document_is_shown() {
    let model = loaded_model();
    assert_eq!(model.title(), "Markdown Viewer - readme.md");
    assert!(model.document.is_some());
}

#[test]
fn test_show_document_command() {
    let mut model = ViewerModel::default();
    let document = mdview::document::RenderedDocument {
        path: PathBuf::from("/a.md"),
        title: "Markdown Viewer - a.md".to_string(),
        html: "<p>a</p>".to_string(),
    };

    let cmd = update(
        &mut model,
        Msg::DocumentLoaded {
            path: PathBuf::from("a.md"),
            result: Ok(document),
        },
    );

    assert_eq!(
        cmd,
        Some(Cmd::ShowDocument {
            title: "Markdown Viewer - a.md".to_string(),
            html: "<p>a</p>".to_string(),
        })
    );
}

#[test]
fn test_load_failure_shows_error_and_exits() {
    let mut model = ViewerModel::default();

    let cmd = update(
        &mut model,
        Msg::DocumentLoaded {
            path: PathBuf::from("missing.md"),
            result: Err(FileOpenError::NotFound),
        },
    )
    .unwrap();

    assert!(cmd.is_exit());
    assert_eq!(
        cmd.into_vec(),
        vec![
            Cmd::ShowDialog {
                level: DialogLevel::Error,
                title: "Error".to_string(),
                message: "File not found: missing.md".to_string(),
            },
            Cmd::Exit { code: 1 },
        ]
    );
    assert_eq!(model.title(), "Markdown Viewer");
}

// ========================================================================
// Zoom
// ========================================================================

#[test]
fn test_zoom_in_applies_factor() {
    let mut model = loaded_model();
    let cmd = update(&mut model, Msg::Zoom(ZoomMsg::In));
    assert_eq!(cmd, Some(Cmd::ApplyZoom(1.1)));
}

#[test]
fn test_zoom_out_then_reset() {
    let mut model = loaded_model();
    update(&mut model, Msg::Zoom(ZoomMsg::Out));
    update(&mut model, Msg::Zoom(ZoomMsg::Out));
    assert_eq!(model.zoom.factor(), 0.8);

    let cmd = update(&mut model, Msg::Zoom(ZoomMsg::Reset));
    assert_eq!(cmd, Some(Cmd::ApplyZoom(1.0)));
}

#[test]
fn test_zoom_at_limits_is_a_no_op() {
    let mut model = loaded_model();
    for _ in 0..50 {
        update(&mut model, Msg::Zoom(ZoomMsg::In));
    }
    assert_eq!(model.zoom.factor(), MAX_ZOOM);
    assert_eq!(update(&mut model, Msg::Zoom(ZoomMsg::In)), None);

    for _ in 0..50 {
        update(&mut model, Msg::Zoom(ZoomMsg::Out));
    }
    assert_eq!(model.zoom.factor(), MIN_ZOOM);
    assert_eq!(update(&mut model, Msg::Zoom(ZoomMsg::Out)), None);
}

#[test]
fn test_reset_at_default_is_a_no_op() {
    let mut model = loaded_model();
    assert_eq!(update(&mut model, Msg::Zoom(ZoomMsg::Reset)), None);
}

// ========================================================================
// Print
// ========================================================================

#[test]
fn test_print_requires_a_document() {
    let mut empty = ViewerModel::default();
    assert_eq!(update(&mut empty, Msg::Print), None);

    let mut model = loaded_model();
    assert_eq!(update(&mut model, Msg::Print), Some(Cmd::Print));
}

#[test]
fn test_print_failure_reports_without_exiting() {
    let mut model = loaded_model();

    let cmd = update(&mut model, Msg::PrintFailed("no printer".to_string())).unwrap();

    assert!(!cmd.is_exit());
    assert_eq!(
        cmd,
        Cmd::ShowDialog {
            level: DialogLevel::Error,
            title: "Print Error".to_string(),
            message: "Error printing: no printer".to_string(),
        }
    );
    assert!(model.document.is_some());
}

// ========================================================================
// Close
// ========================================================================

#[test]
fn test_close_saves_geometry_then_exits() {
    let mut model = loaded_model();

    let cmd = update(
        &mut model,
        Msg::CloseRequested(WindowSnapshot {
            position: Some((120.0, 80.0)),
            size: (1000.0, 800.0),
            maximized: false,
            minimized: false,
        }),
    )
    .unwrap();

    let expected = WindowGeometry {
        x: 120.0,
        y: 80.0,
        width: 1000.0,
        height: 800.0,
        maximized: false,
    };
    assert_eq!(
        cmd.into_vec(),
        vec![Cmd::SaveGeometry(expected), Cmd::Exit { code: 0 }]
    );
    assert_eq!(model.geometry, expected);
}

#[test]
fn test_close_while_minimized_keeps_previous_bounds() {
    let saved = WindowGeometry {
        x: 300.0,
        y: 200.0,
        width: 640.0,
        height: 480.0,
        maximized: false,
    };
    let mut model = ViewerModel::new(saved);

    update(
        &mut model,
        Msg::CloseRequested(WindowSnapshot {
            position: Some((-32000.0, -32000.0)),
            size: (0.0, 0.0),
            maximized: false,
            minimized: true,
        }),
    );

    assert_eq!(model.geometry, saved);
}
