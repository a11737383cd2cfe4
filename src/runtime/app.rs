use std::rc::Rc;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowAttributes};

use mdview::cli::StartupConfig;
use mdview::commands::{Cmd, DialogLevel};
use mdview::document::{load_document, APP_TITLE};
use mdview::input::{msg_from_ipc, msg_from_key, msg_from_wheel};
use mdview::markdown::HtmlTemplate;
use mdview::messages::Msg;
use mdview::model::ViewerModel;
use mdview::update::update;
use mdview::window_state::{ScreenBounds, WindowGeometry, WindowSnapshot};

use super::dialog;
use super::webview::DocumentView;
use super::UserEvent;

pub struct App {
    model: ViewerModel,
    startup: StartupConfig,
    template: HtmlTemplate,
    proxy: EventLoopProxy<UserEvent>,
    window: Option<Rc<Window>>,
    view: Option<DocumentView>,
    modifiers: ModifiersState,
    exit_code: i32,
}

impl App {
    pub fn new(
        startup: StartupConfig,
        template: HtmlTemplate,
        geometry: WindowGeometry,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Self {
        Self {
            model: ViewerModel::new(geometry),
            startup,
            template,
            proxy,
            window: None,
            view: None,
            modifiers: ModifiersState::empty(),
            exit_code: 0,
        }
    }

    /// Process exit status once the event loop has returned
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Run a message through the update loop and perform the resulting commands
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            for cmd in cmd.into_vec() {
                self.process_cmd(event_loop, cmd);
            }
        }
    }

    fn process_cmd(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        match cmd {
            Cmd::ShowDocument { title, html } => self.show_document(event_loop, &title, &html),
            Cmd::ApplyZoom(factor) => {
                if let Some(view) = &self.view {
                    if let Err(e) = view.set_zoom(factor) {
                        tracing::warn!("Failed to apply zoom {:.1}: {}", factor, e);
                    }
                }
            }
            Cmd::Print => {
                let result = match &self.view {
                    Some(view) => view.print().map_err(|e| e.to_string()),
                    None => Err("no document is loaded".to_string()),
                };
                if let Err(reason) = result {
                    self.dispatch(event_loop, Msg::PrintFailed(reason));
                }
            }
            Cmd::ShowDialog {
                level,
                title,
                message,
            } => dialog::show(level, &title, &message),
            Cmd::SaveGeometry(geometry) => {
                if let Err(e) = geometry.save() {
                    tracing::warn!("Failed to save window state: {}", e);
                }
            }
            Cmd::Exit { code } => {
                self.exit_code = code;
                // Drop the webview before its parent window
                self.view = None;
                event_loop.exit();
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(event_loop, cmd);
                }
            }
        }
    }

    fn show_document(&mut self, event_loop: &ActiveEventLoop, title: &str, html: &str) {
        let Some(window) = self.window.clone() else {
            return;
        };
        window.set_title(title);

        let result = if let Some(view) = &self.view {
            view.load_html(html)
        } else {
            match DocumentView::new(&window, html, self.proxy.clone()) {
                Ok(view) => {
                    self.view = Some(view);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        };

        if let Err(e) = result {
            tracing::error!("Failed to create webview: {}", e);
            self.process_cmd(
                event_loop,
                Cmd::Batch(vec![
                    Cmd::ShowDialog {
                        level: DialogLevel::Error,
                        title: "Error".to_string(),
                        message: format!("Error loading file: {}", e),
                    },
                    Cmd::Exit { code: 1 },
                ]),
            );
            return;
        }

        window.set_visible(true);
    }

    /// Window attributes restored from the saved geometry
    fn window_attributes(&self, event_loop: &ActiveEventLoop) -> WindowAttributes {
        let geometry = &self.model.geometry;
        let (width, height) = geometry.size();

        let mut attributes = Window::default_attributes()
            .with_title(APP_TITLE)
            .with_inner_size(LogicalSize::new(width, height))
            .with_maximized(geometry.maximized)
            .with_visible(false);

        let screens = ScreenBounds::union(event_loop.available_monitors().map(|monitor| {
            let scale = monitor.scale_factor();
            let position = monitor.position();
            let size = monitor.size();
            (
                position.x as f64 / scale,
                position.y as f64 / scale,
                size.width as f64 / scale,
                size.height as f64 / scale,
            )
        }));

        if let Some(screens) = screens.filter(|s| geometry.is_on_screen(s)) {
            tracing::debug!("Restoring window at ({}, {})", geometry.x, geometry.y);
            attributes = attributes.with_position(LogicalPosition::new(geometry.x, geometry.y));
        } else if let Some(primary) = event_loop.primary_monitor() {
            let scale = primary.scale_factor();
            let position = primary.position();
            let size = primary.size();
            let bounds = ScreenBounds {
                x: position.x as f64 / scale,
                y: position.y as f64 / scale,
                width: size.width as f64 / scale,
                height: size.height as f64 / scale,
            };
            let (x, y) = geometry.centered_in(&bounds);
            attributes = attributes.with_position(LogicalPosition::new(x, y));
        }

        attributes
    }

    fn snapshot(window: &Window) -> WindowSnapshot {
        let scale = window.scale_factor();
        let position = window.outer_position().ok().map(|p| {
            let p = p.to_logical::<f64>(scale);
            (p.x, p.y)
        });
        let size = window.inner_size().to_logical::<f64>(scale);

        WindowSnapshot {
            position,
            size: (size.width, size.height),
            maximized: window.is_maximized(),
            minimized: window.is_minimized().unwrap_or(false),
        }
    }
}

impl ApplicationHandler<UserEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(self.window_attributes(event_loop)) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                dialog::show(
                    DialogLevel::Error,
                    "Error",
                    &format!("Could not create window: {}", e),
                );
                self.exit_code = 1;
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window);

        let path = self.startup.file.clone();
        let result = load_document(&path, &self.template);
        self.dispatch(event_loop, Msg::DocumentLoaded { path, result });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };
        if window.id() != window_id {
            return;
        }

        let msg = match event {
            WindowEvent::CloseRequested => Some(Msg::CloseRequested(Self::snapshot(&window))),
            WindowEvent::Resized(size) => {
                if let Some(view) = &self.view {
                    view.resize(size, window.scale_factor());
                }
                None
            }
            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                msg_from_key(&event.logical_key, self.modifiers)
            }
            WindowEvent::MouseWheel { delta, .. } => msg_from_wheel(&delta, self.modifiers),
            _ => None,
        };

        if let Some(msg) = msg {
            self.dispatch(event_loop, msg);
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Ipc(body) => {
                if let Some(msg) = msg_from_ipc(&body) {
                    self.dispatch(event_loop, msg);
                }
            }
        }
    }
}
