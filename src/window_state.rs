//! Persistent window geometry
//!
//! Position, size and maximized state are saved to `~/.config/mdview/window.json`
//! on close and restored on the next launch.

use serde::{Deserialize, Serialize};

/// Smallest size restored from disk (logical pixels)
pub const MIN_WIDTH: f64 = 200.0;
pub const MIN_HEIGHT: f64 = 150.0;

/// Window geometry in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub maximized: bool,
}

fn default_width() -> f64 {
    900.0
}

fn default_height() -> f64 {
    700.0
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: default_width(),
            height: default_height(),
            maximized: false,
        }
    }
}

/// The window's state at the moment it is closed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSnapshot {
    /// Outer position, if the platform reports one
    pub position: Option<(f64, f64)>,
    pub size: (f64, f64),
    pub maximized: bool,
    pub minimized: bool,
}

/// Union of all monitor areas in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenBounds {
    /// Smallest rectangle containing every `(x, y, width, height)` area
    pub fn union(areas: impl IntoIterator<Item = (f64, f64, f64, f64)>) -> Option<Self> {
        areas.into_iter().fold(None, |acc, (x, y, w, h)| {
            Some(match acc {
                None => Self {
                    x,
                    y,
                    width: w,
                    height: h,
                },
                Some(b) => {
                    let left = b.x.min(x);
                    let top = b.y.min(y);
                    let right = (b.x + b.width).max(x + w);
                    let bottom = (b.y + b.height).max(y + h);
                    Self {
                        x: left,
                        y: top,
                        width: right - left,
                        height: bottom - top,
                    }
                }
            })
        })
    }
}

impl WindowGeometry {
    /// Load geometry from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::window_state_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::from_json(&contents),
            Err(_) => {
                tracing::debug!("No saved window state at {}", path.display());
                Self::default()
            }
        }
    }

    /// Parse saved geometry, falling back to defaults on corrupt input
    pub fn from_json(contents: &str) -> Self {
        serde_json::from_str(contents).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt window state: {}", e);
            Self::default()
        })
    }

    /// Save geometry to disk
    pub fn save(&self) -> std::io::Result<()> {
        let Some(path) = crate::config_paths::window_state_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config directory available",
            ));
        };
        crate::config_paths::ensure_config_dir().map_err(std::io::Error::other)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        tracing::info!("Saved window state to {}", path.display());
        Ok(())
    }

    /// Record the window's state at close
    ///
    /// Position and size are only taken from a normal (not maximized, not
    /// minimized) window so the restored size is the user's chosen one.
    pub fn record(&mut self, snapshot: WindowSnapshot) {
        if !snapshot.maximized && !snapshot.minimized {
            if let Some((x, y)) = snapshot.position {
                self.x = x;
                self.y = y;
            }
            self.width = snapshot.size.0;
            self.height = snapshot.size.1;
        }
        self.maximized = snapshot.maximized;
    }

    /// Size to restore, never smaller than the minimum
    pub fn size(&self) -> (f64, f64) {
        (self.width.max(MIN_WIDTH), self.height.max(MIN_HEIGHT))
    }

    /// Whether the saved position is usable on the current screens
    ///
    /// `(0, 0)` is treated as "never saved". The window's top-left corner must
    /// sit within the screens with enough room left to grab it.
    pub fn is_on_screen(&self, bounds: &ScreenBounds) -> bool {
        if self.x == 0.0 && self.y == 0.0 {
            return false;
        }

        self.x > bounds.x - 50.0
            && self.y > bounds.y - 50.0
            && self.x < bounds.x + bounds.width - 100.0
            && self.y < bounds.y + bounds.height - 100.0
    }

    /// Top-left position that centers the window within `bounds`
    pub fn centered_in(&self, bounds: &ScreenBounds) -> (f64, f64) {
        let (width, height) = self.size();
        (
            bounds.x + ((bounds.width - width) / 2.0).max(0.0),
            bounds.y + ((bounds.height - height) / 2.0).max(0.0),
        )
    }
}
