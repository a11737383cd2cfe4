//! Viewer configuration persistence
//!
//! Stores user preferences in `~/.config/mdview/config.yaml`

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Viewer configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Preview theme name ("light" or "dark")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Custom HTML template; must contain `<!-- CONTENT_PLACEHOLDER -->`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

fn default_theme() -> String {
    "light".to_string()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            template: None,
        }
    }
}

impl ViewerConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        tracing::info!("Loaded config (theme: {})", config.theme);
        Ok(config)
    }
}
