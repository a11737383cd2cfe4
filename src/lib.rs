//! mdview - minimal Markdown viewer
//!
//! This crate provides the core types and logic for a desktop Markdown viewer
//! implementing the Elm Architecture pattern. The winit/wry runtime lives in
//! the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod input;
pub mod markdown;
pub mod messages;
pub mod model;
pub mod tracing;
pub mod update;
pub mod util;
pub mod window_state;
pub mod zoom;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use messages::Msg;
pub use model::ViewerModel;
