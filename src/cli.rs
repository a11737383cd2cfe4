//! Command-line argument parsing for the viewer

use clap::Parser;
use std::path::PathBuf;

/// A minimal Markdown viewer
#[derive(Parser, Debug)]
#[command(name = "mdview", version, about = "A minimal Markdown viewer")]
pub struct CliArgs {
    /// Markdown file to open
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// The Markdown file to display
    pub file: PathBuf,
}

/// Why the viewer cannot start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupError {
    /// No file was given on the command line
    NoFile,
}

impl StartupError {
    pub fn title(&self) -> &'static str {
        match self {
            Self::NoFile => "No File Provided",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoFile => {
                "Please open a markdown file from your file manager or provide a file path as a command line argument."
            }
        }
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFile => write!(f, "no file provided"),
        }
    }
}

impl std::error::Error for StartupError {}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, StartupError> {
        let file = self.file.ok_or(StartupError::NoFile)?;
        Ok(StartupConfig { file })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_an_error() {
        let args = CliArgs { file: None };
        assert_eq!(args.into_config(), Err(StartupError::NoFile));
    }

    #[test]
    fn test_single_file() {
        let args = CliArgs {
            file: Some(PathBuf::from("readme.md")),
        };
        let config = args.into_config().unwrap();
        assert_eq!(config.file, PathBuf::from("readme.md"));
    }

    #[test]
    fn test_parse_from_argv() {
        let args = CliArgs::try_parse_from(["mdview", "docs/guide.md"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("docs/guide.md")));
    }

    #[test]
    fn test_parse_without_file() {
        let args = CliArgs::try_parse_from(["mdview"]).unwrap();
        assert!(args.file.is_none());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(CliArgs::try_parse_from(["mdview", "a.md", "b.md"]).is_err());
    }
}
