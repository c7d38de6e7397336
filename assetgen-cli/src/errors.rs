use assetgen_core::MaterializeError;
use std::io::ErrorKind;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `assetgen` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("{path} is out of date ({on_disk_bytes} bytes on disk, {expected_bytes} expected)")]
    Stale {
        path: String,
        on_disk_bytes: u64,
        expected_bytes: usize,
    },

    #[error("{path} does not exist")]
    Missing { path: String },

    #[error("Failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
}

impl CliError {
    /// Get a suggestion for how to fix this error
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            CliError::Materialize(MaterializeError::Decode(_)) => None,
            CliError::Materialize(MaterializeError::CreateDir { source, .. })
                if source.kind() != ErrorKind::PermissionDenied =>
            {
                Some("A file is in the way of the output directory. Move it aside and retry.")
            }
            CliError::Materialize(e) => match e.io_kind() {
                Some(ErrorKind::PermissionDenied) => {
                    Some("Check that you have write permission on the destination directory.")
                }
                Some(ErrorKind::IsADirectory) => {
                    Some("A directory exists where the asset file should be written.")
                }
                _ => None,
            },
            CliError::Config(_) => {
                Some("Use a relative --output path inside --root, e.g. assets/images/bg.png")
            }
            CliError::Stale { .. } | CliError::Missing { .. } => {
                Some("Run 'assetgen' to regenerate the asset.")
            }
            CliError::Report(_) => None,
        }
    }

    /// Format error with suggestion for CLI output
    pub fn format_for_cli(&self) -> String {
        let mut output = format!("Error: {}", self);

        if let Some(suggestion) = self.suggestion() {
            output.push_str(&format!("\n\nSuggestion: {}", suggestion));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetgen_core::payload::DecodeError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_permission_denied_suggestion() {
        let error = CliError::from(MaterializeError::Write {
            path: PathBuf::from("assets/images/pattern_background.png"),
            source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
        });
        assert!(error.to_string().contains("pattern_background.png"));
        assert!(error.suggestion().unwrap().contains("write permission"));
    }

    #[test]
    fn test_create_dir_collision_suggestion() {
        let error = CliError::from(MaterializeError::CreateDir {
            path: PathBuf::from("assets/images"),
            source: io::Error::new(ErrorKind::AlreadyExists, "file exists"),
        });
        assert!(error.suggestion().unwrap().contains("in the way"));
    }

    #[test]
    fn test_stale_error() {
        let error = CliError::Stale {
            path: "assets/images/pattern_background.png".to_string(),
            on_disk_bytes: 3,
            expected_bytes: 67,
        };
        assert!(error.to_string().contains("out of date"));
        assert!(error.to_string().contains("67 expected"));
        assert!(error.suggestion().unwrap().contains("assetgen"));
    }

    #[test]
    fn test_config_error() {
        let error = CliError::from(ConfigError::ParentTraversal(PathBuf::from("../x.png")));
        assert!(error.to_string().starts_with("Invalid configuration"));
        assert!(error.suggestion().unwrap().contains("--output"));
    }

    #[test]
    fn test_format_for_cli() {
        let error = CliError::Missing {
            path: "assets/images/pattern_background.png".to_string(),
        };
        let formatted = error.format_for_cli();
        assert!(formatted.contains("Error:"));
        assert!(formatted.contains("Suggestion:"));
        assert!(formatted.contains("does not exist"));
    }

    #[test]
    fn test_format_without_suggestion() {
        let error = CliError::from(MaterializeError::Decode(DecodeError::InvalidPadding));
        assert!(!error.format_for_cli().contains("Suggestion:"));
    }
}
