//! Output location for the materialized asset.
//!
//! The asset path is always relative and is resolved against a root
//! directory. With no overrides the root is the working directory and the
//! path is [`DEFAULT_ASSET_PATH`], so a bare `assetgen` writes
//! `assets/images/pattern_background.png` under the current directory.

use assetgen_core::DEFAULT_ASSET_PATH;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while resolving the output location.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The output path was absolute.
    #[error("Output path must be relative: {0}")]
    AbsoluteOutput(PathBuf),

    /// The output path tried to leave the root directory.
    #[error("Output path must not contain '..': {0}")]
    ParentTraversal(PathBuf),

    /// The output path does not end in a file name.
    #[error("Output path does not name a file: '{0}'")]
    MissingFileName(PathBuf),

    /// The root directory does not exist.
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),
}

/// Resolved location of the asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    /// Directory the output path is resolved against.
    pub root: PathBuf,

    /// Asset path relative to `root`.
    pub output: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_ASSET_PATH)
}

impl AssetConfig {
    /// Build a configuration from optional command-line overrides and validate it.
    pub fn from_overrides(
        root: Option<String>,
        output: Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            root: root.map(PathBuf::from).unwrap_or_else(default_root),
            output: output.map(PathBuf::from).unwrap_or_else(default_output),
        };
        config.validate()?;
        Ok(config)
    }

    /// Full path of the asset file.
    ///
    /// The default root is left off so messages show the plain relative path.
    pub fn target_path(&self) -> PathBuf {
        if self.root == default_root() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_output(&self.output)?;

        if !self.root.is_dir() {
            return Err(ConfigError::RootNotFound(self.root.clone()));
        }

        Ok(())
    }
}

fn validate_output(output: &Path) -> Result<(), ConfigError> {
    if output.is_absolute() || output.has_root() {
        return Err(ConfigError::AbsoluteOutput(output.to_path_buf()));
    }

    if output.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ConfigError::ParentTraversal(output.to_path_buf()));
    }

    if output.file_name().is_none() {
        return Err(ConfigError::MissingFileName(output.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AssetConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(
            config.output,
            PathBuf::from("assets/images/pattern_background.png")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_target_path_is_relative() {
        let config = AssetConfig::from_overrides(None, None).unwrap();
        assert_eq!(
            config.target_path(),
            PathBuf::from("assets/images/pattern_background.png")
        );
    }

    #[test]
    fn test_root_override_is_joined() {
        let dir = tempdir().unwrap();
        let config =
            AssetConfig::from_overrides(Some(dir.path().to_string_lossy().to_string()), None)
                .unwrap();
        assert_eq!(
            config.target_path(),
            dir.path().join("assets/images/pattern_background.png")
        );
    }

    #[test]
    fn test_output_override() {
        let config =
            AssetConfig::from_overrides(None, Some("fixtures/bg.png".to_string())).unwrap();
        assert_eq!(config.target_path(), PathBuf::from("fixtures/bg.png"));
    }

    #[test]
    fn test_absolute_output_rejected() {
        let dir = tempdir().unwrap();
        let absolute = dir.path().join("bg.png").to_string_lossy().to_string();
        let result = AssetConfig::from_overrides(None, Some(absolute));
        assert!(matches!(result, Err(ConfigError::AbsoluteOutput(_))));
    }

    #[test]
    fn test_parent_traversal_rejected() {
        let result = AssetConfig::from_overrides(None, Some("../escape.png".to_string()));
        assert!(matches!(result, Err(ConfigError::ParentTraversal(_))));
    }

    #[test]
    fn test_empty_output_rejected() {
        let result = AssetConfig::from_overrides(None, Some(String::new()));
        assert!(matches!(result, Err(ConfigError::MissingFileName(_))));
    }

    #[test]
    fn test_missing_root_rejected() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope").to_string_lossy().to_string();
        let result = AssetConfig::from_overrides(Some(missing), None);
        assert!(matches!(result, Err(ConfigError::RootNotFound(_))));
    }
}
