//! Error types for the assetgen-core crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while decoding the payload or touching the filesystem.
#[derive(Debug, Error)]
pub enum MaterializeError {
    #[error("Failed to decode embedded payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MaterializeError {
    /// The underlying IO error kind, if the failure came from the filesystem.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            MaterializeError::Decode(_) => None,
            MaterializeError::CreateDir { source, .. }
            | MaterializeError::Write { source, .. }
            | MaterializeError::Read { source, .. } => Some(source.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_write_error_mentions_path() {
        let error = MaterializeError::Write {
            path: PathBuf::from("assets/images/pattern_background.png"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.to_string().contains("pattern_background.png"));
        assert_eq!(error.io_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_create_dir_error_message() {
        let error = MaterializeError::CreateDir {
            path: PathBuf::from("assets/images"),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "not a directory"),
        };
        assert_eq!(error.io_kind(), Some(io::ErrorKind::AlreadyExists));
        assert!(error.to_string().starts_with("Failed to create directory"));
    }

    #[test]
    fn test_decode_error_has_no_io_kind() {
        let source = base64::DecodeError::InvalidPadding;
        let error = MaterializeError::from(source);
        assert!(error.io_kind().is_none());
    }
}
