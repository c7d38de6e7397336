//! Writing the payload to disk.
//!
//! A [`Materializer`] owns one output path. [`Materializer::materialize`]
//! creates the parent directory chain and then truncates and rewrites the
//! file; [`Materializer::verify`] compares what is on disk with a payload
//! without writing anything.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::MaterializeError;
use crate::payload::Payload;

/// Outcome of a successful [`Materializer::materialize`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterializeReport {
    /// Path the payload was written to.
    pub path: PathBuf,
    /// Number of bytes written.
    pub bytes: usize,
    /// The parent directory did not exist and was created.
    pub created_dirs: bool,
    /// A file already existed at `path` and was overwritten.
    pub replaced: bool,
}

/// How the file on disk compares to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Freshness {
    /// The file matches the payload byte for byte.
    UpToDate,
    /// The file exists but its content differs.
    Stale { on_disk_bytes: u64 },
    /// No file exists at the path.
    Missing,
}

/// Writes a payload to a single fixed path.
#[derive(Debug, Clone)]
pub struct Materializer {
    path: PathBuf,
}

impl Materializer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists, then replace the file with `payload`.
    pub fn materialize(&self, payload: &Payload) -> Result<MaterializeReport, MaterializeError> {
        let created_dirs = self.ensure_parent()?;
        let replaced = self.path.is_file();

        tracing::debug!(
            "Writing {} bytes to {}",
            payload.len(),
            self.path.display()
        );

        // File::create truncates an existing file
        let mut file = File::create(&self.path).map_err(|source| MaterializeError::Write {
            path: self.path.clone(),
            source,
        })?;
        file.write_all(payload.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| MaterializeError::Write {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!("Materialized {}", self.path.display());

        Ok(MaterializeReport {
            path: self.path.clone(),
            bytes: payload.len(),
            created_dirs,
            replaced,
        })
    }

    /// Compare the file at the output path with `payload`.
    pub fn verify(&self, payload: &Payload) -> Result<Freshness, MaterializeError> {
        let on_disk = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{} does not exist", self.path.display());
                return Ok(Freshness::Missing);
            }
            Err(source) => {
                return Err(MaterializeError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if on_disk == payload.as_bytes() {
            Ok(Freshness::UpToDate)
        } else {
            tracing::debug!(
                "{} differs from payload ({} bytes on disk, {} expected)",
                self.path.display(),
                on_disk.len(),
                payload.len()
            );
            Ok(Freshness::Stale {
                on_disk_bytes: on_disk.len() as u64,
            })
        }
    }

    /// Create the parent directory chain. Returns whether anything was created.
    fn ensure_parent(&self) -> Result<bool, MaterializeError> {
        let Some(parent) = self.path.parent() else {
            return Ok(false);
        };
        if parent.as_os_str().is_empty() || parent.is_dir() {
            return Ok(false);
        }

        tracing::debug!("Creating directory {}", parent.display());
        fs::create_dir_all(parent).map_err(|source| MaterializeError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
        Ok(true)
    }
}
