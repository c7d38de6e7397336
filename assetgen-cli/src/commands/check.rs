//! Implementation of the `assetgen check` command.
//!
//! Compares the asset on disk with the embedded payload without writing
//! anything. Exits non-zero when the file is missing or differs, so build
//! steps can decide whether to regenerate.

use assetgen_core::{Freshness, Materializer, Payload};
use serde::Serialize;
use std::path::PathBuf;

use super::OutputFormat;
use crate::config::AssetConfig;
use crate::errors::CliError;
use crate::output;

/// Options for the `assetgen check` command.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub config: AssetConfig,
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    path: PathBuf,
    expected_bytes: usize,
    #[serde(flatten)]
    freshness: Freshness,
}

/// Run the `assetgen check` command.
///
/// Returns the freshness when the asset is up to date, and an error
/// describing the mismatch otherwise.
pub fn run_check(options: CheckOptions) -> Result<Freshness, CliError> {
    let payload = Payload::embedded()?;
    let path = options.config.target_path();
    tracing::debug!("Resolved asset path {}", path.display());
    let freshness = Materializer::new(&path).verify(&payload)?;

    if options.format == OutputFormat::Json {
        let report = CheckReport {
            path: path.clone(),
            expected_bytes: payload.len(),
            freshness,
        };
        output::data(&serde_json::to_string_pretty(&report)?);
    }

    let display = path.display().to_string();
    match freshness {
        Freshness::UpToDate => {
            if options.format == OutputFormat::Text {
                output::success(&format!("{} is up to date", display));
            }
            Ok(freshness)
        }
        Freshness::Stale { on_disk_bytes } => Err(CliError::Stale {
            path: display,
            on_disk_bytes,
            expected_bytes: payload.len(),
        }),
        Freshness::Missing => Err(CliError::Missing { path: display }),
    }
}
