//! Implementation of the `assetgen write` command.
//!
//! Decodes the embedded pattern background and writes it to the configured
//! path, creating parent directories and replacing any existing file.
//!
//! # Usage
//!
//! ```bash
//! # Write assets/images/pattern_background.png under the current directory
//! assetgen
//!
//! # Same thing, spelled out
//! assetgen write
//!
//! # Write into another project and print a JSON report
//! assetgen -C ../app --format json
//! ```

use assetgen_core::{MaterializeReport, Materializer, Payload};

use super::OutputFormat;
use crate::config::AssetConfig;
use crate::errors::CliError;
use crate::output;

/// Options for the `assetgen write` command.
#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Where the asset goes.
    pub config: AssetConfig,
    /// How to print the result.
    pub format: OutputFormat,
}

/// Run the `assetgen write` command.
pub fn run_write(options: WriteOptions) -> Result<MaterializeReport, CliError> {
    let payload = Payload::embedded()?;
    let path = options.config.target_path();
    tracing::debug!("Resolved asset path {}", path.display());

    let report = Materializer::new(&path).materialize(&payload)?;

    // In json mode stdout carries only the report
    match options.format {
        OutputFormat::Text => {
            if let Some(header) = payload.header() {
                output::verbose(&format!(
                    "Payload: {} bytes, PNG {}x{}",
                    payload.len(),
                    header.width,
                    header.height
                ));
            } else {
                output::verbose(&format!("Payload: {} bytes", payload.len()));
            }
            if report.created_dirs {
                output::verbose(&format!(
                    "Created directory {}",
                    path.parent().unwrap_or(path.as_path()).display()
                ));
            }
            let verb = if report.replaced { "Replaced" } else { "Created" };
            output::success(&format!(
                "{} {} ({} bytes)",
                verb,
                report.path.display(),
                report.bytes
            ));
        }
        OutputFormat::Json => output::data(&serde_json::to_string_pretty(&report)?),
    }

    Ok(report)
}
