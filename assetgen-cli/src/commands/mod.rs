//! CLI commands for assetgen.
//!
//! - `assetgen write` - Materialize the embedded asset (the default when no command is given)
//! - `assetgen check` - Report whether the asset on disk matches the embedded payload

pub mod check;
pub mod write;

pub use check::{CheckOptions, run_check};
pub use write::{WriteOptions, run_write};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable status lines
    #[default]
    Text,
    /// A JSON document on stdout
    Json,
}
