//! assetgen CLI library - commands, configuration and terminal output.
//!
//! Exposed as a library so the binary stays thin and the commands can be
//! tested directly.
//!
//! # Modules
//!
//! - [`commands`]: `write` and `check`
//! - [`config`]: Output location and its validation
//! - [`errors`]: CLI error type with fix suggestions
//! - [`logging`]: `tracing` subscriber setup for `--verbose`
//! - [`output`]: Styled status messages honouring `--quiet`

pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
pub mod output;

pub use commands::{CheckOptions, OutputFormat, WriteOptions, run_check, run_write};
pub use config::{AssetConfig, ConfigError};
pub use errors::CliError;
