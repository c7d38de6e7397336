//! # assetgen-core
//!
//! Embedded fixture payload and the materializer that writes it to disk.
//!
//! - **Payload**: the pattern background image, kept in source as base64
//! - **Materializer**: creates the destination directory chain and replaces
//!   the file with the payload bytes, or checks whether it is current
//!
//! ## Example
//!
//! ```rust,no_run
//! use assetgen_core::{DEFAULT_ASSET_PATH, Materializer, Payload};
//!
//! let payload = Payload::embedded().unwrap();
//! let report = Materializer::new(DEFAULT_ASSET_PATH)
//!     .materialize(&payload)
//!     .unwrap();
//!
//! assert_eq!(report.bytes, payload.len());
//! ```

pub mod error;
pub mod materialize;
pub mod payload;

pub use error::MaterializeError;
pub use materialize::{Freshness, MaterializeReport, Materializer};
pub use payload::{PATTERN_BACKGROUND_BASE64, PNG_SIGNATURE, Payload, PngHeader};

/// Where the pattern background is written, relative to the working directory.
pub const DEFAULT_ASSET_PATH: &str = "assets/images/pattern_background.png";
