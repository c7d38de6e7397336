//! The embedded fixture payload.
//!
//! The payload is kept in source as a base64 literal and decoded on demand.
//! Its bytes are written out verbatim; nothing here rejects a payload because
//! of its content. [`Payload::header`] only describes the bytes for reporting.

use base64::{Engine, engine::general_purpose};

use crate::error::MaterializeError;

pub use base64::DecodeError;

/// Base64 (standard alphabet, padded) encoding of the pattern background image.
pub const PATTERN_BACKGROUND_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAA4AAAAOCAYAAAAfSC3RAAAAJ0lEQVR4nGMAAQAABQABDQottAAAAABJRU5ErkJggg==";

/// The eight-byte signature every PNG stream starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Decoded payload bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

/// Dimensions and pixel format read from a PNG IHDR chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngHeader {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: u8,
}

impl Payload {
    /// Decode the embedded pattern background literal.
    pub fn embedded() -> Result<Self, MaterializeError> {
        Self::from_base64(PATTERN_BACKGROUND_BASE64)
    }

    /// Decode an arbitrary standard, padded base64 literal.
    pub fn from_base64(encoded: &str) -> Result<Self, MaterializeError> {
        let bytes = general_purpose::STANDARD.decode(encoded)?;
        tracing::debug!("Decoded payload: {} bytes", bytes.len());
        Ok(Self { bytes })
    }

    /// Wrap raw bytes without decoding.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read the IHDR chunk if the bytes start like a PNG stream.
    ///
    /// Returns `None` for anything else. Chunk CRCs and the remaining
    /// chunks are not inspected.
    pub fn header(&self) -> Option<PngHeader> {
        let bytes = &self.bytes;
        if bytes.len() < 26 || bytes[..8] != PNG_SIGNATURE {
            return None;
        }

        let chunk_len = u32::from_be_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        if chunk_len != 13 || &bytes[12..16] != b"IHDR" {
            return None;
        }

        Some(PngHeader {
            width: u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
            height: u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]),
            bit_depth: bytes[24],
            color_type: bytes[25],
        })
    }
}
