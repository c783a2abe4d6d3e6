//! Image codec trait and shared types.
//!
//! [`ImageCodec`] defines the two primitives every codec must support:
//! identify (dimensions from an in-memory blob) and resample-to-JPEG.
//! Validation and compression logic sit on top of this seam and never touch
//! pixel data themselves, so they can be tested against a recording mock.
//!
//! The production implementation is
//! [`RustCodec`](super::rust_codec::RustCodec), pure Rust via the `image`
//! crate, statically linked.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Quality setting for JPEG encoding (1-100). Clamped on construction.
///
/// The default of 80 is the upload pipeline's balance point: visually
/// clean for spherical viewing, small enough for web delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(80)
    }
}

/// Trait for image codecs operating on in-memory blobs.
///
/// Both operations are single request/response: no cross-call state, no
/// cancellation, no retries. A failure is reported once as a [`CodecError`]
/// and never panics.
pub trait ImageCodec: Sync {
    /// Decode image dimensions from a blob.
    fn identify(&self, data: &[u8]) -> Result<Dimensions, CodecError>;

    /// Decode a blob, resample to exactly `width` x `height` (distorting
    /// if the target ratio differs from the source), and re-encode as JPEG.
    fn resample_jpeg(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        quality: Quality,
    ) -> Result<Vec<u8>, CodecError>;
}

/// Detect the actual image format from leading magic bytes.
///
/// Returns the canonical MIME type for the formats the pipeline accepts,
/// `None` for anything else. Used to warn when the declared MIME type and
/// the bytes disagree; the decode step remains the authority on whether
/// the file is readable.
pub fn sniff_mime_type(data: &[u8]) -> Option<&'static str> {
    // JPEG: FF D8 FF
    if data.len() >= 3 && data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.len() >= 8 && data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
        return Some("image/png");
    }

    None
}
