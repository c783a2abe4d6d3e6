//! Pure Rust codec on the `image` crate, no system dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::into_dimensions` (header parse, no pixel decode) |
//! | Resample | `DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode | `image::codecs::jpeg::JpegEncoder` into an in-memory buffer |
//!
//! Only JPEG and PNG decoders are compiled in, the same set the upload
//! allowlist accepts.

use crate::codec::{CodecError, Dimensions, ImageCodec, Quality};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use tracing::debug;

/// Pure Rust codec using the `image` crate.
pub struct RustCodec;

impl RustCodec {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a blob into pixels, guessing the format from its content.
fn load_image(data: &[u8]) -> Result<DynamicImage, CodecError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(CodecError::Io)?
        .decode()
        .map_err(|e| CodecError::Decode(e.to_string()))
}

impl ImageCodec for RustCodec {
    fn identify(&self, data: &[u8]) -> Result<Dimensions, CodecError> {
        let (width, height) = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(CodecError::Io)?
            .into_dimensions()
            .map_err(|e| CodecError::Decode(e.to_string()))?;
        Ok(Dimensions { width, height })
    }

    fn resample_jpeg(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
        quality: Quality,
    ) -> Result<Vec<u8>, CodecError> {
        let img = load_image(data)?;
        debug!(
            source_width = img.width(),
            source_height = img.height(),
            width,
            height,
            quality = quality.value(),
            "resampling"
        );

        // resize_exact distorts when the target ratio differs from the
        // source; that is the contract here. RGB8 conversion drops any PNG
        // alpha channel, which the JPEG encoder cannot carry.
        let resized = img.resize_exact(width, height, FilterType::Lanczos3).to_rgb8();

        let mut out = Vec::new();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut out), quality.value());
        DynamicImage::ImageRgb8(resized)
            .write_with_encoder(encoder)
            .map_err(|e| CodecError::Encode(e.to_string()))?;
        Ok(out)
    }
}
