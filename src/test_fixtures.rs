//! Shared synthetic-image fixtures for the panocheck test suite.
//!
//! All fixtures are built in memory with the `image` crate; no files and
//! no binary test assets. The gradient fill keeps JPEG output from
//! collapsing to a few hundred bytes, so size-dependent assertions stay
//! meaningful.

use image::{ImageEncoder, RgbImage, RgbaImage};
use std::io::Cursor;

/// Encode a synthetic gradient JPEG with the given dimensions.
pub fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    let mut out = Vec::new();
    image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut out), 90)
        .write_image(
            img.as_raw(),
            width,
            height,
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
    out
}

/// Encode a synthetic gradient PNG, with an alpha channel, at the given
/// dimensions.
pub fn encode_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut out = Vec::new();
    image::codecs::png::PngEncoder::new(Cursor::new(&mut out))
        .write_image(
            img.as_raw(),
            width,
            height,
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
    out
}
