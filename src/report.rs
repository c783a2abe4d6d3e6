//! Result value types returned to callers.
//!
//! Every type here is a fresh, unshared value constructed per call: no
//! identity, no mutation after return, no cross-call state. All of them
//! derive `Serialize` so the uploader can persist or render them directly.

use crate::calculations;
use serde::Serialize;

/// Dimension-derived facts about an image, computed once after a
/// successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Width / height, rounded to two decimals.
    pub aspect_ratio: f64,
    /// Total pixels in megapixels, rounded to one decimal.
    pub megapixels: f64,
    /// Heuristic 0-100 score, always in range.
    pub quality_score: u8,
}

impl ImageInfo {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            aspect_ratio: calculations::rounded_aspect_ratio(width, height),
            megapixels: calculations::megapixels(width, height),
            quality_score: calculations::quality_score(width, height),
        }
    }
}

/// Outcome of a full validation pass.
///
/// `errors` are fatal: any entry forces `valid == false`. `warnings` and
/// `recommendations` never affect validity. `info` is `None` exactly when
/// the image could not be decoded (the only early-return in validation).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Option<ImageInfo>,
    pub recommendations: Vec<String>,
}

/// Outcome of a 2:1-normalizing compression pass.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionSummary {
    pub original_bytes: u64,
    pub compressed_bytes: u64,
    /// Space saved as a signed percentage; negative when re-encoding
    /// inflated the file.
    pub ratio_percent: i32,
    /// Output dimensions; always exactly 2:1.
    pub width: u32,
    pub height: u32,
    /// Re-encoded JPEG bytes. Skipped in serialized form: callers upload
    /// the blob, they don't persist it inside the summary.
    #[serde(skip)]
    pub data: Vec<u8>,
}

/// A scaled-down thumbnail, encoded as a JPEG data URL for direct use in
/// an `<img src>`.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}
