//! Pure calculation functions for panorama dimensions and scoring.
//!
//! All functions here are pure and testable without any I/O or images.

/// Pixel count of the recommended 4096x2048 equirectangular resolution.
///
/// Used as the reference point for the quality score: images at or above
/// this resolution take no resolution penalty.
pub const IDEAL_PIXELS: u64 = 4096 * 2048;

/// Aspect ratio (width / height) rounded to two decimals, as reported
/// to callers in [`ImageInfo`](crate::report::ImageInfo).
///
/// Tolerance checks use the unrounded ratio; only the reported value is
/// rounded.
pub fn rounded_aspect_ratio(width: u32, height: u32) -> f64 {
    if height == 0 {
        return 0.0;
    }
    let ratio = width as f64 / height as f64;
    (ratio * 100.0).round() / 100.0
}

/// Total pixel count expressed in megapixels, rounded to one decimal.
pub fn megapixels(width: u32, height: u32) -> f64 {
    let mp = width as f64 * height as f64 / 1_000_000.0;
    (mp * 10.0).round() / 10.0
}

/// Heuristic 0-100 quality score for an equirectangular panorama.
///
/// Starting from 100:
/// - below [`IDEAL_PIXELS`]: linear penalty up to 30 points
///   (`(1 - pixels/ideal) * 30`)
/// - ratio penalty: `|width/height - 2.0| * 200` (a ratio of 2.05 costs
///   10 points, stacking with, and finer than, the hard tolerance check)
/// - at or above 1.5x the ideal pixel count: 10 bonus points
///
/// The result is clamped to `[0, 100]` and rounded, whatever the inputs;
/// a 1x1 or 20000x1 image still yields a score in range. The constants
/// are tuned by eye against real tour uploads, not derived.
pub fn quality_score(width: u32, height: u32) -> u8 {
    if width == 0 || height == 0 {
        return 0;
    }

    let pixels = width as f64 * height as f64;
    let ideal = IDEAL_PIXELS as f64;
    let ratio = width as f64 / height as f64;

    let mut score = 100.0;
    if pixels < ideal {
        score -= (1.0 - pixels / ideal) * 30.0;
    }
    score -= (ratio - 2.0).abs() * 200.0;
    if pixels >= ideal * 1.5 {
        score += 10.0;
    }

    score.clamp(0.0, 100.0).round() as u8
}

/// Target dimensions for 2:1-normalizing compression.
///
/// Width is capped at `max_width`, height is recomputed as `width / 2`
/// unconditionally: a source that was not exactly 2:1 gets stretched to
/// 2:1 by the resample, not cropped. An odd width drops one column so the
/// integer division keeps the output ratio exactly 2.0.
pub fn compression_dimensions(source_width: u32, max_width: u32) -> (u32, u32) {
    let width = (source_width.min(max_width) & !1).max(2);
    (width, width / 2)
}

/// Target dimensions for a proportional preview thumbnail.
///
/// Uniform scale `min(max_width/w, max_width/h)` so the larger edge lands
/// at `max_width`. This is a plain thumbnail: source proportions are kept,
/// unrelated to the 2:1 normalization in compression. Sources smaller than
/// `max_width` are scaled up, matching the uploader's preview pane.
pub fn preview_dimensions(source: (u32, u32), max_width: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    if src_w == 0 || src_h == 0 {
        return (0, 0);
    }

    let scale = (max_width as f64 / src_w as f64).min(max_width as f64 / src_h as f64);
    let w = ((src_w as f64 * scale).round() as u32).max(1);
    let h = ((src_h as f64 * scale).round() as u32).max(1);
    (w, h)
}

/// Space saved by compression as a signed percentage.
///
/// Negative when re-encoding inflated the file (typical for a PNG pushed
/// through JPEG at modest quality); callers must not treat that as an
/// error.
pub fn compression_ratio_percent(original_bytes: u64, compressed_bytes: u64) -> i32 {
    if original_bytes == 0 {
        return 0;
    }
    ((1.0 - compressed_bytes as f64 / original_bytes as f64) * 100.0).round() as i32
}
