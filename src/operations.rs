//! High-level panorama operations.
//!
//! These functions combine the pure calculations with a codec and
//! accumulate results into the report types. They hold no state: every
//! call is independent, every result a fresh value.

use crate::calculations::{
    compression_dimensions, compression_ratio_percent, preview_dimensions,
};
use crate::codec::{CodecError, ImageCodec, Quality, sniff_mime_type};
use crate::report::{CompressionSummary, ImageInfo, Preview, ValidationReport};
use crate::requirements::{Requirements, extension_of, format_bytes};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::path::Path;
use tracing::{debug, warn};

/// Score below which validation appends a low-quality warning.
const LOW_SCORE_WARNING_THRESHOLD: u8 = 70;

/// Ratio deviation above which an exact-2:1 recommendation is emitted.
/// Deliberately tighter than the hard tolerance: a panorama can pass
/// validation at 2.04:1 and still be nudged toward exact 2:1.
const RATIO_RECOMMENDATION_THRESHOLD: f64 = 0.01;

/// Megapixel count above which a compression recommendation is emitted.
const HEAVY_MEGAPIXELS: f64 = 20.0;

/// File size in KB above which [`can_auto_compress`] offers compression.
pub const DEFAULT_AUTO_COMPRESS_TARGET_KB: u64 = 5000;

/// An upload candidate: the blob plus what the uploader declared about it.
///
/// The declared MIME type and file name are validated *independently* of
/// the blob content; `size_bytes` is a plain field so a caller relaying a
/// remote upload can set it without holding the full blob locally.
#[derive(Debug, Clone)]
pub struct UploadSource {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub file_name: String,
    pub size_bytes: u64,
}

impl UploadSource {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>, file_name: impl Into<String>) -> Self {
        let size_bytes = data.len() as u64;
        Self {
            data,
            mime_type: mime_type.into(),
            file_name: file_name.into(),
            size_bytes,
        }
    }

    /// Read a file from disk, deriving name, size, and MIME type (from the
    /// extension) the way a browser file input would declare them.
    pub fn from_path(path: &Path) -> Result<Self, std::io::Error> {
        let data = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = match extension_of(&file_name).as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            _ => "application/octet-stream",
        };
        Ok(Self::new(data, mime_type, file_name))
    }
}

/// Validate an upload candidate against the panorama requirements.
///
/// Runs four ordered checks, accumulating everything into one report:
/// type (MIME and extension, independently), file size, dimensions/ratio,
/// and quality score. Checks do not short-circuit each other (a file can
/// collect a type error *and* a size error) with one exception: a failed
/// dimension decode ends validation early, since every remaining check
/// needs the pixels. `valid` is simply `errors.is_empty()` at the end.
pub fn validate_image(
    codec: &impl ImageCodec,
    source: &UploadSource,
    requirements: &Requirements,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_type(source, requirements, &mut report);
    check_size(source, requirements, &mut report);
    check_content_matches_declared_type(source, &mut report);

    let dims = match codec.identify(&source.data) {
        Ok(dims) => dims,
        Err(e) => {
            warn!(file_name = %source.file_name, error = %e, "panorama decode failed");
            report.errors.push(
                "Could not load image. The file may be corrupt or not a valid image.".to_string(),
            );
            report.valid = false;
            return report;
        }
    };

    let info = ImageInfo::from_dimensions(dims.width, dims.height);
    check_dimensions(dims.width, dims.height, &info, requirements, &mut report);

    if info.quality_score < LOW_SCORE_WARNING_THRESHOLD {
        report
            .warnings
            .push(format!("Low quality score: {}/100.", info.quality_score));
    }

    report.recommendations = build_recommendations(&info, requirements);
    report.info = Some(info);
    report.valid = report.errors.is_empty();
    debug!(
        file_name = %source.file_name,
        valid = report.valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "panorama validated"
    );
    report
}

/// MIME type and file extension are checked independently; both errors can
/// appear on the same file.
fn check_type(source: &UploadSource, requirements: &Requirements, report: &mut ValidationReport) {
    if !requirements.allows_mime_type(&source.mime_type) {
        report.errors.push(format!(
            "Invalid file type: {}. Allowed: JPEG, PNG.",
            source.mime_type
        ));
    }

    if !requirements.allows_extension(&source.file_name) {
        let shown = extension_of(&source.file_name)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_else(|| "none".to_string());
        report.errors.push(format!(
            "Invalid file extension: {shown}. Allowed: .jpg, .jpeg, .png."
        ));
    }
}

fn check_size(source: &UploadSource, requirements: &Requirements, report: &mut ValidationReport) {
    let size = source.size_bytes;
    if size < requirements.min_file_size {
        report.errors.push(format!(
            "File too small ({}). Minimum: {}.",
            format_bytes(size),
            format_bytes(requirements.min_file_size)
        ));
    } else if size > requirements.max_file_size {
        report.errors.push(format!(
            "File too large ({}). Maximum: {}.",
            format_bytes(size),
            format_bytes(requirements.max_file_size)
        ));
    } else if size > requirements.large_file_threshold {
        report.warnings.push(format!(
            "Large file ({}), viewer load time may suffer.",
            format_bytes(size)
        ));
    }
}

/// Warn when leading magic bytes contradict the declared MIME type. The
/// decode step stays the authority on readability, so this never fails
/// the file on its own.
fn check_content_matches_declared_type(source: &UploadSource, report: &mut ValidationReport) {
    let Some(sniffed) = sniff_mime_type(&source.data) else {
        return;
    };

    let declared = source.mime_type.to_ascii_lowercase();
    let canonical = if declared == "image/jpg" {
        "image/jpeg"
    } else {
        declared.as_str()
    };

    if canonical != sniffed {
        warn!(declared = %source.mime_type, sniffed, "declared MIME type contradicts file content");
        report.warnings.push(format!(
            "Declared type {} but the file content looks like {}.",
            source.mime_type, sniffed
        ));
    }
}

/// Ratio and resolution checks. The ratio takes priority: an image that is
/// both non-2:1 and undersized reports only the ratio error, because
/// resizing to fix the ratio changes the resolution anyway.
fn check_dimensions(
    width: u32,
    height: u32,
    info: &ImageInfo,
    requirements: &Requirements,
    report: &mut ValidationReport,
) {
    // Tolerance uses the unrounded ratio; messages show the rounded one.
    let ratio = width as f64 / height as f64;

    if (ratio - requirements.aspect_ratio_target).abs() > requirements.aspect_ratio_tolerance {
        report.errors.push(format!(
            "Invalid aspect ratio: {}:1. 360° images must be 2:1 (±5%).",
            info.aspect_ratio
        ));
    } else if width < requirements.min_width || height < requirements.min_height {
        report.errors.push(format!(
            "Resolution too low: {width}x{height}. Minimum: {}x{}.",
            requirements.min_width, requirements.min_height
        ));
    } else if width > requirements.max_width || height > requirements.max_height {
        report.errors.push(format!(
            "Resolution too high: {width}x{height}. Maximum: {}x{}.",
            requirements.max_width, requirements.max_height
        ));
    } else if width < requirements.recommended_width || height < requirements.recommended_height {
        report.warnings.push(format!(
            "Resolution below recommended: {width}x{height}. Use at least {}x{} for best quality.",
            requirements.recommended_width, requirements.recommended_height
        ));
    }
}

/// Recommendations are advice, generated from the decoded info whether or
/// not the file passed. The two trailing tips are unconditional.
fn build_recommendations(info: &ImageInfo, requirements: &Requirements) -> Vec<String> {
    let mut recommendations = Vec::new();

    if info.width < requirements.recommended_width {
        recommendations.push(format!(
            "Shoot or export at {}x{} or higher for sharp spherical viewing.",
            requirements.recommended_width, requirements.recommended_height
        ));
    }

    let ratio = info.width as f64 / info.height.max(1) as f64;
    if (ratio - requirements.aspect_ratio_target).abs() > RATIO_RECOMMENDATION_THRESHOLD {
        recommendations.push("Use an exact 2:1 aspect ratio for distortion-free projection.".to_string());
    }

    if info.megapixels > HEAVY_MEGAPIXELS {
        recommendations.push(
            "Consider compressing: images over 20 megapixels slow down tour loading.".to_string(),
        );
    }

    recommendations.push(
        "Export as JPEG at 80-90% quality for the best size/quality balance.".to_string(),
    );
    recommendations.push(
        "Stitched output from a dedicated 360° camera gives the most accurate projection."
            .to_string(),
    );

    recommendations
}

/// Dimension facts without a pass/fail judgement.
pub fn get_image_info(codec: &impl ImageCodec, data: &[u8]) -> Result<ImageInfo, CodecError> {
    let dims = codec.identify(data)?;
    Ok(ImageInfo::from_dimensions(dims.width, dims.height))
}

/// Configuration for 2:1-normalizing compression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionConfig {
    pub quality: Quality,
    /// Output width cap; sources narrower than this keep their width.
    pub max_width: u32,
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            max_width: 6144,
        }
    }
}

/// Resample a panorama down to at most `max_width` wide and re-encode as
/// JPEG, forcing the output to exactly 2:1.
///
/// Height is recomputed as `width / 2` unconditionally: a source that was
/// not exactly 2:1 gets stretched into shape by the resample, never
/// cropped. The returned ratio percent is negative when re-encoding
/// inflated the file (typical for PNG input); that is a valid outcome,
/// not an error.
pub fn compress_image(
    codec: &impl ImageCodec,
    data: &[u8],
    config: &CompressionConfig,
) -> Result<CompressionSummary, CodecError> {
    let dims = codec.identify(data)?;
    let (width, height) = compression_dimensions(dims.width, config.max_width);

    let output = codec.resample_jpeg(data, width, height, config.quality)?;
    let original_bytes = data.len() as u64;
    let compressed_bytes = output.len() as u64;
    let ratio_percent = compression_ratio_percent(original_bytes, compressed_bytes);
    debug!(
        width,
        height, original_bytes, compressed_bytes, ratio_percent, "panorama compressed"
    );

    Ok(CompressionSummary {
        original_bytes,
        compressed_bytes,
        ratio_percent,
        width,
        height,
        data: output,
    })
}

/// Whether the uploader should offer one-click compression.
///
/// True iff the file exceeds `target_size_kb` *and* the MIME string
/// contains `"jpeg"`. An oversized PNG is never offered auto-compression;
/// sending it through lossy JPEG silently is not this function's call to
/// make.
pub fn can_auto_compress(mime_type: &str, file_size_kb: u64, target_size_kb: u64) -> bool {
    file_size_kb > target_size_kb && mime_type.to_ascii_lowercase().contains("jpeg")
}

/// Configuration for preview thumbnails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewConfig {
    /// Cap for the larger output edge.
    pub max_width: u32,
    pub quality: Quality,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_width: 400,
            quality: Quality::default(),
        }
    }
}

/// Generate a proportionally scaled JPEG thumbnail as a data URL.
///
/// This is a plain thumbnail for the upload UI: source proportions are
/// preserved, unrelated to the 2:1 normalization in [`compress_image`].
pub fn generate_preview(
    codec: &impl ImageCodec,
    data: &[u8],
    config: &PreviewConfig,
) -> Result<Preview, CodecError> {
    let dims = codec.identify(data)?;
    let (width, height) = preview_dimensions((dims.width, dims.height), config.max_width);

    let jpeg = codec.resample_jpeg(data, width, height, config.quality)?;
    Ok(Preview {
        data_url: format!("data:image/jpeg;base64,{}", BASE64.encode(&jpeg)),
        width,
        height,
    })
}
