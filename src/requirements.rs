//! Validation thresholds for equirectangular panorama uploads.
//!
//! [`Requirements`] is static configuration: built once (usually via
//! `Default`), never mutated, shared freely. The defaults encode what the
//! tour viewer's spherical projection actually needs (a 2:1 frame within
//! ±5%, at least 2048x1024, at most 8192x4096) plus upload-pipeline file
//! size bounds.

/// MIME types accepted for panorama uploads. Matched case-insensitively;
/// `image/jpg` is kept for browsers and phone cameras that still emit it.
pub const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png"];

/// File extensions accepted for panorama uploads, without the leading dot.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Static validation thresholds, immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    /// Target width/height ratio for equirectangular projection.
    pub aspect_ratio_target: f64,
    /// Permitted deviation from the target ratio (absolute, in ratio units).
    pub aspect_ratio_tolerance: f64,
    /// Hard lower resolution bound.
    pub min_width: u32,
    pub min_height: u32,
    /// Hard upper resolution bound.
    pub max_width: u32,
    pub max_height: u32,
    /// Resolution below which a non-fatal quality warning is emitted.
    pub recommended_width: u32,
    pub recommended_height: u32,
    /// Files smaller than this are rejected (almost certainly not a real
    /// panorama).
    pub min_file_size: u64,
    /// Files larger than this are rejected.
    pub max_file_size: u64,
    /// Files above this (but within `max_file_size`) get a load-time
    /// warning only.
    pub large_file_threshold: u64,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            aspect_ratio_target: 2.0,
            aspect_ratio_tolerance: 0.05,
            min_width: 2048,
            min_height: 1024,
            max_width: 8192,
            max_height: 4096,
            recommended_width: 4096,
            recommended_height: 2048,
            min_file_size: 100 * 1024,
            max_file_size: 50 * 1024 * 1024,
            large_file_threshold: 20 * 1024 * 1024,
        }
    }
}

impl Requirements {
    /// Whether a declared MIME type is accepted (case-insensitive).
    pub fn allows_mime_type(&self, mime: &str) -> bool {
        let lowered = mime.to_ascii_lowercase();
        ALLOWED_MIME_TYPES.contains(&lowered.as_str())
    }

    /// Whether a file name carries an accepted extension.
    ///
    /// The extension is the substring after the *last* dot, lower-cased;
    /// a name without a dot has no extension and is rejected.
    pub fn allows_extension(&self, file_name: &str) -> bool {
        extension_of(file_name).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
    }
}

/// Lower-cased extension of a file name (text after the last dot), if any.
pub fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Human-readable byte count for validation messages ("8.0 MB", "512.0 KB").
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let b = bytes as f64;
    if b >= MIB {
        format!("{:.1} MB", b / MIB)
    } else if b >= KIB {
        format!("{:.1} KB", b / KIB)
    } else {
        format!("{bytes} B")
    }
}
