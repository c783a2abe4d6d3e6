//! # panocheck
//!
//! Validation and normalization of equirectangular 360° panorama images
//! before upload to a virtual-tour viewer.
//!
//! A spherical viewer maps a flat image onto the inside of a sphere, and
//! that projection only works when the frame is 2:1 (full 360° horizontal
//! by 180° vertical). panocheck enforces that geometry plus the practical
//! bounds around it (resolution floor and ceiling, file size window,
//! format allowlist), scores each image, and normalizes uploads by
//! recompressing to an exact 2:1 JPEG and generating preview thumbnails.
//!
//! # Pipeline
//!
//! ```text
//! blob + declared type/name/size
//!   → validate_image   → ValidationReport   (errors / warnings / info / advice)
//!   → compress_image   → CompressionSummary (exact-2:1 JPEG, size delta)
//!   → generate_preview → Preview            (proportional thumbnail data URL)
//! ```
//!
//! Each call is independent and synchronous: fresh, unshared result values,
//! no cross-call state, no retries, no cancellation. Decode and encode
//! failures come back as [`CodecError`] values; nothing panics across the
//! API boundary, callers branch on the `Result`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`requirements`] | Static validation thresholds and allowlists |
//! | [`calculations`] | Pure dimension/score math, testable without I/O |
//! | [`codec`] | [`ImageCodec`] trait seam, `Quality`, magic-byte sniffing |
//! | [`rust_codec`] | Production codec on the `image` crate (JPEG/PNG, Lanczos3) |
//! | [`report`] | Result value types, all serde-serializable |
//! | [`operations`] | The five public operations and [`UploadSource`] |
//!
//! # Example
//!
//! ```no_run
//! use panocheck::{Requirements, RustCodec, UploadSource, validate_image};
//!
//! let codec = RustCodec::new();
//! let source = UploadSource::from_path("living-room.jpg".as_ref())?;
//! let report = validate_image(&codec, &source, &Requirements::default());
//!
//! if !report.valid {
//!     for error in &report.errors {
//!         eprintln!("rejected: {error}");
//!     }
//! }
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Design Decisions
//!
//! ## Free functions over a validator object
//!
//! The validator holds no mutable state, only [`Requirements`], which is
//! immutable for the process lifetime. So the API is free functions taking
//! an explicit codec and requirements value, not a stateful service.
//!
//! ## Accumulate, don't short-circuit
//!
//! A rejected upload should tell the user everything wrong at once: a file
//! can collect a type error *and* a size error in one report. The single
//! exception is an unreadable image, which ends validation early because
//! every remaining check needs decoded dimensions.
//!
//! ## Codec behind a trait
//!
//! Pixel work sits behind [`ImageCodec`] so validation and compression
//! logic is exercised against a recording mock, and the `image`-crate
//! codec is tested separately on synthetic fixtures. Only JPEG and PNG
//! decoders are compiled in, the same set the allowlist accepts.

pub mod calculations;
pub mod codec;
pub mod operations;
pub mod report;
pub mod requirements;
pub mod rust_codec;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use codec::{CodecError, Dimensions, ImageCodec, Quality, sniff_mime_type};
pub use operations::{
    CompressionConfig, DEFAULT_AUTO_COMPRESS_TARGET_KB, PreviewConfig, UploadSource,
    can_auto_compress, compress_image, generate_preview, get_image_info, validate_image,
};
pub use report::{CompressionSummary, ImageInfo, Preview, ValidationReport};
pub use requirements::{ALLOWED_EXTENSIONS, ALLOWED_MIME_TYPES, Requirements};
pub use rust_codec::RustCodec;
