//! Image sanitizer - metadata removal via forced re-encode
//!
//! Stripping tags in place is insufficient: JPEG alone can carry metadata in
//! several auxiliary segments (EXIF, XMP, IPTC, ICC), and other containers
//! have their own. Decoding to pixels and re-encoding from scratch guarantees
//! that no auxiliary segment survives, whatever the input container was.

use image::ImageReader;
use std::io::Cursor;
use thiserror::Error;

/// Fixed encode quality for sanitized output.
pub const JPEG_QUALITY: f32 = 95.0;

/// Sanitizer errors
#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),
}

/// A sanitized image: metadata-free JPEG bytes plus pixel dimensions.
#[derive(Debug, Clone)]
pub struct SanitizedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Remove all metadata from an image payload.
///
/// Decodes the input (format guessed from the bytes, the declared content
/// type is not trusted), flattens to three-channel RGB, and re-encodes as
/// JPEG with no metadata payload. Alpha is discarded, not composited against
/// a background. Output dimensions always equal input dimensions.
pub fn sanitize(raw: &[u8]) -> Result<SanitizedImage, SanitizeError> {
    let reader = ImageReader::new(Cursor::new(raw))
        .with_guessed_format()
        .map_err(|e| SanitizeError::Decode(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| SanitizeError::Decode(e.to_string()))?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    let data = encode_jpeg(&rgb).map_err(|e| SanitizeError::Encode(e.to_string()))?;

    tracing::debug!(
        width,
        height,
        input_bytes = raw.len(),
        output_bytes = data.len(),
        "Image sanitized"
    );

    Ok(SanitizedImage {
        data,
        width,
        height,
    })
}

/// Encode RGB pixels as JPEG using mozjpeg, with no EXIF/XMP/ICC payload.
fn encode_jpeg(rgb: &image::RgbImage) -> std::io::Result<Vec<u8>> {
    let (width, height) = rgb.dimensions();

    let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
    comp.set_size(width as usize, height as usize);
    comp.set_quality(JPEG_QUALITY);
    comp.set_progressive_mode();
    comp.set_optimize_coding(true);

    let mut comp = comp.start_compress(Vec::new())?;
    comp.write_scanlines(rgb)?;
    comp.finish()
}
