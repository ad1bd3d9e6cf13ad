//! Test fixtures: image blobs with and without metadata.

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use img_parts::jpeg::Jpeg;
use img_parts::{Bytes, ImageEXIF};
use std::io::Cursor;

/// Plain RGB PNG of the given dimensions.
pub fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 100, 50]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("Failed to encode PNG");
    buffer
}

/// Semi-transparent RGBA PNG.
pub fn create_png_with_alpha(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 128]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .expect("Failed to encode PNG");
    buffer
}

/// JPEG with a fake EXIF segment carrying a GPS IFD pointer.
pub fn create_jpeg_with_gps_exif(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([90, 120, 180]));
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
        .expect("Failed to encode JPEG");

    let mut jpeg = Jpeg::from_bytes(buffer.into()).expect("Failed to parse JPEG");
    jpeg.set_exif(Some(Bytes::from_static(
        b"II*\x00\x08\x00\x00\x00\x01\x00\x25\x88\x04\x00\x01\x00\x00\x00\x1a\x00\x00\x00\x00\x00\x00\x00",
    )));
    jpeg.encoder().bytes().to_vec()
}

/// True when the blob parses as a JPEG carrying an EXIF segment.
pub fn has_exif(data: &[u8]) -> bool {
    Jpeg::from_bytes(data.to_vec().into())
        .map(|jpeg| jpeg.exif().is_some())
        .unwrap_or(false)
}
