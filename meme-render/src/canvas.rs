//! Source image loading.
//!
//! Whatever the input format, the canvas is always 8-bit RGB: alpha is
//! dropped and palettes/greyscale are expanded on load.

use image::{ImageError, RgbImage};
use std::path::Path;

use crate::error::RenderError;

/// Where the source image comes from.
#[derive(Clone, Copy, Debug)]
pub enum ImageSource<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ImageSource<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes.as_slice())
    }
}

/// Decode an in-memory image. The format is sniffed from the content.
pub fn decode_canvas(bytes: &[u8]) -> Result<RgbImage, RenderError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Read and decode an image file. A missing or unreadable file is a
/// decode failure, same as corrupt content.
pub fn open_canvas(path: &Path) -> Result<RgbImage, RenderError> {
    let bytes = std::fs::read(path).map_err(ImageError::IoError)?;
    decode_canvas(&bytes)
}

pub fn load_canvas(source: ImageSource<'_>) -> Result<RgbImage, RenderError> {
    match source {
        ImageSource::Path(path) => open_canvas(path),
        ImageSource::Bytes(bytes) => decode_canvas(bytes),
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_rgba_png_drops_alpha() {
        let rgba = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 40]));
        let canvas = decode_canvas(&png_bytes(DynamicImage::ImageRgba8(rgba))).unwrap();
        assert_eq!(canvas.dimensions(), (4, 3));
        assert_eq!(canvas.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_decode_grayscale_expands() {
        let gray = image::GrayImage::from_pixel(2, 2, image::Luma([77]));
        let canvas = decode_canvas(&png_bytes(DynamicImage::ImageLuma8(gray))).unwrap();
        assert_eq!(canvas.get_pixel(1, 1).0, [77, 77, 77]);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_canvas(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RenderError::Decode(_)), "got {err}");
    }

    #[test]
    fn test_decode_truncated_png_fails() {
        let rgba = RgbaImage::from_pixel(16, 16, Rgba([1, 2, 3, 255]));
        let bytes = png_bytes(DynamicImage::ImageRgba8(rgba));
        let err = decode_canvas(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, RenderError::Decode(_)));
    }

    #[test]
    fn test_open_missing_file_is_decode_error() {
        let err = open_canvas(Path::new("/nonexistent/template.jpg")).unwrap_err();
        assert!(matches!(err, RenderError::Decode(ImageError::IoError(_))));
    }

    #[test]
    fn test_load_from_both_sources() {
        let bytes = png_bytes(DynamicImage::ImageRgb8(RgbImage::new(5, 7)));
        let from_bytes = load_canvas(ImageSource::from(&bytes)).unwrap();
        assert_eq!(from_bytes.dimensions(), (5, 7));
    }
}
