//! PNG encoding for icon frames.
//!
//! Frames are embedded in the container as PNG, which is lossless and keeps
//! the alpha channel intact. Compression and filter settings are fixed so the
//! same raster always produces the same bytes.

use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::{rgba_len, SourceImage};
use crate::size::IconSize;

/// Largest dimension the PNG format can carry.
const PNG_MAX_DIMENSION: u32 = i32::MAX as u32;

/// Errors that can occur during frame encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero or beyond what PNG can store
    #[error("Invalid dimensions: {width}x{height} cannot be encoded as PNG")]
    InvalidDimensions { width: u32, height: u32 },

    /// Raster is not the square the frame size calls for
    #[error("Raster is {width}x{height}, expected {side}x{side}")]
    SizeMismatch { width: u32, height: u32, side: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// One resized, encoded icon image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    size: IconSize,
    payload: Vec<u8>,
}

impl Frame {
    /// Wrap an already-encoded PNG payload.
    pub fn new(size: IconSize, payload: Vec<u8>) -> Self {
        Self { size, payload }
    }

    pub fn size(&self) -> IconSize {
        self.size
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.size.side()
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

/// Encode RGBA8 pixel data to PNG bytes.
///
/// # Errors
///
/// Returns an error if the dimensions are zero or too large for PNG, if the
/// pixel buffer length is not `width * height * 4`, or if the encoder fails.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 || width > PNG_MAX_DIMENSION || height > PNG_MAX_DIMENSION {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected = rgba_len(width, height);
    if pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new_with_quality(
        &mut buffer,
        CompressionType::Default,
        PngFilterType::Adaptive,
    );

    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a resized square raster into a [`Frame`] of the given size.
pub fn encode_frame(raster: &SourceImage, size: IconSize) -> Result<Frame, EncodeError> {
    let side = size.side();
    if raster.width() != side || raster.height() != side {
        return Err(EncodeError::SizeMismatch {
            width: raster.width(),
            height: raster.height(),
            side,
        });
    }

    let payload = encode_png(raster.pixels(), side, side)?;
    Ok(Frame::new(size, payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn size(side: u32) -> IconSize {
        IconSize::new(side).unwrap()
    }

    fn pattern(side: u32) -> SourceImage {
        let mut pixels = Vec::with_capacity(rgba_len(side, side));
        for y in 0..side {
            for x in 0..side {
                pixels.extend_from_slice(&[
                    (x * 7) as u8,
                    (y * 11) as u8,
                    ((x ^ y) * 3) as u8,
                    ((x + y) * 5) as u8,
                ]);
            }
        }
        SourceImage::from_raw(side, side, pixels).unwrap()
    }

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png(&[255, 0, 0, 255], 1, 1).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_round_trip_is_lossless() {
        let raster = pattern(32);
        let png = encode_png(raster.pixels(), 32, 32).unwrap();

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (32, 32));
        assert_eq!(decoded.as_raw().as_slice(), raster.pixels());
    }

    #[test]
    fn test_encode_png_is_deterministic() {
        let raster = pattern(48);
        let a = encode_png(raster.pixels(), 48, 48).unwrap();
        let b = encode_png(raster.pixels(), 48, 48).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data() {
        let result = encode_png(&[0u8; 15], 2, 2);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_encode_png_zero_dimensions() {
        assert!(matches!(
            encode_png(&[], 0, 4),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_png(&[], 4, 0),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_encode_png_oversized_dimensions() {
        let result = encode_png(&[], u32::MAX, 1);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_frame() {
        let frame = encode_frame(&pattern(16), size(16)).unwrap();
        assert_eq!(frame.side(), 16);
        assert_eq!(frame.len(), frame.payload().len());
        assert!(!frame.is_empty());
        assert_eq!(&frame.payload()[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_frame_size_mismatch() {
        let result = encode_frame(&pattern(16), size(32));
        assert!(matches!(
            result,
            Err(EncodeError::SizeMismatch {
                width: 16,
                height: 16,
                side: 32
            })
        ));
    }
}
