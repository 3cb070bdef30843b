//! Image resampling for icon frame generation.
//!
//! Icons are square, so [`resize_square`] scales both axes independently to
//! the target side. A non-square source is stretched, not letterboxed.
//! All functions return new `SourceImage` instances without modifying the input.

use super::{FilterType, ResizeError, SourceImage};

/// Resize an image to exact dimensions.
///
/// Upscaling beyond the source dimensions is allowed.
///
/// # Errors
///
/// Returns `ResizeError::InvalidDimensions` if the source or the target has a
/// zero-length side.
pub fn resize(
    image: &SourceImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<SourceImage, ResizeError> {
    if image.is_empty() {
        return Err(ResizeError::InvalidDimensions {
            width: image.width(),
            height: image.height(),
        });
    }
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width() == width && image.height() == height {
        return Ok(image.clone());
    }

    let view = image.as_rgba_view().ok_or(ResizeError::InvalidDimensions {
        width: image.width(),
        height: image.height(),
    })?;

    let resized = image::imageops::resize(&view, width, height, filter.to_image_filter());

    Ok(SourceImage::from_rgba_image(resized))
}

/// Resize an image to a `side x side` square.
///
/// `FilterType::Nearest` is the cheapest option but produces blocky edges when
/// upscaling small sources; the default Lanczos3 is preferred for icons.
pub fn resize_square(
    image: &SourceImage,
    side: u32,
    filter: FilterType,
) -> Result<SourceImage, ResizeError> {
    resize(image, side, side, filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> SourceImage {
        // Gradient with a varying alpha channel
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
                pixels.push(if x < width / 2 { 0 } else { 255 }); // A
            }
        }
        SourceImage::from_raw(width, height, pixels).unwrap()
    }

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> SourceImage {
        let pixels = rgba.repeat((width * height) as usize);
        SourceImage::from_raw(width, height, pixels).unwrap()
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width(), 50);
        assert_eq!(resized.height(), 25);
        assert_eq!(resized.pixels().len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(32, 32);
        let resized = resize_square(&img, 32, FilterType::Lanczos3).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_square_from_landscape_stretches() {
        let img = create_test_image(200, 50);
        let resized = resize_square(&img, 48, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width(), 48);
        assert_eq!(resized.height(), 48);
    }

    #[test]
    fn test_resize_square_from_portrait_stretches() {
        let img = create_test_image(30, 90);
        let resized = resize_square(&img, 64, FilterType::Bilinear).unwrap();

        assert_eq!((resized.width(), resized.height()), (64, 64));
    }

    #[test]
    fn test_resize_upscale_single_pixel() {
        let img = solid(1, 1, [10, 20, 30, 40]);
        let resized = resize_square(&img, 256, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width(), 256);
        assert_eq!(resized.pixels().len(), 256 * 256 * 4);
    }

    #[test]
    fn test_resize_nearest_keeps_exact_colors() {
        let img = solid(64, 64, [255, 0, 0, 255]);
        let resized = resize_square(&img, 16, FilterType::Nearest).unwrap();

        assert!(resized
            .pixels()
            .chunks_exact(4)
            .all(|p| p == [255, 0, 0, 255]));
    }

    #[test]
    fn test_resize_keeps_fully_transparent_region() {
        let img = solid(40, 40, [0, 0, 0, 0]);
        let resized = resize_square(&img, 24, FilterType::Nearest).unwrap();
        assert!(resized.pixels().chunks_exact(4).all(|p| p[3] == 0));
    }

    #[test]
    fn test_resize_zero_source_error() {
        let img = SourceImage::from_raw(0, 10, vec![]).unwrap();
        assert_eq!(
            resize_square(&img, 16, FilterType::Bilinear),
            Err(ResizeError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_resize_zero_target_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
        assert!(resize_square(&img, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize_square(&img, 24, filter).unwrap();
            assert_eq!(resized.width(), 24);
            assert_eq!(resized.height(), 24);
        }
    }

    #[test]
    fn test_resize_is_deterministic() {
        let img = create_test_image(77, 33);
        let a = resize_square(&img, 48, FilterType::Lanczos3).unwrap();
        let b = resize_square(&img, 48, FilterType::Lanczos3).unwrap();
        assert_eq!(a, b);
    }
}
