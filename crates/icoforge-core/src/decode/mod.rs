//! Source image decoding and resampling for icoforge.
//!
//! This module provides functionality for:
//! - Decoding JPEG, PNG, GIF and BMP input into an RGBA8 [`SourceImage`]
//! - Honoring EXIF orientation the way photo viewers do
//! - Resampling a source to the square sides an icon needs
//!
//! # Examples
//!
//! ```ignore
//! use icoforge_core::decode::{decode_image, resize_square, FilterType};
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let source = decode_image(&bytes).unwrap();
//! let small = resize_square(&source, 32, FilterType::Lanczos3).unwrap();
//! assert_eq!(small.width(), 32);
//! ```

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, decode_image_no_orientation};
pub use resize::{resize, resize_square};
pub use types::{DecodeError, FilterType, Orientation, ResizeError, SourceImage};

pub(crate) use types::rgba_len;
