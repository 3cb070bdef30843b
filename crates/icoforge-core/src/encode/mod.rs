//! Frame encoding for icoforge.
//!
//! Each resized raster becomes a PNG payload wrapped in a [`Frame`], ready
//! for the container assembler.
//!
//! # Examples
//!
//! ```ignore
//! use icoforge_core::encode::encode_png;
//!
//! let pixels = vec![0u8; 16 * 16 * 4]; // Transparent 16x16
//! let png = encode_png(&pixels, 16, 16).unwrap();
//! assert_eq!(&png[1..4], b"PNG");
//! ```

mod png;

pub use png::{encode_frame, encode_png, EncodeError, Frame};
