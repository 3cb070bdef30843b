//! icoforge Core - Image to icon conversion library
//!
//! This crate turns a single raster image into a multi-resolution ICO
//! container: decode, resample to each icon size, encode each frame as PNG,
//! and pack the frames behind an ICO directory.
//!
//! ```ignore
//! use icoforge_core::{convert, ConvertOptions};
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let ico = convert(&bytes, &ConvertOptions::default()).unwrap();
//! icoforge_core::save_icon("logo.ico", &ico).unwrap();
//! ```

pub mod container;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod size;

pub use container::{assemble, DirEntry, IconDirectory};
pub use convert::{convert, convert_image, save_icon, ConvertOptions, PipelineStage};
pub use decode::{decode_image, resize_square, FilterType, SourceImage};
pub use encode::{encode_frame, Frame};
pub use error::ConversionError;
pub use size::{IconSize, InvalidIconSize};
