//! Pipeline-level error type.

use thiserror::Error;

use crate::container::ContainerError;
use crate::decode::{DecodeError, ResizeError};
use crate::encode::EncodeError;

/// Everything that can stop an image from becoming an icon.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// Input bytes are not a supported, well-formed image.
    #[error("Failed to decode image: {0}")]
    Decode(#[from] DecodeError),

    /// The source image has a zero-length side.
    #[error("Invalid source dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A frame could not be encoded.
    #[error("Failed to encode {side}x{side} frame: {source}")]
    EncodeFailure {
        side: u32,
        #[source]
        source: EncodeError,
    },

    /// The size list was empty.
    #[error("No icon sizes requested")]
    NoFrames,

    /// More sizes than the container's u16 count field can hold.
    #[error("Too many icon sizes: {count} (maximum 65535)")]
    TooManyFrames { count: usize },

    /// Any other container-level failure.
    #[error("Failed to assemble icon: {0}")]
    Container(ContainerError),

    /// Writing the finished container failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ResizeError> for ConversionError {
    fn from(err: ResizeError) -> Self {
        match err {
            ResizeError::InvalidDimensions { width, height } => {
                ConversionError::InvalidDimensions { width, height }
            }
        }
    }
}

impl From<ContainerError> for ConversionError {
    fn from(err: ContainerError) -> Self {
        match err {
            ContainerError::NoFrames => ConversionError::NoFrames,
            ContainerError::TooManyFrames { count } => ConversionError::TooManyFrames { count },
            other => ConversionError::Container(other),
        }
    }
}
