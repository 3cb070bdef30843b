//! The image-to-icon pipeline.
//!
//! `decode -> resample (per size) -> encode (per size) -> assemble`.
//!
//! Per-size work runs in list order and frames are collected by index, so the
//! directory order depends only on the requested sizes. The first size that
//! fails decides the returned error. Nothing is written to disk here; callers
//! hand the finished buffer to [`save_icon`] or wherever they like.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::container::{assemble, check_frame_count};
use crate::decode::{
    decode_image, decode_image_no_orientation, resize_square, FilterType, SourceImage,
};
use crate::encode::{encode_frame, Frame};
use crate::error::ConversionError;
use crate::size::IconSize;

/// Options for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Frame sizes, in directory order.
    pub sizes: Vec<IconSize>,
    /// Resampling filter.
    pub filter: FilterType,
    /// Rotate/flip JPEG input according to its EXIF orientation tag.
    pub apply_orientation: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sizes: IconSize::default_set(),
            filter: FilterType::default(),
            apply_orientation: true,
        }
    }
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with a custom size list.
    pub fn with_sizes(sizes: Vec<IconSize>) -> Self {
        Self {
            sizes,
            ..Self::default()
        }
    }
}

/// Where the pipeline is, for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Idle,
    Decoding,
    Resampling(IconSize),
    Encoding(IconSize),
    Assembling,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Idle => f.write_str("idle"),
            PipelineStage::Decoding => f.write_str("decoding"),
            PipelineStage::Resampling(size) => write!(f, "resampling({})", size.side()),
            PipelineStage::Encoding(size) => write!(f, "encoding({})", size.side()),
            PipelineStage::Assembling => f.write_str("assembling"),
            PipelineStage::Done => f.write_str("done"),
        }
    }
}

/// Convert encoded image bytes (JPEG, PNG, GIF, BMP) into an ICO container.
///
/// # Errors
///
/// See [`ConversionError`]. No partial output is ever returned.
#[tracing::instrument(skip_all, fields(input_len = bytes.len(), frames = options.sizes.len()))]
pub fn convert(bytes: &[u8], options: &ConvertOptions) -> Result<Vec<u8>, ConversionError> {
    // Reject a bad size list before paying for a decode
    check_frame_count(options.sizes.len()).map_err(|e| failed(PipelineStage::Idle, e))?;

    tracing::debug!(stage = %PipelineStage::Decoding, "decoding source image");
    let decoded = if options.apply_orientation {
        decode_image(bytes)
    } else {
        decode_image_no_orientation(bytes)
    };
    let source = decoded.map_err(|e| failed(PipelineStage::Decoding, e))?;

    convert_image(&source, options)
}

/// Convert an already-decoded RGBA8 image into an ICO container.
pub fn convert_image(
    source: &SourceImage,
    options: &ConvertOptions,
) -> Result<Vec<u8>, ConversionError> {
    check_frame_count(options.sizes.len()).map_err(|e| failed(PipelineStage::Idle, e))?;

    if source.is_empty() {
        return Err(failed(
            PipelineStage::Idle,
            ConversionError::InvalidDimensions {
                width: source.width(),
                height: source.height(),
            },
        ));
    }

    tracing::debug!(
        width = source.width(),
        height = source.height(),
        filter = ?options.filter,
        "source ready"
    );

    let frames = options
        .sizes
        .iter()
        .map(|&size| render_frame(source, size, options.filter))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(stage = %PipelineStage::Assembling, "assembling container");
    let container = assemble(&frames).map_err(|e| failed(PipelineStage::Assembling, e))?;

    tracing::info!(
        stage = %PipelineStage::Done,
        frames = frames.len(),
        bytes = container.len(),
        "icon container ready"
    );
    Ok(container)
}

/// Resample and encode one frame.
pub fn render_frame(
    source: &SourceImage,
    size: IconSize,
    filter: FilterType,
) -> Result<Frame, ConversionError> {
    let stage = PipelineStage::Resampling(size);
    tracing::debug!(%stage, "resampling");
    let raster = resize_square(source, size.side(), filter).map_err(|e| failed(stage, e))?;

    let stage = PipelineStage::Encoding(size);
    let frame = encode_frame(&raster, size).map_err(|err| {
        failed(
            stage,
            ConversionError::EncodeFailure {
                side: size.side(),
                source: err,
            },
        )
    })?;
    tracing::debug!(%stage, payload_len = frame.len(), "frame encoded");

    Ok(frame)
}

/// Write a finished container to `path` in one call.
pub fn save_icon(path: impl AsRef<Path>, container: &[u8]) -> Result<(), ConversionError> {
    let path = path.as_ref();
    std::fs::write(path, container).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to write icon");
        ConversionError::Io(e)
    })?;
    tracing::info!(path = %path.display(), bytes = container.len(), "icon saved");
    Ok(())
}

fn failed(stage: PipelineStage, err: impl Into<ConversionError>) -> ConversionError {
    let err = err.into();
    tracing::warn!(%stage, error = %err, "conversion failed");
    err
}
