//! ICO container writing and reading.
//!
//! # Layout (little-endian)
//!
//! ```text
//! header   6 bytes   reserved=0 (u16), type=1 (u16), count (u16)
//! entry   16 bytes   width (u8, 0 = 256), height (u8), palette=0 (u8),
//!                    reserved=0 (u8), planes=1 (u16), bpp=32 (u16),
//!                    payload size (u32), payload offset (u32)
//! payloads           concatenated in entry order
//! ```

mod reader;
mod writer;

use thiserror::Error;

pub use reader::{DirEntry, IconDirectory};
pub use writer::{assemble, check_frame_count};

/// Size of the fixed container header.
pub const HEADER_SIZE: usize = 6;
/// Size of one directory entry.
pub const ENTRY_SIZE: usize = 16;
/// Resource type for icons (cursors use 2).
pub const ICON_RESOURCE_TYPE: u16 = 1;
/// The count field is a u16.
pub const MAX_ENTRIES: usize = u16::MAX as usize;

/// Errors from building or parsing a container.
#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("No frames to write")]
    NoFrames,

    #[error("Too many frames: {count} (maximum 65535)")]
    TooManyFrames { count: usize },

    /// Offsets and sizes are stored as u32.
    #[error("Container would exceed 4 GiB")]
    TooLarge,

    #[error("Container truncated: need {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    #[error("Not an icon container (reserved={reserved}, type={kind})")]
    InvalidHeader { reserved: u16, kind: u16 },

    #[error("Entry {index} payload starts at byte {offset}, inside the {directory_end}-byte directory")]
    PayloadInDirectory {
        index: usize,
        offset: u32,
        directory_end: usize,
    },

    #[error("Entry {index} payload ends at byte {end}, container is {len} bytes")]
    PayloadOutOfBounds { index: usize, end: u64, len: usize },
}
