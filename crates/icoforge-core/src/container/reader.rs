//! ICO directory parsing.
//!
//! Consumers of an icon read the directory to pick the frame that best fits
//! the size they are about to draw. [`IconDirectory`] does the same for
//! containers this crate (or any other ICO writer) produced.

use serde::Serialize;

use super::{ContainerError, ENTRY_SIZE, HEADER_SIZE, ICON_RESOURCE_TYPE};

/// One parsed directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    /// Width in pixels, with the stored 0 already expanded to 256.
    pub width: u32,
    pub height: u32,
    pub color_count: u8,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    /// Payload length in bytes.
    pub size: u32,
    /// Absolute offset of the payload.
    pub offset: u32,
}

/// The header and entries of an ICO container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconDirectory {
    /// Entry count from the header; always `entries.len()`.
    pub count: usize,
    pub entries: Vec<DirEntry>,
}

impl IconDirectory {
    /// Parse and validate the directory of an ICO container.
    ///
    /// # Errors
    ///
    /// - `Truncated` if the header or directory is cut short
    /// - `InvalidHeader` if the reserved field is not 0 or the type is not icon
    /// - `NoFrames` if the directory is empty
    /// - `PayloadInDirectory` if an entry's payload starts inside the header or directory
    /// - `PayloadOutOfBounds` if an entry points past the end of `bytes`
    pub fn parse(bytes: &[u8]) -> Result<Self, ContainerError> {
        if bytes.len() < HEADER_SIZE {
            return Err(ContainerError::Truncated {
                needed: HEADER_SIZE,
                actual: bytes.len(),
            });
        }

        let reserved = read_u16(bytes, 0);
        let kind = read_u16(bytes, 2);
        if reserved != 0 || kind != ICON_RESOURCE_TYPE {
            return Err(ContainerError::InvalidHeader { reserved, kind });
        }

        let count = read_u16(bytes, 4) as usize;
        if count == 0 {
            return Err(ContainerError::NoFrames);
        }

        let needed = HEADER_SIZE + ENTRY_SIZE * count;
        if bytes.len() < needed {
            return Err(ContainerError::Truncated {
                needed,
                actual: bytes.len(),
            });
        }

        let entries = (0..count)
            .map(|index| {
                let at = HEADER_SIZE + ENTRY_SIZE * index;
                let entry = DirEntry {
                    width: expand_dimension(bytes[at]),
                    height: expand_dimension(bytes[at + 1]),
                    color_count: bytes[at + 2],
                    color_planes: read_u16(bytes, at + 4),
                    bits_per_pixel: read_u16(bytes, at + 6),
                    size: read_u32(bytes, at + 8),
                    offset: read_u32(bytes, at + 12),
                };

                if (entry.offset as usize) < needed {
                    return Err(ContainerError::PayloadInDirectory {
                        index,
                        offset: entry.offset,
                        directory_end: needed,
                    });
                }

                // u64 so a 32-bit usize cannot wrap
                let end = entry.offset as u64 + entry.size as u64;
                if end > bytes.len() as u64 {
                    return Err(ContainerError::PayloadOutOfBounds {
                        index,
                        end,
                        len: bytes.len(),
                    });
                }
                Ok(entry)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { count, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slice the payload of entry `index` out of the container it was parsed from.
    pub fn payload<'a>(&self, bytes: &'a [u8], index: usize) -> Option<&'a [u8]> {
        let entry = self.entries.get(index)?;
        let start = usize::try_from(entry.offset).ok()?;
        let end = start.checked_add(usize::try_from(entry.size).ok()?)?;
        bytes.get(start..end)
    }

    /// Pick the entry to draw at `side` pixels.
    ///
    /// Returns the smallest entry at least `side` wide, or the largest entry
    /// when every entry is smaller. Ties go to the earlier entry.
    pub fn best_match(&self, side: u32) -> Option<&DirEntry> {
        let mut at_least = None::<&DirEntry>;
        let mut largest = None::<&DirEntry>;

        for entry in &self.entries {
            if entry.width >= side && at_least.map_or(true, |best| entry.width < best.width) {
                at_least = Some(entry);
            }
            if largest.map_or(true, |best| entry.width > best.width) {
                largest = Some(entry);
            }
        }

        at_least.or(largest)
    }
}

fn expand_dimension(byte: u8) -> u32 {
    if byte == 0 {
        256
    } else {
        byte as u32
    }
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
