//! Square icon sizes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The largest side an ICO directory entry can describe.
pub const MAX_ICON_SIDE: u32 = 256;

/// A side length outside `1..=256` was requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Icon size {0} is out of range (1-{max})", max = MAX_ICON_SIDE)]
pub struct InvalidIconSize(pub u32);

/// Side length of one square icon frame.
///
/// The container stores width and height in a single byte where 0 means
/// 256, so only `1..=256` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IconSize(u32);

impl IconSize {
    /// Standard icon sizes, ascending.
    pub const DEFAULT_SET: [IconSize; 7] = [
        IconSize(16),
        IconSize(24),
        IconSize(32),
        IconSize(48),
        IconSize(64),
        IconSize(128),
        IconSize(256),
    ];

    pub fn new(side: u32) -> Option<Self> {
        (1..=MAX_ICON_SIDE).contains(&side).then_some(Self(side))
    }

    pub fn side(self) -> u32 {
        self.0
    }

    /// Encoding of this side in a directory entry's width/height byte.
    pub fn dimension_byte(self) -> u8 {
        if self.0 == MAX_ICON_SIDE {
            0
        } else {
            self.0 as u8
        }
    }

    /// The default size set as a vector.
    pub fn default_set() -> Vec<IconSize> {
        Self::DEFAULT_SET.to_vec()
    }
}

impl TryFrom<u32> for IconSize {
    type Error = InvalidIconSize;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InvalidIconSize(value))
    }
}

impl From<IconSize> for u32 {
    fn from(size: IconSize) -> Self {
        size.0
    }
}
