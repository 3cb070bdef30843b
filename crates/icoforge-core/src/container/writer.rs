//! ICO container assembly.

use super::{ContainerError, ENTRY_SIZE, HEADER_SIZE, ICON_RESOURCE_TYPE, MAX_ENTRIES};
use crate::encode::Frame;

/// Planes field of every entry.
const COLOR_PLANES: u16 = 1;
/// Payloads are always full color with alpha.
const BITS_PER_PIXEL: u16 = 32;

/// Check a frame count against the container's limits.
///
/// # Errors
///
/// `ContainerError::NoFrames` for zero, `ContainerError::TooManyFrames` above
/// 65535.
pub fn check_frame_count(count: usize) -> Result<u16, ContainerError> {
    if count == 0 {
        return Err(ContainerError::NoFrames);
    }
    if count > MAX_ENTRIES {
        return Err(ContainerError::TooManyFrames { count });
    }
    Ok(count as u16)
}

/// Pack frames into an ICO container.
///
/// Entries keep the order of `frames`; payloads follow the directory
/// back to back with no padding. Identical payloads are stored twice.
///
/// # Errors
///
/// Returns `NoFrames`/`TooManyFrames` for a bad frame count, and `TooLarge`
/// if a payload offset or length does not fit the 32-bit entry fields.
pub fn assemble(frames: &[Frame]) -> Result<Vec<u8>, ContainerError> {
    let count = check_frame_count(frames.len())?;

    let directory_len = HEADER_SIZE + ENTRY_SIZE * frames.len();
    let total_len = frames
        .iter()
        .try_fold(directory_len, |acc, frame| acc.checked_add(frame.len()))
        .filter(|len| u32::try_from(*len).is_ok())
        .ok_or(ContainerError::TooLarge)?;

    let mut out = Vec::with_capacity(total_len);

    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&ICON_RESOURCE_TYPE.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());

    // total_len fits in u32, so every offset and size below does too
    let mut offset = directory_len as u32;
    for frame in frames {
        let size = frame.len() as u32;
        let dim = frame.size().dimension_byte();

        out.push(dim); // width
        out.push(dim); // height
        out.push(0); // color palette
        out.push(0); // reserved
        out.extend_from_slice(&COLOR_PLANES.to_le_bytes());
        out.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());

        offset += size;
    }

    for frame in frames {
        out.extend_from_slice(frame.payload());
    }

    debug_assert_eq!(out.len(), total_len);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::IconSize;

    fn frame(side: u32, payload: &[u8]) -> Frame {
        Frame::new(IconSize::new(side).unwrap(), payload.to_vec())
    }

    fn u16_at(bytes: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([bytes[at], bytes[at + 1]])
    }

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn test_assemble_empty_fails() {
        assert!(matches!(assemble(&[]), Err(ContainerError::NoFrames)));
    }

    #[test]
    fn test_check_frame_count() {
        assert!(matches!(check_frame_count(0), Err(ContainerError::NoFrames)));
        assert_eq!(check_frame_count(1).unwrap(), 1);
        assert_eq!(check_frame_count(65535).unwrap(), 65535);
        assert!(matches!(
            check_frame_count(65536),
            Err(ContainerError::TooManyFrames { count: 65536 })
        ));
    }

    #[test]
    fn test_assemble_too_many_frames() {
        let frames = vec![frame(1, &[]); 65536];
        assert!(matches!(
            assemble(&frames),
            Err(ContainerError::TooManyFrames { count: 65536 })
        ));
    }

    #[test]
    fn test_assemble_exact_layout() {
        let frames = [frame(16, &[0xAA; 5]), frame(32, &[0xBB, 0xCC])];
        let ico = assemble(&frames).unwrap();

        assert_eq!(&ico[..6], &[0x00, 0x00, 0x01, 0x00, 0x02, 0x00]);

        // First entry
        assert_eq!(&ico[6..14], &[16, 16, 0, 0, 1, 0, 32, 0]);
        assert_eq!(u32_at(&ico, 14), 5);
        assert_eq!(u32_at(&ico, 18), 38);

        // Second entry
        assert_eq!(&ico[22..30], &[32, 32, 0, 0, 1, 0, 32, 0]);
        assert_eq!(u32_at(&ico, 30), 2);
        assert_eq!(u32_at(&ico, 34), 43);

        // Payloads, contiguous
        assert_eq!(&ico[38..43], &[0xAA; 5]);
        assert_eq!(&ico[43..], &[0xBB, 0xCC]);
        assert_eq!(ico.len(), 45);
    }

    #[test]
    fn test_assemble_single_frame_offset() {
        let ico = assemble(&[frame(48, b"png")]).unwrap();
        assert_eq!(u16_at(&ico, 4), 1);
        assert_eq!(u32_at(&ico, 18), 22);
        assert_eq!(&ico[22..], b"png");
    }

    #[test]
    fn test_assemble_256_uses_zero_dimension() {
        let ico = assemble(&[frame(256, &[1, 2, 3])]).unwrap();
        assert_eq!(ico[6], 0);
        assert_eq!(ico[7], 0);
    }

    #[test]
    fn test_assemble_keeps_order_and_duplicates() {
        let frames = [
            frame(64, &[1]),
            frame(16, &[2, 2]),
            frame(64, &[1]),
        ];
        let ico = assemble(&frames).unwrap();

        assert_eq!(u16_at(&ico, 4), 3);
        assert_eq!(ico[6], 64);
        assert_eq!(ico[22], 16);
        assert_eq!(ico[38], 64);

        let header = HEADER_SIZE + 3 * ENTRY_SIZE;
        assert_eq!(u32_at(&ico, 6 + 12) as usize, header);
        assert_eq!(u32_at(&ico, 22 + 12) as usize, header + 1);
        assert_eq!(u32_at(&ico, 38 + 12) as usize, header + 3);
        assert_eq!(ico.len(), header + 4);
    }
}
