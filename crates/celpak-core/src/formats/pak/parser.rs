use super::error::PakError;
use super::layout;

/// Number of frames packed in a PAK file of `file_size` bytes.
///
/// # Examples
/// ```
/// use celpak_core::formats::pak::frame_count;
///
/// assert_eq!(frame_count(12_288).unwrap(), 3);
/// assert!(frame_count(4_000).is_err());
/// ```
///
/// # Errors
/// Returns `PakError::UnrecognizedSize` when the size is zero or not a
/// multiple of the frame size.
pub fn frame_count(file_size: u64) -> Result<usize, PakError> {
    if file_size == 0 || file_size % layout::FRAME_SIZE != 0 {
        return Err(PakError::UnrecognizedSize { size: file_size });
    }
    usize::try_from(file_size / layout::FRAME_SIZE)
        .map_err(|_| PakError::UnrecognizedSize { size: file_size })
}

/// Byte offset of frame `index` in a PAK holding `frame_count` frames.
///
/// # Errors
/// Returns `PakError::FrameIndexOutOfRange` when `index >= frame_count`.
pub fn frame_offset(index: usize, frame_count: usize) -> Result<u64, PakError> {
    if index >= frame_count {
        return Err(PakError::FrameIndexOutOfRange { index, frame_count });
    }
    Ok(index as u64 * layout::FRAME_SIZE)
}

#[cfg(test)]
mod tests {
    use super::{frame_count, frame_offset};
    use crate::formats::pak::error::PakError;

    #[test]
    fn frame_count_divides_by_block_size() {
        assert_eq!(frame_count(4096).unwrap(), 1);
        assert_eq!(frame_count(12_288).unwrap(), 3);
    }

    #[test]
    fn partial_block_is_rejected() {
        let err = frame_count(4096 + 1).unwrap_err();
        assert!(matches!(err, PakError::UnrecognizedSize { size: 4097 }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let err = frame_count(0).unwrap_err();
        assert!(matches!(err, PakError::UnrecognizedSize { size: 0 }));
    }

    #[test]
    fn frame_offset_is_block_aligned() {
        assert_eq!(frame_offset(0, 3).unwrap(), 0);
        assert_eq!(frame_offset(2, 3).unwrap(), 8192);
    }

    #[test]
    fn frame_offset_past_end_fails() {
        let err = frame_offset(3, 3).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("frame index 3 out of range"));
    }
}
