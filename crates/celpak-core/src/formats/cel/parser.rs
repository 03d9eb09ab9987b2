use serde::{Deserialize, Serialize};

use super::error::CelError;
use super::layout;
use super::reader::CelReader;

/// On-disk CEL layout, resolved once from the extension, header and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CelVariant {
    /// Magic + dimensions + embedded palette, TOP orientation.
    Headered,
    /// 4096 bytes, 64x64, LEFT orientation, external palette.
    Fixed64x64,
    /// 4160 bytes, 65x64 on disk, LEFT orientation, external palette.
    Fixed65x64,
    /// 3594 bytes, 64x56 on disk, LEFT orientation, external palette.
    Fixed64x56,
}

impl CelVariant {
    /// On-disk `(width, height)` for the headerless variants.
    ///
    /// Headered files carry their own dimensions, so this returns `None`.
    pub fn nominal_dimensions(self) -> Option<(usize, usize)> {
        match self {
            CelVariant::Headered => None,
            CelVariant::Fixed64x64 => Some((64, 64)),
            CelVariant::Fixed65x64 => Some((65, 64)),
            CelVariant::Fixed64x56 => Some((64, 56)),
        }
    }

    pub fn is_headered(self) -> bool {
        matches!(self, CelVariant::Headered)
    }

    pub fn label(self) -> &'static str {
        match self {
            CelVariant::Headered => "headered",
            CelVariant::Fixed64x64 => "fixed_64x64",
            CelVariant::Fixed65x64 => "fixed_65x64",
            CelVariant::Fixed64x56 => "fixed_64x56",
        }
    }
}

/// Dimensions declared by a headered CEL file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelHeader {
    pub width: u16,
    pub height: u16,
}

impl CelHeader {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Resolve the CEL layout of a file.
///
/// `extension` is the file extension without the dot (any case), `header`
/// the leading bytes of the file (may be shorter than the full header) and
/// `file_size` the total size in bytes. The magic check wins over the size
/// table, so a 4096-byte file starting with `0x19 0x91` is headered.
///
/// # Examples
/// ```
/// use celpak_core::formats::cel::{CelVariant, classify_cel};
///
/// let variant = classify_cel(Some("CEL"), &[0u8; 6], 4160).unwrap();
/// assert_eq!(variant, CelVariant::Fixed65x64);
/// ```
///
/// # Errors
/// Returns `CelError::UnsupportedExtension` for anything but `.cel`, and
/// `CelError::UnrecognizedSize` for headerless files of an unknown size.
pub fn classify_cel(
    extension: Option<&str>,
    header: &[u8],
    file_size: u64,
) -> Result<CelVariant, CelError> {
    let is_cel = extension.is_some_and(|ext| ext.eq_ignore_ascii_case(layout::EXTENSION));
    if !is_cel {
        return Err(CelError::UnsupportedExtension {
            extension: extension.map(str::to_string),
        });
    }

    if CelReader::new(header).has_magic() {
        return Ok(CelVariant::Headered);
    }

    match file_size {
        layout::FIXED_64X64_SIZE => Ok(CelVariant::Fixed64x64),
        layout::FIXED_65X64_SIZE => Ok(CelVariant::Fixed65x64),
        layout::FIXED_64X56_SIZE => Ok(CelVariant::Fixed64x56),
        size => Err(CelError::UnrecognizedSize { size }),
    }
}

/// Parse the width and height of a headered CEL file.
///
/// # Errors
/// Returns `CelError::TooShort` when fewer than six header bytes are given.
pub fn parse_header(header: &[u8]) -> Result<CelHeader, CelError> {
    let reader = CelReader::new(header);
    reader.require_len(layout::HEADER_LEN)?;
    let width = reader.read_u16_le(layout::WIDTH_RANGE.clone())?;
    let height = reader.read_u16_le(layout::HEIGHT_RANGE.clone())?;
    Ok(CelHeader { width, height })
}

#[cfg(test)]
mod tests {
    use super::{CelVariant, classify_cel, parse_header};
    use crate::formats::cel::error::CelError;

    fn headered(width: u16, height: u16) -> Vec<u8> {
        let mut header = vec![0x19, 0x91];
        header.extend_from_slice(&width.to_le_bytes());
        header.extend_from_slice(&height.to_le_bytes());
        header
    }

    #[test]
    fn magic_selects_headered_layout() {
        let header = headered(320, 200);
        let variant = classify_cel(Some("cel"), &header, 64_800).unwrap();
        assert_eq!(variant, CelVariant::Headered);
    }

    #[test]
    fn magic_wins_over_size_table() {
        let header = headered(8, 8);
        let variant = classify_cel(Some("cel"), &header, 4096).unwrap();
        assert_eq!(variant, CelVariant::Headered);
    }

    #[test]
    fn size_table_selects_headerless_layouts() {
        let header = [0u8; 6];
        assert_eq!(
            classify_cel(Some("cel"), &header, 4096).unwrap(),
            CelVariant::Fixed64x64
        );
        assert_eq!(
            classify_cel(Some("cel"), &header, 4160).unwrap(),
            CelVariant::Fixed65x64
        );
        assert_eq!(
            classify_cel(Some("cel"), &header, 3594).unwrap(),
            CelVariant::Fixed64x56
        );
    }

    #[test]
    fn unknown_size_is_rejected() {
        let err = classify_cel(Some("cel"), &[0u8; 6], 4097).unwrap_err();
        assert!(matches!(err, CelError::UnrecognizedSize { size: 4097 }));
    }

    #[test]
    fn empty_file_is_rejected_by_size() {
        let err = classify_cel(Some("cel"), &[], 0).unwrap_err();
        assert!(matches!(err, CelError::UnrecognizedSize { size: 0 }));
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert!(classify_cel(Some("CeL"), &[0u8; 6], 4096).is_ok());
    }

    #[test]
    fn other_extensions_are_rejected() {
        let err = classify_cel(Some("pak"), &[0u8; 6], 4096).unwrap_err();
        assert!(matches!(err, CelError::UnsupportedExtension { .. }));
        let err = classify_cel(None, &[0u8; 6], 4096).unwrap_err();
        assert!(matches!(
            err,
            CelError::UnsupportedExtension { extension: None }
        ));
    }

    #[test]
    fn nominal_dimensions_follow_size_table() {
        assert_eq!(CelVariant::Headered.nominal_dimensions(), None);
        assert_eq!(CelVariant::Fixed64x64.nominal_dimensions(), Some((64, 64)));
        assert_eq!(CelVariant::Fixed65x64.nominal_dimensions(), Some((65, 64)));
        assert_eq!(CelVariant::Fixed64x56.nominal_dimensions(), Some((64, 56)));
    }

    #[test]
    fn parse_header_reads_dimensions() {
        let header = parse_header(&headered(320, 200)).unwrap();
        assert_eq!(header.width, 320);
        assert_eq!(header.height, 200);
        assert_eq!(header.pixel_count(), 64_000);
    }

    #[test]
    fn parse_header_rejects_truncated_header() {
        let err = parse_header(&[0x19, 0x91, 0x40]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("CEL header too short"));
    }
}
