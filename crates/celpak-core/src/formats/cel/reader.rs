use super::error::CelError;
use super::layout;

pub struct CelReader<'a> {
    header: &'a [u8],
}

impl<'a> CelReader<'a> {
    pub fn new(header: &'a [u8]) -> Self {
        Self { header }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), CelError> {
        if self.header.len() < needed {
            return Err(CelError::TooShort {
                needed,
                actual: self.header.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], CelError> {
        self.header.get(range.clone()).ok_or(CelError::TooShort {
            needed: range.end,
            actual: self.header.len(),
        })
    }

    pub fn read_u16_le(&self, range: std::ops::Range<usize>) -> Result<u16, CelError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(CelError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Whether the header starts with the CEL magic. Short headers never match.
    pub fn has_magic(&self) -> bool {
        self.read_slice(layout::MAGIC_RANGE.clone())
            .is_ok_and(|magic| magic == layout::MAGIC)
    }
}

#[cfg(test)]
mod tests {
    use super::CelReader;
    use crate::formats::cel::error::CelError;
    use crate::formats::cel::layout;

    #[test]
    fn detects_magic() {
        let header = [0x19, 0x91, 0, 0, 0, 0];
        assert!(CelReader::new(&header).has_magic());
    }

    #[test]
    fn reversed_magic_does_not_match() {
        let header = [0x91, 0x19, 0, 0, 0, 0];
        assert!(!CelReader::new(&header).has_magic());
    }

    #[test]
    fn short_header_has_no_magic() {
        let header = [0x19];
        assert!(!CelReader::new(&header).has_magic());
    }

    #[test]
    fn reads_little_endian_dimensions() {
        let header = [0x19, 0x91, 0x40, 0x01, 0x38, 0x00];
        let reader = CelReader::new(&header);
        assert_eq!(reader.read_u16_le(layout::WIDTH_RANGE.clone()).unwrap(), 320);
        assert_eq!(reader.read_u16_le(layout::HEIGHT_RANGE.clone()).unwrap(), 56);
    }

    #[test]
    fn require_len_reports_sizes() {
        let header = [0x19, 0x91, 0x40];
        let err = CelReader::new(&header)
            .require_len(layout::HEADER_LEN)
            .unwrap_err();
        assert!(matches!(
            err,
            CelError::TooShort {
                needed: 6,
                actual: 3
            }
        ));
    }
}
