use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Open image file with its size captured at open time.
pub(crate) struct ImageFile {
    file: File,
    size: u64,
}

impl ImageFile {
    pub(crate) fn open(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        Ok(Self { file, size })
    }

    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    /// Read up to `len` bytes from the start of the file.
    ///
    /// Shorter files yield fewer bytes; this never fails on EOF.
    pub(crate) fn read_prefix(&mut self, len: usize) -> std::io::Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut prefix = Vec::with_capacity(len);
        (&mut self.file).take(len as u64).read_to_end(&mut prefix)?;
        Ok(prefix)
    }

    /// Read exactly `len` bytes starting at `offset`.
    ///
    /// Truncated files fail with `ErrorKind::UnexpectedEof`; nothing is padded.
    pub(crate) fn read_exact_at(&mut self, offset: u64, len: usize) -> std::io::Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(offset))?;
        let mut buf = vec![0u8; len];
        self.file.read_exact(&mut buf)?;
        Ok(buf)
    }
}
