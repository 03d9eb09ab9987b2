use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::{DecodeError, reorient};
use super::palette::load_palette_for_image;
use crate::formats::common::reader::has_extension;
use crate::formats::pak::{frame_count, frame_offset, layout};
use crate::source::ImageFile;
use crate::{DecodedImage, Palette};

/// Frame duration used for playback; the format stores no timing.
pub const DEFAULT_FRAME_DURATION_MS: u32 = 100;

/// An opened PAK file.
///
/// The palette and frame count are resolved once by [`PakHandle::open`];
/// every [`PakHandle::decode_frame`] call reopens the file, so frames can be
/// decoded in any order. The handle holds no mutable state.
#[derive(Debug, Clone)]
pub struct PakHandle {
    path: PathBuf,
    file_size: u64,
    frame_count: usize,
    palette: Arc<Palette>,
}

impl PakHandle {
    /// Open a PAK file and load its external palette.
    ///
    /// # Examples
    /// ```no_run
    /// use std::path::Path;
    ///
    /// use celpak_core::PakHandle;
    ///
    /// let pak = PakHandle::open(Path::new("ANIM/FIRE.PAK"))?;
    /// for frame in pak.frames() {
    ///     let frame = frame?;
    ///     assert_eq!((frame.width, frame.height), (64, 64));
    /// }
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    ///
    /// # Errors
    /// Returns `UnsupportedExtension` for non-`.pak` paths,
    /// `UnrecognizedPakSize` when the size is not a non-zero multiple of
    /// 4096, `PaletteNotFound` without a palette, and `Io` on read failure.
    pub fn open(path: &Path) -> Result<Self, DecodeError> {
        if !has_extension(path, layout::EXTENSION) {
            return Err(DecodeError::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: ".pak",
            });
        }

        let file_size = ImageFile::open(path)?.size();
        let frame_count = frame_count(file_size)?;
        let palette = load_palette_for_image(path)?;
        debug!("{}: PAK with {} frames", path.display(), frame_count);

        Ok(Self {
            path: path.to_path_buf(),
            file_size,
            frame_count,
            palette: Arc::new(palette),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_size(&self) -> u64 {
        self.file_size
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn is_animated(&self) -> bool {
        self.frame_count > 1
    }

    pub fn frame_duration_ms(&self) -> u32 {
        DEFAULT_FRAME_DURATION_MS
    }

    /// Palette shared by every frame.
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Decode frame `index` as a 64x64 image.
    ///
    /// # Errors
    /// Returns `FrameIndexOutOfRange` when `index >= frame_count()` and `Io`
    /// when the file changed or cannot be read.
    pub fn decode_frame(&self, index: usize) -> Result<DecodedImage, DecodeError> {
        let offset = frame_offset(index, self.frame_count)?;
        debug!(
            "{}: frame {} at offset {}",
            self.path.display(),
            index,
            offset
        );

        let mut file = ImageFile::open(&self.path)?;
        let raw = file.read_exact_at(offset, layout::FRAME_SIZE as usize)?;
        let (indices, width, height) =
            reorient(&raw, layout::FRAME_WIDTH, layout::FRAME_HEIGHT)?;
        Ok(DecodedImage {
            width,
            height,
            indices,
            palette: Arc::clone(&self.palette),
        })
    }

    /// Decode all frames in order.
    pub fn frames(&self) -> Frames<'_> {
        Frames {
            pak: self,
            next: 0,
        }
    }
}

/// Iterator over the frames of a [`PakHandle`], in file order.
#[derive(Debug)]
pub struct Frames<'a> {
    pak: &'a PakHandle,
    next: usize,
}

impl Iterator for Frames<'_> {
    type Item = Result<DecodedImage, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.pak.frame_count {
            return None;
        }
        let frame = self.pak.decode_frame(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.pak.frame_count.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}
