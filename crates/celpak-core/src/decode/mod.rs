//! Decoding entry points.
//!
//! This layer composes the pure format parsers with file access from
//! `source`. Every call is self-contained: it opens the file, reads what it
//! needs and closes it again. Errors are typed and final; nothing is retried
//! and no other format is tried after a failure.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::formats::cel::error::CelError;
use crate::formats::cel::layout as cel_layout;
use crate::formats::common::apply_left_orientation;
use crate::formats::common::reader::lowercase_extension;
use crate::formats::pak::error::PakError;
use crate::formats::pak::layout as pak_layout;
use crate::formats::palette::error::PaletteError;
use crate::{DecodedImage, ImageInfo};

mod cel;
mod pak;
mod palette;

pub use cel::decode_cel;
pub use pak::{DEFAULT_FRAME_DURATION_MS, Frames, PakHandle};
pub use palette::{load_palette_file, load_palette_for_image};

/// Errors returned by the decoders.
///
/// # Examples
/// ```
/// use celpak_core::DecodeError;
///
/// let err = DecodeError::FrameIndexOutOfRange {
///     index: 3,
///     frame_count: 3,
/// };
/// assert!(err.to_string().contains("out of range"));
/// ```
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported extension for {path}: expected {expected}")]
    UnsupportedExtension {
        path: PathBuf,
        expected: &'static str,
    },
    #[error("unrecognized CEL file size: {size} bytes")]
    UnrecognizedCelSize { size: u64 },
    #[error("unrecognized PAK file size: {size} bytes (not a multiple of 4096)")]
    UnrecognizedPakSize { size: u64 },
    #[error("could not find PALETTE.PAL (searched: {})", display_paths(.searched))]
    PaletteNotFound { searched: Vec<PathBuf> },
    #[error("frame index {index} out of range: {frame_count} frames")]
    FrameIndexOutOfRange { index: usize, frame_count: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn unexpected_eof(message: String) -> DecodeError {
    DecodeError::Io(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        message,
    ))
}

/// LEFT-orientation transform; a short pixel block is a truncated file.
fn reorient(
    raw: &[u8],
    width: usize,
    height: usize,
) -> Result<(Vec<u8>, usize, usize), DecodeError> {
    apply_left_orientation(raw, width, height).ok_or_else(|| {
        unexpected_eof(format!(
            "pixel data too short: need {} bytes, got {}",
            width.saturating_mul(height),
            raw.len()
        ))
    })
}

impl DecodeError {
    fn from_cel(path: &Path, err: CelError) -> Self {
        match err {
            CelError::UnsupportedExtension { .. } => DecodeError::UnsupportedExtension {
                path: path.to_path_buf(),
                expected: ".cel",
            },
            CelError::UnrecognizedSize { size } => DecodeError::UnrecognizedCelSize { size },
            err @ CelError::TooShort { .. } => unexpected_eof(err.to_string()),
        }
    }
}

impl From<PakError> for DecodeError {
    fn from(value: PakError) -> Self {
        match value {
            PakError::UnrecognizedSize { size } => DecodeError::UnrecognizedPakSize { size },
            PakError::FrameIndexOutOfRange { index, frame_count } => {
                DecodeError::FrameIndexOutOfRange { index, frame_count }
            }
        }
    }
}

impl From<PaletteError> for DecodeError {
    fn from(value: PaletteError) -> Self {
        unexpected_eof(value.to_string())
    }
}

/// A decoded input: a single CEL image or an open PAK animation.
#[derive(Debug)]
pub enum ImageSource {
    Still(DecodedImage),
    Animation(PakHandle),
}

impl ImageSource {
    pub fn frame_count(&self) -> usize {
        match self {
            ImageSource::Still(_) => 1,
            ImageSource::Animation(pak) => pak.frame_count(),
        }
    }

    /// Decode frame `index`. A still image only has frame 0.
    ///
    /// # Errors
    /// Returns `DecodeError::FrameIndexOutOfRange` past the last frame, or
    /// any PAK frame decoding error.
    pub fn frame(&self, index: usize) -> Result<DecodedImage, DecodeError> {
        match self {
            ImageSource::Still(image) if index == 0 => Ok(image.clone()),
            ImageSource::Still(_) => Err(DecodeError::FrameIndexOutOfRange {
                index,
                frame_count: 1,
            }),
            ImageSource::Animation(pak) => pak.decode_frame(index),
        }
    }
}

/// Open `path` with the decoder matching its extension.
///
/// `.cel` files are decoded immediately; `.pak` files are opened and decode
/// frames on demand.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use celpak_core::{ImageSource, open_image};
///
/// match open_image(Path::new("GFX/DOOR.CEL"))? {
///     ImageSource::Still(image) => println!("{}x{}", image.width, image.height),
///     ImageSource::Animation(pak) => println!("{} frames", pak.frame_count()),
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns `DecodeError::UnsupportedExtension` for anything but `.cel` or
/// `.pak`, otherwise the error of the selected decoder.
pub fn open_image(path: &Path) -> Result<ImageSource, DecodeError> {
    match lowercase_extension(path).as_deref() {
        Some(cel_layout::EXTENSION) => decode_cel(path).map(ImageSource::Still),
        Some(pak_layout::EXTENSION) => PakHandle::open(path).map(ImageSource::Animation),
        _ => Err(DecodeError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: ".cel or .pak",
        }),
    }
}

/// Describe `path` without keeping any decoded pixels around.
///
/// # Errors
/// Same as [`open_image`]; CEL files are fully decoded to validate them.
pub fn describe(path: &Path) -> Result<ImageInfo, DecodeError> {
    match lowercase_extension(path).as_deref() {
        Some(cel_layout::EXTENSION) => {
            let (variant, image) = cel::decode_cel_variant(path)?;
            Ok(ImageInfo {
                path: path.display().to_string(),
                format: cel_layout::EXTENSION.to_string(),
                variant: variant.label().to_string(),
                width: image.width,
                height: image.height,
                frame_count: 1,
                bytes: std::fs::metadata(path)?.len(),
                frame_duration_ms: None,
            })
        }
        Some(pak_layout::EXTENSION) => {
            let pak = PakHandle::open(path)?;
            Ok(ImageInfo {
                path: path.display().to_string(),
                format: pak_layout::EXTENSION.to_string(),
                variant: "frames_64x64".to_string(),
                width: pak_layout::FRAME_WIDTH,
                height: pak_layout::FRAME_HEIGHT,
                frame_count: pak.frame_count(),
                bytes: pak.file_size(),
                frame_duration_ms: Some(pak.frame_duration_ms()),
            })
        }
        _ => Err(DecodeError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: ".cel or .pak",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::DecodeError;
    use crate::formats::cel::error::CelError;
    use crate::formats::pak::error::PakError;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    #[test]
    fn cel_errors_map_to_taxonomy() {
        let path = Path::new("door.bmp");
        let err = DecodeError::from_cel(
            path,
            CelError::UnsupportedExtension { extension: None },
        );
        assert!(matches!(err, DecodeError::UnsupportedExtension { .. }));

        let err = DecodeError::from_cel(path, CelError::UnrecognizedSize { size: 7 });
        assert!(matches!(err, DecodeError::UnrecognizedCelSize { size: 7 }));

        let err = DecodeError::from_cel(
            path,
            CelError::TooShort {
                needed: 6,
                actual: 2,
            },
        );
        match err {
            DecodeError::Io(io) => assert_eq!(io.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn pak_errors_map_to_taxonomy() {
        let err = DecodeError::from(PakError::UnrecognizedSize { size: 5 });
        assert!(matches!(err, DecodeError::UnrecognizedPakSize { size: 5 }));
        let err = DecodeError::from(PakError::FrameIndexOutOfRange {
            index: 4,
            frame_count: 2,
        });
        assert!(matches!(
            err,
            DecodeError::FrameIndexOutOfRange {
                index: 4,
                frame_count: 2
            }
        ));
    }

    #[test]
    fn short_pixel_block_is_unexpected_eof() {
        let err = super::reorient(&[0u8; 10], 4, 4).unwrap_err();
        match err {
            DecodeError::Io(io) => assert_eq!(io.kind(), ErrorKind::UnexpectedEof),
            other => panic!("unexpected error: {other:?}"),
        }
        let (pixels, width, height) = super::reorient(&[1, 2, 3, 4, 5, 6], 3, 2).unwrap();
        assert_eq!(pixels, vec![1, 4, 2, 5, 3, 6]);
        assert_eq!((width, height), (2, 3));
    }

    #[test]
    fn palette_not_found_lists_searched_paths() {
        let err = DecodeError::PaletteNotFound {
            searched: vec![PathBuf::from("a/PALETTE.PAL"), PathBuf::from("PALETTE.PAL")],
        };
        let msg = err.to_string();
        assert!(msg.contains("a/PALETTE.PAL, PALETTE.PAL"));
    }
}
