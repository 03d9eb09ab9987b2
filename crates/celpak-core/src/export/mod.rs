//! PNG and GIF export of decoded images.
//!
//! Still images become one indexed PNG. PAK animations become either one
//! PNG per frame named `{stem}-{index}.png`, with the index zero-padded to
//! the number of digits in the frame count, or a single looping
//! `{stem}.gif` played at [`DEFAULT_FRAME_DURATION_MS`] per frame.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::DecodedImage;
use crate::decode::{DEFAULT_FRAME_DURATION_MS, DecodeError, ImageSource, open_image};

mod gif;
mod png;

pub use self::gif::{save_gif, write_gif};
pub use self::png::{save_png, write_png};

pub const PNG_EXTENSION: &str = "png";
pub const GIF_EXTENSION: &str = "gif";

/// Output format for [`export_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One PNG per image or frame.
    #[default]
    Png,
    /// One GIF per input; stills become a single-frame GIF.
    Gif,
    /// GIF for animated PAKs, PNG for everything else.
    Auto,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] ::png::EncodingError),
    #[error("GIF encoding failed: {0}")]
    Gif(#[from] ::gif::EncodingError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image dimensions {width}x{height} cannot be encoded")]
    Dimensions { width: usize, height: usize },
    #[error("input has no file name: {0}")]
    MissingFileName(PathBuf),
    #[error("no frames to encode")]
    NoFrames,
}

/// File name for frame `index` of a `frame_count`-frame export.
///
/// # Examples
/// ```
/// use celpak_core::export::frame_file_name;
///
/// assert_eq!(frame_file_name("FIRE", 3, 12, "png"), "FIRE-03.png");
/// assert_eq!(frame_file_name("FIRE", 0, 1, "png"), "FIRE-0.png");
/// ```
pub fn frame_file_name(stem: &str, index: usize, frame_count: usize, ext: &str) -> String {
    let width = frame_count.to_string().len();
    format!("{stem}-{index:0width$}.{ext}")
}

/// Decode `input` and write it into `out_dir` in the requested format.
///
/// Returns the written paths in frame order. `out_dir` is created when
/// missing.
///
/// # Errors
/// Returns `ExportError::Decode` for decoding failures and
/// `ExportError::Io`/`ExportError::Png`/`ExportError::Gif` when writing
/// fails.
pub fn export_file(
    input: &Path,
    out_dir: &Path,
    format: ExportFormat,
) -> Result<Vec<PathBuf>, ExportError> {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| ExportError::MissingFileName(input.to_path_buf()))?;

    let source = open_image(input)?;
    fs::create_dir_all(out_dir)?;

    let as_gif = match format {
        ExportFormat::Png => false,
        ExportFormat::Gif => true,
        ExportFormat::Auto => matches!(&source, ImageSource::Animation(pak) if pak.is_animated()),
    };

    let mut written = Vec::new();
    match source {
        ImageSource::Still(image) if as_gif => {
            let target = out_dir.join(format!("{stem}.{GIF_EXTENSION}"));
            save_gif(std::slice::from_ref(&image), DEFAULT_FRAME_DURATION_MS, &target)?;
            written.push(target);
        }
        ImageSource::Still(image) => {
            let target = out_dir.join(format!("{stem}.{PNG_EXTENSION}"));
            save_png(&image, &target)?;
            written.push(target);
        }
        ImageSource::Animation(pak) if as_gif => {
            let frames = pak.frames().collect::<Result<Vec<DecodedImage>, _>>()?;
            let target = out_dir.join(format!("{stem}.{GIF_EXTENSION}"));
            save_gif(&frames, pak.frame_duration_ms(), &target)?;
            written.push(target);
        }
        ImageSource::Animation(pak) => {
            let frame_count = pak.frame_count();
            for (index, frame) in pak.frames().enumerate() {
                let frame = frame?;
                let name = frame_file_name(&stem, index, frame_count, PNG_EXTENSION);
                let target = out_dir.join(name);
                save_png(&frame, &target)?;
                written.push(target);
            }
        }
    }
    debug!(
        "exported {} -> {} file(s) in {}",
        input.display(),
        written.len(),
        out_dir.display()
    );
    Ok(written)
}
