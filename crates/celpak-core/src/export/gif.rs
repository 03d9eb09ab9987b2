use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gif::{Encoder, Frame, Repeat};

use super::ExportError;
use crate::DecodedImage;

/// Encode `frames` as a looping, palette-indexed GIF.
///
/// The first frame's palette becomes the global color table; a later frame
/// carries a local table only when its palette differs. `delay_ms` is
/// rounded down to GIF centiseconds (minimum 1).
///
/// # Errors
/// Returns `ExportError::NoFrames` for an empty slice,
/// `ExportError::Dimensions` when frames exceed 65535 pixels or differ in
/// size, and `ExportError::Gif` when encoding or writing fails.
pub fn write_gif<W: Write>(
    frames: &[DecodedImage],
    delay_ms: u32,
    writer: W,
) -> Result<W, ExportError> {
    let first = frames.first().ok_or(ExportError::NoFrames)?;
    let dimensions = |image: &DecodedImage| ExportError::Dimensions {
        width: image.width,
        height: image.height,
    };
    let width = u16::try_from(first.width).map_err(|_| dimensions(first))?;
    let height = u16::try_from(first.height).map_err(|_| dimensions(first))?;
    let delay = u16::try_from(delay_ms / 10).unwrap_or(u16::MAX).max(1);

    let global_palette = first.palette.to_flat_rgb();
    let mut encoder = Encoder::new(writer, width, height, &global_palette)?;
    encoder.set_repeat(Repeat::Infinite)?;

    for image in frames {
        if image.width != first.width || image.height != first.height {
            return Err(dimensions(image));
        }
        let palette = (image.palette != first.palette).then(|| image.palette.to_flat_rgb());
        let frame = Frame {
            width,
            height,
            delay,
            palette,
            buffer: Cow::Borrowed(image.indices.as_slice()),
            ..Default::default()
        };
        encoder.write_frame(&frame)?;
    }
    Ok(encoder.into_inner()?)
}

/// Write `frames` as a GIF file at `path`, replacing any existing file.
///
/// # Errors
/// Returns `ExportError::Io` when the file cannot be created, otherwise the
/// errors of [`write_gif`].
pub fn save_gif(frames: &[DecodedImage], delay_ms: u32, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = write_gif(frames, delay_ms, BufWriter::new(file))?;
    writer.flush()?;
    Ok(())
}
