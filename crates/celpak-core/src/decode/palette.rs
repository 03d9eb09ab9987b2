use std::path::Path;

use log::debug;

use super::DecodeError;
use crate::Palette;
use crate::formats::palette::parse_vga_palette;
use crate::source::{find_palette_file, palette_candidates, read_palette_block};

/// Load a standalone 768-byte VGA palette file.
///
/// # Errors
/// Returns `DecodeError::Io` when the file cannot be opened or holds fewer
/// than 768 bytes.
pub fn load_palette_file(palette_path: &Path) -> Result<Palette, DecodeError> {
    let block = read_palette_block(palette_path)?;
    let palette = parse_vga_palette(&block)?;
    debug!("loaded palette {}", palette_path.display());
    Ok(palette)
}

/// Load the external palette that belongs to `image_path`.
///
/// `PALETTE.PAL` is looked up next to the image first, then one directory
/// up. There is no default palette.
///
/// # Errors
/// Returns `DecodeError::PaletteNotFound` when neither location has a
/// palette file, or the errors of [`load_palette_file`].
pub fn load_palette_for_image(image_path: &Path) -> Result<Palette, DecodeError> {
    let palette_path =
        find_palette_file(image_path).ok_or_else(|| DecodeError::PaletteNotFound {
            searched: palette_candidates(image_path),
        })?;
    load_palette_file(&palette_path)
}
