use log::warn;

use super::error::PaletteError;
use super::layout;
use crate::{Palette, Rgb};

/// Scale a 6-bit VGA channel value to 8 bits.
///
/// Values above 63 wrap modulo 256.
///
/// # Examples
/// ```
/// use celpak_core::formats::palette::scale_vga_channel;
///
/// assert_eq!(scale_vga_channel(0x3f), 252);
/// assert_eq!(scale_vga_channel(0x00), 0);
/// ```
pub fn scale_vga_channel(value: u8) -> u8 {
    value.wrapping_mul(layout::VGA_SCALE)
}

/// Decode a 768-byte VGA palette block into 256 8-bit RGB entries.
///
/// Only the first 768 bytes are used; trailing bytes are ignored.
///
/// # Errors
/// Returns `PaletteError::TooShort` when fewer than 768 bytes are given.
pub fn parse_vga_palette(bytes: &[u8]) -> Result<Palette, PaletteError> {
    let block = bytes
        .get(..layout::PALETTE_SIZE)
        .ok_or(PaletteError::TooShort {
            needed: layout::PALETTE_SIZE,
            actual: bytes.len(),
        })?;

    let out_of_range = block
        .iter()
        .filter(|&&value| value > layout::VGA_CHANNEL_MAX)
        .count();
    if out_of_range > 0 {
        warn!(
            "palette has {} channel values above {}; scaling wraps",
            out_of_range,
            layout::VGA_CHANNEL_MAX
        );
    }

    let mut colors = [Rgb(0, 0, 0); layout::PALETTE_ENTRIES];
    for (color, triple) in colors
        .iter_mut()
        .zip(block.chunks_exact(layout::CHANNELS_PER_ENTRY))
    {
        *color = Rgb(
            scale_vga_channel(triple[0]),
            scale_vga_channel(triple[1]),
            scale_vga_channel(triple[2]),
        );
    }
    Ok(Palette::new(colors))
}
