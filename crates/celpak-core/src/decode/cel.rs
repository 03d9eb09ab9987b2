use std::path::Path;
use std::sync::Arc;

use log::debug;

use super::{DecodeError, reorient};
use super::palette::load_palette_for_image;
use crate::DecodedImage;
use crate::formats::cel::{CelVariant, classify_cel, layout, parse_header};
use crate::formats::common::reader::lowercase_extension;
use crate::formats::palette::layout::PALETTE_SIZE;
use crate::formats::palette::parse_vga_palette;
use crate::source::ImageFile;

/// Decode a single CEL image.
///
/// Headered files use their embedded palette and row-major pixel data.
/// Headerless files are sized by the file length, use the external
/// `PALETTE.PAL` and are reoriented, which swaps the on-disk width and
/// height (a 65x64 file yields a 64x65 image).
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use celpak_core::decode_cel;
///
/// let image = decode_cel(Path::new("GFX/DOOR.CEL"))?;
/// assert_eq!(image.indices.len(), image.width * image.height);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
/// Returns `UnsupportedExtension` for non-`.cel` paths,
/// `UnrecognizedCelSize` for unknown headerless sizes, `PaletteNotFound`
/// when a headerless file has no palette, and `Io` for read failures
/// including truncated pixel data.
pub fn decode_cel(path: &Path) -> Result<DecodedImage, DecodeError> {
    decode_cel_variant(path).map(|(_, image)| image)
}

pub(super) fn decode_cel_variant(
    path: &Path,
) -> Result<(CelVariant, DecodedImage), DecodeError> {
    let extension = lowercase_extension(path);
    if extension.as_deref() != Some(layout::EXTENSION) {
        return Err(DecodeError::UnsupportedExtension {
            path: path.to_path_buf(),
            expected: ".cel",
        });
    }

    let mut file = ImageFile::open(path)?;
    let header = file.read_prefix(layout::HEADER_LEN)?;
    let variant = classify_cel(extension.as_deref(), &header, file.size())
        .map_err(|err| DecodeError::from_cel(path, err))?;
    debug!(
        "{}: CEL variant {} ({} bytes)",
        path.display(),
        variant.label(),
        file.size()
    );

    let image = match variant.nominal_dimensions() {
        None => decode_headered(path, &mut file, &header)?,
        Some((width, height)) => decode_headerless(path, &mut file, width, height)?,
    };
    Ok((variant, image))
}

fn decode_headered(
    path: &Path,
    file: &mut ImageFile,
    header: &[u8],
) -> Result<DecodedImage, DecodeError> {
    let header = parse_header(header).map_err(|err| DecodeError::from_cel(path, err))?;
    let palette_block = file.read_exact_at(layout::PALETTE_OFFSET, PALETTE_SIZE)?;
    let palette = parse_vga_palette(&palette_block)?;
    let indices = file.read_exact_at(layout::PIXEL_OFFSET, header.pixel_count())?;
    Ok(DecodedImage {
        width: header.width as usize,
        height: header.height as usize,
        indices,
        palette: Arc::new(palette),
    })
}

fn decode_headerless(
    path: &Path,
    file: &mut ImageFile,
    width: usize,
    height: usize,
) -> Result<DecodedImage, DecodeError> {
    let palette = load_palette_for_image(path)?;
    let raw = file.read_exact_at(layout::HEADERLESS_PIXEL_OFFSET, width * height)?;
    let (indices, width, height) = reorient(&raw, width, height)?;
    Ok(DecodedImage {
        width,
        height,
        indices,
        palette: Arc::new(palette),
    })
}
