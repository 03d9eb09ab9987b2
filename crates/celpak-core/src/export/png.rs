use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};

use super::ExportError;
use crate::DecodedImage;

/// Encode `image` as an 8-bit indexed PNG carrying its palette.
///
/// # Errors
/// Returns `ExportError::Png` when encoding or writing fails.
pub fn write_png<W: Write>(image: &DecodedImage, writer: W) -> Result<(), ExportError> {
    let dimensions = || ExportError::Dimensions {
        width: image.width,
        height: image.height,
    };
    let width = u32::try_from(image.width).map_err(|_| dimensions())?;
    let height = u32::try_from(image.height).map_err(|_| dimensions())?;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Indexed);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_palette(image.palette.to_flat_rgb());
    let mut png = encoder.write_header()?;
    png.write_image_data(&image.indices)?;
    png.finish()?;
    Ok(())
}

/// Write `image` as a PNG file at `path`, replacing any existing file.
///
/// # Errors
/// Returns `ExportError::Io` when the file cannot be created, otherwise the
/// errors of [`write_png`].
pub fn save_png(image: &DecodedImage, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::write_png;
    use crate::{DecodedImage, Palette, Rgb};
    use std::sync::Arc;

    fn sample_image() -> DecodedImage {
        let mut colors = [Rgb(0, 0, 0); 256];
        colors[1] = Rgb(252, 0, 0);
        colors[2] = Rgb(0, 252, 0);
        DecodedImage {
            width: 3,
            height: 2,
            indices: vec![0, 1, 2, 2, 1, 0],
            palette: Arc::new(Palette::new(colors)),
        }
    }

    #[test]
    fn writes_indexed_png_with_palette() {
        let mut bytes = Vec::new();
        write_png(&sample_image(), &mut bytes).unwrap();

        let decoder = png::Decoder::new(bytes.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (3, 2));
        assert_eq!(info.color_type, png::ColorType::Indexed);
        let palette = info.palette.as_ref().expect("PLTE chunk").to_vec();
        assert_eq!(palette.len(), 768);
        assert_eq!(&palette[3..6], &[252, 0, 0]);

        let mut buf = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut buf).unwrap();
        assert_eq!(&buf[..frame.buffer_size()], &[0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn output_starts_with_png_signature() {
        let mut bytes = Vec::new();
        write_png(&sample_image(), &mut bytes).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }
}
