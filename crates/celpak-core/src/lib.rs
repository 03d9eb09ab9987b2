//! celpak core library for legacy CEL and PAK raster images.
//!
//! This crate decodes the two image containers of the game's data files:
//! single CEL images (headered or headerless) and PAK animations made of
//! 64x64 headerless frames. Format parsers (layout/reader/parser) are pure
//! and side-effect free; all file access is isolated in `source`, and the
//! `decode` layer composes both into [`DecodedImage`] values. Rendering,
//! playback timing and browsing belong to the caller.
//!
//! Invariants:
//! - `DecodedImage::indices.len() == width * height`.
//! - Palettes always hold 256 entries, so every index resolves.
//! - Decoding is a pure function of the file contents; errors are final.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use celpak_core::{ImageSource, open_image};
//!
//! let source = open_image(Path::new("GFX/DOOR.CEL"))?;
//! let frame = source.frame(0)?;
//! println!("{}x{}", frame.width, frame.height);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

mod decode;
pub mod export;
pub mod formats;
mod source;

pub use decode::{
    DEFAULT_FRAME_DURATION_MS, DecodeError, Frames, ImageSource, PakHandle, decode_cel, describe,
    load_palette_file, load_palette_for_image, open_image,
};
pub use formats::cel::CelVariant;
pub use formats::common::apply_left_orientation;
pub use source::palette_candidates;

/// Number of entries in every palette.
pub const PALETTE_LEN: usize = 256;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Immutable 256-entry color table.
///
/// # Examples
/// ```
/// use celpak_core::{Palette, Rgb};
///
/// let mut colors = [Rgb(0, 0, 0); 256];
/// colors[7] = Rgb(252, 128, 4);
/// let palette = Palette::new(colors);
/// assert_eq!(palette.get(7), Rgb(252, 128, 4));
/// assert_eq!(palette.to_flat_rgb().len(), 768);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgb; PALETTE_LEN],
}

impl Palette {
    pub fn new(colors: [Rgb; PALETTE_LEN]) -> Self {
        Self { colors }
    }

    pub fn get(&self, index: u8) -> Rgb {
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_LEN] {
        &self.colors
    }

    /// Channels as `R, G, B, R, G, B, ...` (768 bytes).
    pub fn to_flat_rgb(&self) -> Vec<u8> {
        self.colors
            .iter()
            .flat_map(|&Rgb(r, g, b)| [r, g, b])
            .collect()
    }
}

/// A decoded image or animation frame: palette indices plus their palette.
///
/// Frames of one PAK file share the same palette allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: usize,
    /// Height in pixels.
    pub height: usize,
    /// Row-major palette indices, `width * height` bytes.
    pub indices: Vec<u8>,
    /// Palette the indices refer to.
    pub palette: Arc<Palette>,
}

impl DecodedImage {
    /// Color of the pixel at `(x, y)`, if inside the image.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.indices
            .get(y * self.width + x)
            .map(|&index| self.palette.get(index))
    }

    /// Expand the indices to packed RGB bytes.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.indices
            .iter()
            .flat_map(|&index| {
                let Rgb(r, g, b) = self.palette.get(index);
                [r, g, b]
            })
            .collect()
    }
}

/// Summary of an input file, as reported by [`describe`].
///
/// # Examples
/// ```
/// use celpak_core::ImageInfo;
///
/// let info = ImageInfo {
///     path: "FIRE.PAK".to_string(),
///     format: "pak".to_string(),
///     variant: "frames_64x64".to_string(),
///     width: 64,
///     height: 64,
///     frame_count: 3,
///     bytes: 12_288,
///     frame_duration_ms: Some(100),
/// };
/// assert_eq!(info.frame_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Input path as provided.
    pub path: String,
    /// Container format (`cel` or `pak`).
    pub format: String,
    /// Layout variant label (e.g., `headered`, `fixed_65x64`).
    pub variant: String,
    /// Emitted width in pixels.
    pub width: usize,
    /// Emitted height in pixels.
    pub height: usize,
    /// Number of frames (1 for CEL files).
    pub frame_count: usize,
    /// File size in bytes.
    pub bytes: u64,
    /// Playback frame duration for animations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_duration_ms: Option<u32>,
}
