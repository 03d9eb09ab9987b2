//! File access for image sources.
//!
//! All disk I/O lives here: opening image files, reading byte ranges at fixed
//! offsets and locating the external palette. Each decode call opens its own
//! handle and drops it before returning, so nothing stays open between calls.

mod file;
mod palette;

pub(crate) use file::ImageFile;
pub use palette::palette_candidates;
pub(crate) use palette::{find_palette_file, read_palette_block};
