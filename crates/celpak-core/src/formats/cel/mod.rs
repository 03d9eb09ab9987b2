//! CEL single-image decoding.
//!
//! Two layouts exist. Headered files start with the magic `0x19 0x91`,
//! followed by little-endian width and height; the palette sits at `0x20`
//! and row-major (TOP) pixel data at `0x320`. Headerless files carry no
//! header at all: their dimensions are implied by the file size, pixel data
//! starts at offset 0 in LEFT orientation and the palette comes from an
//! external `PALETTE.PAL`.
//!
//! Classification is a pure function of the extension, the leading header
//! bytes and the file size. Offsets live in `layout`, header access in
//! `reader`.

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use parser::{CelHeader, CelVariant, classify_cel, parse_header};
