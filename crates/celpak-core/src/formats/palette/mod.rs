//! VGA palette decoding.
//!
//! A palette block is 768 bytes: 256 sequential RGB triples stored at 6 bits
//! per channel. Each channel is scaled by four to reach the 8-bit range. The
//! block is either embedded in a headered CEL file or stored on its own as
//! `PALETTE.PAL` next to headerless images.
//!
//! Channel bytes above 63 are malformed; they are not rejected and wrap
//! with unsigned 8-bit arithmetic so decoding stays deterministic.

pub mod error;
pub mod layout;
pub mod parser;

pub use parser::{parse_vga_palette, scale_vga_channel};
