//! PAK multi-frame decoding.
//!
//! A PAK file is a back-to-back sequence of 4096-byte blocks, each one a
//! headerless 64x64 LEFT-oriented CEL frame. All frames share the external
//! `PALETTE.PAL` palette. The frame count is the file size divided by the
//! block size; sizes that are not an exact, non-zero multiple are rejected.

pub mod error;
pub mod layout;
pub mod parser;

pub use parser::{frame_count, frame_offset};
