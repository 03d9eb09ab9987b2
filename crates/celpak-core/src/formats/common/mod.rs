//! Conventions shared by the CEL and PAK formats.

pub mod orientation;
pub(crate) mod reader;

pub use orientation::apply_left_orientation;
