//! Binary format decoding modules.
//!
//! Each format follows a layered structure:
//! - `layout`: byte offsets, sizes and magic values (source of truth)
//! - `reader`: safe byte access and format conventions
//! - `parser`: domain-level decoding (no direct byte indexing)
//! - `error`: explicit, actionable errors
//!
//! Parsers are pure and contain no I/O; the `source` module handles file
//! access and the `decode` module composes both.

pub mod cel;
pub mod common;
pub mod pak;
pub mod palette;
