pub const EXTENSION: &str = "cel";

pub const MAGIC: [u8; 2] = [0x19, 0x91];
pub const MAGIC_RANGE: std::ops::Range<usize> = 0..2;
pub const WIDTH_RANGE: std::ops::Range<usize> = 2..4;
pub const HEIGHT_RANGE: std::ops::Range<usize> = 4..6;
pub const HEADER_LEN: usize = 6;

pub const PALETTE_OFFSET: u64 = 0x20;
pub const PIXEL_OFFSET: u64 = 0x320;

pub const HEADERLESS_PIXEL_OFFSET: u64 = 0;

pub const FIXED_64X64_SIZE: u64 = 4096;
pub const FIXED_65X64_SIZE: u64 = 4160;
pub const FIXED_64X56_SIZE: u64 = 3594;
