pub const EXTENSION: &str = "pak";

pub const FRAME_WIDTH: usize = 64;
pub const FRAME_HEIGHT: usize = 64;
pub const FRAME_SIZE: u64 = (FRAME_WIDTH * FRAME_HEIGHT) as u64;
