pub const PALETTE_ENTRIES: usize = 256;
pub const CHANNELS_PER_ENTRY: usize = 3;
pub const PALETTE_SIZE: usize = PALETTE_ENTRIES * CHANNELS_PER_ENTRY;

pub const VGA_SCALE: u8 = 4;
pub const VGA_CHANNEL_MAX: u8 = 63;

pub const PALETTE_FILE_NAME: &str = "PALETTE.PAL";
