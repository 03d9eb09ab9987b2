use thiserror::Error;

#[derive(Debug, Error)]
pub enum PakError {
    #[error("unrecognized PAK file size: {size} bytes")]
    UnrecognizedSize { size: u64 },
    #[error("frame index {index} out of range: {frame_count} frames")]
    FrameIndexOutOfRange { index: usize, frame_count: usize },
}
