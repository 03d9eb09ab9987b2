use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
