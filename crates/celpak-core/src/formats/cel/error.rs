use thiserror::Error;

/// Errors returned by CEL classification and header parsing.
///
/// # Examples
/// ```
/// use celpak_core::formats::cel::error::CelError;
///
/// let err = CelError::UnrecognizedSize { size: 12 };
/// assert!(err.to_string().contains("unrecognized CEL file size"));
/// ```
#[derive(Debug, Error)]
pub enum CelError {
    #[error("unsupported extension {extension:?}: expected .cel")]
    UnsupportedExtension { extension: Option<String> },
    #[error("unrecognized CEL file size: {size} bytes")]
    UnrecognizedSize { size: u64 },
    #[error("CEL header too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}
