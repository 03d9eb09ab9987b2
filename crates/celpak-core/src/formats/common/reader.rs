use std::path::Path;

/// Lowercased file extension without the leading dot, if any.
pub(crate) fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Whether `path` carries `expected` as its extension, ignoring case.
pub(crate) fn has_extension(path: &Path, expected: &str) -> bool {
    lowercase_extension(path).as_deref() == Some(expected)
}
