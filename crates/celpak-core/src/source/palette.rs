use std::path::{Path, PathBuf};

use log::debug;

use super::file::ImageFile;
use crate::formats::palette::layout;

/// Candidate locations for the external palette of `image_path`, in search
/// order: the image's directory, then its parent directory.
///
/// # Examples
/// ```
/// use std::path::{Path, PathBuf};
///
/// use celpak_core::palette_candidates;
///
/// let candidates = palette_candidates(Path::new("game/gfx/door.cel"));
/// assert_eq!(
///     candidates,
///     vec![
///         PathBuf::from("game/gfx/PALETTE.PAL"),
///         PathBuf::from("game/PALETTE.PAL"),
///     ]
/// );
/// ```
pub fn palette_candidates(image_path: &Path) -> Vec<PathBuf> {
    let image_dir = image_path.parent();
    let parent_dir = image_dir.and_then(Path::parent);
    [image_dir, parent_dir]
        .into_iter()
        .flatten()
        .map(|dir| dir.join(layout::PALETTE_FILE_NAME))
        .collect()
}

/// First existing palette file for `image_path`, if any.
pub(crate) fn find_palette_file(image_path: &Path) -> Option<PathBuf> {
    let found = palette_candidates(image_path)
        .into_iter()
        .find(|candidate| candidate.is_file());
    match &found {
        Some(path) => debug!("palette for {} -> {}", image_path.display(), path.display()),
        None => debug!("no palette found for {}", image_path.display()),
    }
    found
}

/// Read the 768-byte palette block from a standalone palette file.
pub(crate) fn read_palette_block(palette_path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = ImageFile::open(palette_path)?;
    file.read_exact_at(0, layout::PALETTE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::{find_palette_file, palette_candidates, read_palette_block};
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[test]
    fn candidates_for_bare_file_name() {
        let candidates = palette_candidates(Path::new("door.cel"));
        assert_eq!(candidates, vec![PathBuf::from("PALETTE.PAL")]);
    }

    #[test]
    fn image_directory_wins_over_parent() {
        let temp = TempDir::new().expect("tempdir");
        let gfx = temp.path().join("gfx");
        fs::create_dir(&gfx).expect("mkdir");
        fs::write(gfx.join("PALETTE.PAL"), [0u8; 768]).expect("write");
        fs::write(temp.path().join("PALETTE.PAL"), [1u8; 768]).expect("write");

        let found = find_palette_file(&gfx.join("door.cel")).unwrap();
        assert_eq!(found, gfx.join("PALETTE.PAL"));
    }

    #[test]
    fn falls_back_to_parent_directory() {
        let temp = TempDir::new().expect("tempdir");
        let gfx = temp.path().join("gfx");
        fs::create_dir(&gfx).expect("mkdir");
        fs::write(temp.path().join("PALETTE.PAL"), [1u8; 768]).expect("write");

        let found = find_palette_file(&gfx.join("door.cel")).unwrap();
        assert_eq!(found, temp.path().join("PALETTE.PAL"));
    }

    #[test]
    fn missing_everywhere() {
        let temp = TempDir::new().expect("tempdir");
        let gfx = temp.path().join("gfx");
        fs::create_dir(&gfx).expect("mkdir");
        assert!(find_palette_file(&gfx.join("door.cel")).is_none());
    }

    #[test]
    fn short_palette_file_is_unexpected_eof() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("PALETTE.PAL");
        fs::write(&path, [0u8; 700]).expect("write");
        let err = read_palette_block(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
