/// Regroup LEFT-oriented pixel data into row-major order.
///
/// The on-disk stream is read as `height` runs of `width` bytes. Output row
/// `r` (for `r` in `0..width`) collects every `width`-th byte starting at
/// `r`, so the emitted image is `height` pixels wide and `width` pixels tall.
/// The dimension swap corrects the storage orientation; square inputs keep
/// their size.
///
/// Only the first `width * height` bytes of `bytes` are used; `None` is
/// returned when fewer are available.
///
/// # Examples
/// ```
/// use celpak_core::apply_left_orientation;
///
/// let raw = *b"abcdefgh";
/// let (pixels, width, height) = apply_left_orientation(&raw, 4, 2).unwrap();
/// assert_eq!(pixels, b"aebfcgdh");
/// assert_eq!((width, height), (2, 4));
/// assert!(apply_left_orientation(&raw, 4, 4).is_none());
/// ```
pub fn apply_left_orientation(
    bytes: &[u8],
    width: usize,
    height: usize,
) -> Option<(Vec<u8>, usize, usize)> {
    let raw = bytes.get(..width.checked_mul(height)?)?;
    if raw.is_empty() {
        return Some((Vec::new(), height, width));
    }
    let mut pixels = Vec::with_capacity(raw.len());
    for row in 0..width {
        pixels.extend(raw[row..].iter().step_by(width).copied());
    }
    Some((pixels, height, width))
}
