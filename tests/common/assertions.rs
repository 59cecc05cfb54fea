//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

use super::fixtures::read_pixels;

/// Assert an image file has the given size and row-major pixels.
pub fn assert_image(path: &Path, width: u32, height: u32, expected: &[[u8; 4]]) {
    let (w, h, pixels) = read_pixels(path);
    assert_eq!((w, h), (width, height), "image size of {}", path.display());
    assert_eq!(pixels, expected, "pixels of {}", path.display());
}

/// Assert every pixel of an image file is one of `palette`.
pub fn assert_only_palette_colors(path: &Path, palette: &[[u8; 4]]) {
    let (_, _, pixels) = read_pixels(path);
    for (i, px) in pixels.iter().enumerate() {
        assert!(
            palette.contains(px),
            "pixel {i} of {} is {px:?}, not a palette color",
            path.display()
        );
    }
}
