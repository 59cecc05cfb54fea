//! Test fixtures: small images written to a temporary directory.

use std::path::{Path, PathBuf};

use image::RgbaImage;

/// Opaque 8-bit colors used across the tests.
pub mod colors {
    pub const BLACK: [u8; 4] = [0, 0, 0, 255];
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    pub const GREEN: [u8; 4] = [0, 255, 0, 255];
    pub const BLUE: [u8; 4] = [0, 0, 255, 255];
}

/// Write a PNG with the given row-major pixels.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32, pixels: &[[u8; 4]]) -> PathBuf {
    assert_eq!(pixels.len(), (width * height) as usize, "fixture size");
    let data: Vec<u8> = pixels.iter().flatten().copied().collect();
    let img = RgbaImage::from_raw(width, height, data).unwrap();
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Write a horizontal gray ramp with a red tint in the lower half.
pub fn write_ramp(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(1)) as u8;
            if y >= height / 2 {
                pixels.push([v.saturating_add(60), v / 2, v / 2, 255]);
            } else {
                pixels.push([v, v, v, 255]);
            }
        }
    }
    write_png(dir, name, width, height, &pixels)
}

/// Read any image back as row-major RGBA pixels.
pub fn read_pixels(path: &Path) -> (u32, u32, Vec<[u8; 4]>) {
    let img = image::open(path).unwrap().into_rgba8();
    let (width, height) = img.dimensions();
    let pixels = img.pixels().map(|p| p.0).collect();
    (width, height, pixels)
}
