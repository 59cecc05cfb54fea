#![allow(clippy::excessive_precision, clippy::module_inception)]

//! less-colors: reduce images to the colors of a reference palette
//!
//! Every pixel is replaced by the perceptually closest entry of a fixed,
//! ordered palette. The crate covers the color model, conversions between
//! color spaces, perceptual distance metrics, brute-force nearest-color
//! search and the image-level remap. Image files are not handled here; the
//! crate works on in-memory [`PixelGrid`]s.
//!
//! # Quick Start
//!
//! ```
//! use less_colors::{Palette, PixelGrid, Remapper};
//!
//! let palette = Palette::from_hex(&["#000000", "#ffffff", "#ff0000"]).unwrap();
//! let remapper = Remapper::new(palette);
//!
//! let mut grid = PixelGrid::from_rgba8(2, 1, &[200, 30, 20, 255, 240, 240, 240, 255]).unwrap();
//! remapper.remap(&mut grid).unwrap();
//!
//! assert_eq!(grid.to_rgba8().unwrap(), vec![255, 0, 0, 255, 255, 255, 255, 255]);
//! ```
//!
//! # Color Spaces
//!
//! A [`Color`] is four `f32` components tagged with a [`ColorSpace`]:
//!
//! - RGB: gamma-encoded sRGB, channels in 0..=1
//! - LAB: CIELAB against the D65 white point
//! - OKLAB: Björn Ottosson's perceptual space
//! - XYZ: CIE 1931 XYZ, D65
//!
//! Alpha is always the fourth component and passes through every
//! conversion unchanged. Conversions back to RGB clamp each channel
//! independently.
//!
//! # Distance
//!
//! The comparison space of a [`Metric`] selects the formula: CIEDE2000 for
//! LAB (the default), Euclidean for the others. See [`difference`].
//!
//! # Matching
//!
//! Search is a linear scan in palette order with a strict `<`, so among
//! equidistant entries the first one wins. This holds for the parallel
//! remap as well, which only splits rows between threads.

pub mod color;
pub mod difference;
pub mod error;
pub mod grid;
pub mod palette;
pub mod remap;


pub use color::{Color, ColorSpace};
pub use difference::{
    ciede2000, distance, lab_distance, oklab_distance, rgb_distance, xyz_distance, Metric,
};
pub use error::{Error, ErrorKind, ParseColorError};
pub use grid::PixelGrid;
pub use palette::{Matcher, Palette};
pub use remap::{remap, RemapStats, Remapper};
