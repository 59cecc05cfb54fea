//! Color values and color space conversion
//!
//! A [`Color`] is a space-tagged value; [`ColorSpace`] is the closed set of
//! spaces it can be in. Conversion goes through two hubs: linear sRGB (for
//! RGB and Oklab) and CIE XYZ (for LAB).
//!
//! ```text
//!  RGB --gamma decode--> linear sRGB --M1/cbrt/M2--> Oklab
//!                            |
//!                       sRGB matrix (D65)
//!                            |
//!                           XYZ --CIE f(t), D65 white--> LAB
//! ```
//!
//! # Example
//!
//! ```
//! use less_colors::{Color, ColorSpace};
//!
//! let pixel = Color::from_rgba8(128, 64, 32, 255);
//! let oklab = pixel.convert(ColorSpace::Oklab).unwrap();
//! let back = oklab.to_rgba8().unwrap();
//! assert_eq!(back, [128, 64, 32, 255]);
//! ```

mod oklab;
mod space;
mod srgb;
mod value;
mod xyz;

pub use space::ColorSpace;
pub use value::Color;
