//! Reference palettes and nearest-color search
//!
//! A [`Palette`] is an ordered list of colors. A [`Matcher`] prepares a
//! palette for repeated queries under one metric.

mod matcher;
mod palette;

pub use matcher::Matcher;
pub use palette::Palette;
