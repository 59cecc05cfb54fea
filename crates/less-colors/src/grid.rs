//! Two-dimensional pixel buffer.
//!
//! [`PixelGrid`] stores `width * height` colors in row-major order, all in a
//! single [`ColorSpace`]. Image codecs fill it from 8-bit RGBA or packed
//! ARGB and read it back the same way.

use crate::color::{Color, ColorSpace};
use crate::error::Error;

/// A rectangular grid of colors, row-major, all in one color space.
///
/// Every pixel is stored in [`space()`](Self::space); [`set()`](Self::set)
/// converts incoming colors to keep that invariant.
///
/// # Example
///
/// ```
/// use less_colors::{Color, PixelGrid};
///
/// let mut grid = PixelGrid::new(2, 1, Color::from_rgba8(0, 0, 0, 255)).unwrap();
/// grid.set(1, 0, Color::from_rgba8(255, 255, 255, 255)).unwrap();
///
/// assert_eq!(grid.to_rgba8().unwrap(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    space: ColorSpace,
    pixels: Vec<Color>,
}

fn pixel_count(width: usize, height: usize) -> Result<usize, Error> {
    width
        .checked_mul(height)
        .ok_or(Error::GridTooLarge { width, height })
}

fn check_len(expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}

impl PixelGrid {
    /// Grid of `width * height` copies of `fill`, in `fill`'s color space.
    pub fn new(width: usize, height: usize, fill: Color) -> Result<Self, Error> {
        fill.check_finite()?;
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            space: fill.space(),
            pixels: vec![fill; len],
        })
    }

    /// Grid from row-major colors.
    ///
    /// The grid takes the space of the first color; the rest are converted
    /// into it. An empty grid is RGB.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `colors.len() != width * height`, or a
    /// conversion error for non-finite input.
    pub fn from_colors(width: usize, height: usize, colors: Vec<Color>) -> Result<Self, Error> {
        check_len(pixel_count(width, height)?, colors.len())?;
        let space = colors.first().map_or(ColorSpace::Rgb, Color::space);
        let pixels = colors
            .into_iter()
            .map(|c| c.convert(space))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            width,
            height,
            space,
            pixels,
        })
    }

    /// RGB grid from interleaved 8-bit RGBA bytes.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `data.len() != width * height * 4`.
    pub fn from_rgba8(width: usize, height: usize, data: &[u8]) -> Result<Self, Error> {
        let len = pixel_count(width, height)?;
        let bytes = len
            .checked_mul(4)
            .ok_or(Error::GridTooLarge { width, height })?;
        check_len(bytes, data.len())?;

        let pixels = data
            .chunks_exact(4)
            .map(|px| Color::from_rgba8(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            space: ColorSpace::Rgb,
            pixels,
        })
    }

    /// RGB grid from packed ARGB words.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_argb(width: usize, height: usize, data: &[u32]) -> Result<Self, Error> {
        check_len(pixel_count(width, height)?, data.len())?;
        Ok(Self {
            width,
            height,
            space: ColorSpace::Rgb,
            pixels: data.iter().copied().map(Color::from_argb).collect(),
        })
    }

    /// Interleaved 8-bit RGBA bytes, row-major.
    pub fn to_rgba8(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_rgba8()?);
        }
        Ok(out)
    }

    /// Packed ARGB words, row-major.
    pub fn to_argb(&self) -> Result<Vec<u32>, Error> {
        self.pixels.iter().map(Color::to_argb).collect()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Space every pixel is stored in.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Replace the pixel at column `x`, row `y`.
    ///
    /// `color` is converted into the grid's space first.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] for a coordinate outside the grid, or a
    /// conversion error for non-finite input.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<(), Error> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[y * self.width + x] = color.convert(self.space)?;
        Ok(())
    }

    /// Rows from top to bottom, each `width` pixels long.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Color]> {
        // A zero-width grid stores no pixels; chunk size must be non-zero.
        self.pixels.chunks(self.width.max(1))
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Copy of this grid with every pixel converted into `space`.
    pub fn convert(&self, space: ColorSpace) -> Result<PixelGrid, Error> {
        let pixels = self
            .pixels
            .iter()
            .map(|c| c.convert(space))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            width: self.width,
            height: self.height,
            space,
            pixels,
        })
    }
}
