//! Ordered, immutable reference palette.

use std::collections::HashSet;
use std::str::FromStr;

use super::matcher::Matcher;
use crate::color::Color;
use crate::difference::Metric;
use crate::error::Error;
use crate::grid::PixelGrid;

/// An ordered sequence of reference colors.
///
/// Order matters: nearest-color search breaks ties in favor of the earlier
/// entry. A palette is never mutated after construction, so it can be shared
/// freely between threads during a remap.
///
/// Entries are kept as given, in their own color spaces. Conversion into the
/// comparison space happens once per [`Matcher`].
///
/// # Example
///
/// ```
/// use less_colors::{Color, Metric, Palette};
///
/// let palette = Palette::new(vec![
///     Color::from_rgba8(0, 0, 0, 255),
///     Color::from_rgba8(255, 255, 255, 255),
/// ]);
///
/// let dark = Color::from_rgba8(40, 40, 40, 255);
/// let closest = palette.find_closest(&dark, Metric::default()).unwrap();
/// assert_eq!(closest, Color::from_rgba8(0, 0, 0, 255));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from an explicit, ordered list of colors.
    ///
    /// An empty list is accepted here; searching it fails with
    /// [`Error::EmptyPalette`].
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Create a palette from every pixel of a grid.
    ///
    /// Pixels are read column by column: the outer loop walks `x` from left
    /// to right, the inner loop walks `y` from top to bottom. Every pixel
    /// becomes one entry; duplicates are kept. The scan order decides which
    /// of several equidistant entries wins a tie.
    ///
    /// ```
    /// use less_colors::{Color, Palette, PixelGrid};
    ///
    /// let a = Color::from_rgba8(1, 0, 0, 255);
    /// let b = Color::from_rgba8(2, 0, 0, 255);
    /// let c = Color::from_rgba8(3, 0, 0, 255);
    /// let d = Color::from_rgba8(4, 0, 0, 255);
    /// // Row-major 2x2 grid: [a b]
    /// //                     [c d]
    /// let grid = PixelGrid::from_colors(2, 2, vec![a, b, c, d]).unwrap();
    ///
    /// let palette = Palette::from_grid(&grid);
    /// assert_eq!(palette.colors(), &[a, c, b, d]);
    /// ```
    pub fn from_grid(grid: &PixelGrid) -> Self {
        let mut colors = Vec::with_capacity(grid.width() * grid.height());
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                if let Some(color) = grid.get(x, y) {
                    colors.push(color);
                }
            }
        }
        Self { colors }
    }

    /// Create a palette from hex color strings (`#RGB`, `#RRGGBB`,
    /// `#RRGGBBAA`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseColor`] for the first invalid string.
    ///
    /// ```
    /// use less_colors::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#F00"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, Error> {
        let colors = colors
            .iter()
            .map(|s| Color::from_str(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at `idx`, if any.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Color> {
        self.colors.get(idx).copied()
    }

    /// All entries in palette order.
    #[inline]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over the entries in palette order.
    ///
    /// Each call starts a fresh iteration.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Copy of this palette with repeated entries removed.
    ///
    /// The first occurrence of each color is kept and relative order is
    /// preserved. Since ties go to the earliest entry, a later duplicate can
    /// never win a search, so the result matches exactly like `self` does.
    /// Duplicates are detected by exact component bits and space tag.
    ///
    /// ```
    /// use less_colors::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000", "#fff", "#000"]).unwrap();
    /// assert_eq!(palette.deduplicated().len(), 2);
    /// ```
    #[must_use]
    pub fn deduplicated(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.colors.len());
        let colors = self
            .colors
            .iter()
            .filter(|color| seen.insert((color.space(), color.components().map(f32::to_bits))))
            .copied()
            .collect();
        Self { colors }
    }

    /// Prepare nearest-color queries under `metric`.
    ///
    /// Every entry is converted into the metric's space once, here.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPalette`] if the palette has no entries;
    /// [`Error::NonFiniteComponent`] if an entry cannot be converted.
    pub fn matcher(&self, metric: Metric) -> Result<Matcher<'_>, Error> {
        Matcher::new(self, metric)
    }

    /// Find the entry closest to `color` under `metric`.
    ///
    /// Convenience for a single query; use [`matcher()`](Self::matcher)
    /// for many.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPalette`] on an empty palette, or a conversion error
    /// for non-finite input.
    pub fn find_closest(&self, color: &Color, metric: Metric) -> Result<Color, Error> {
        self.matcher(metric)?.find_closest(color)
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self::new(colors)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
