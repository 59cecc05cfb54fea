//! Image-level palette remapping
//!
//! Every pixel of a [`PixelGrid`] is replaced by its nearest palette entry.
//! Pixels are matched independently of each other, so the work splits by
//! row across threads without changing the result.
//!
//! Remapping is all-or-nothing: every pixel is matched before the first one
//! is written, so an error leaves the grid untouched.

mod builder;

pub use builder::Remapper;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::Color;
use crate::difference::Metric;
use crate::error::Error;
use crate::grid::PixelGrid;
use crate::palette::{Matcher, Palette};

/// Summary of one remap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemapStats {
    /// Pixels rewritten
    pub pixels: usize,
    /// Palette entries that won at least one pixel
    pub colors_used: usize,
}

/// Replace every pixel of `grid` with its closest entry in `palette`,
/// sequentially.
///
/// The grid keeps its dimensions and color space; written entries are
/// converted into that space. See [`Remapper`] for the configurable,
/// optionally parallel form.
///
/// # Errors
///
/// [`Error::EmptyPalette`] if the palette has no entries, even when the grid
/// is empty. A conversion error if a pixel or entry is non-finite.
///
/// # Example
///
/// ```
/// use less_colors::{remap, Color, ColorSpace, Metric, Palette, PixelGrid};
///
/// let mut grid = PixelGrid::from_rgba8(2, 1, &[255, 0, 0, 255, 0, 255, 0, 255]).unwrap();
/// let palette = Palette::from_hex(&["#ff0000", "#0000ff"]).unwrap();
///
/// let stats = remap(&mut grid, &palette, Metric::new(ColorSpace::Rgb)).unwrap();
/// assert_eq!(stats.pixels, 2);
/// assert_eq!(grid.to_rgba8().unwrap(), vec![255, 0, 0, 255, 255, 0, 0, 255]);
/// ```
pub fn remap(grid: &mut PixelGrid, palette: &Palette, metric: Metric) -> Result<RemapStats, Error> {
    remap_with(grid, palette, metric, false)
}

pub(crate) fn remap_with(
    grid: &mut PixelGrid,
    palette: &Palette,
    metric: Metric,
    parallel: bool,
) -> Result<RemapStats, Error> {
    let matcher = palette.matcher(metric)?;
    // Entries as they will be stored in the grid
    let targets = palette
        .iter()
        .map(|c| c.convert(grid.space()))
        .collect::<Result<Vec<_>, _>>()?;

    let indices = if parallel {
        match_parallel(&matcher, grid)?
    } else {
        match_sequential(&matcher, grid.pixels())?
    };

    let mut used = vec![false; palette.len()];
    for (px, &idx) in grid.pixels_mut().iter_mut().zip(&indices) {
        *px = targets[idx];
        used[idx] = true;
    }

    let stats = RemapStats {
        pixels: indices.len(),
        colors_used: used.iter().filter(|&&u| u).count(),
    };
    tracing::debug!(
        width = grid.width(),
        height = grid.height(),
        palette = palette.len(),
        space = %metric.space,
        parallel,
        colors_used = stats.colors_used,
        "remapped grid"
    );
    Ok(stats)
}

fn match_sequential(matcher: &Matcher<'_>, pixels: &[Color]) -> Result<Vec<usize>, Error> {
    pixels
        .iter()
        .map(|px| matcher.find_closest_index(px).map(|(idx, _)| idx))
        .collect()
}

#[cfg(feature = "parallel")]
fn match_parallel(matcher: &Matcher<'_>, grid: &PixelGrid) -> Result<Vec<usize>, Error> {
    let rows = grid
        .pixels()
        .par_chunks(grid.width().max(1))
        .map(|row| match_sequential(matcher, row))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows.concat())
}

#[cfg(not(feature = "parallel"))]
fn match_parallel(matcher: &Matcher<'_>, grid: &PixelGrid) -> Result<Vec<usize>, Error> {
    match_sequential(matcher, grid.pixels())
}
