//! Remapper builder -- the configurable entry point for whole-image remaps.

use super::{remap_with, RemapStats};
use crate::color::ColorSpace;
use crate::difference::Metric;
use crate::error::Error;
use crate::grid::PixelGrid;
use crate::palette::Palette;

/// Reduces images to the colors of a fixed palette.
///
/// # Design
///
/// - Constructor requires a [`Palette`]; the default metric is CIEDE2000
///   in LAB
/// - Configuration methods consume and return `self`
/// - [`remap()`](Self::remap) takes `&self` so one remapper serves many
///   images
/// - With the `parallel` feature (on by default) rows are matched on the
///   rayon thread pool; output is identical to a sequential run
///
/// # Example
///
/// ```
/// use less_colors::{ColorSpace, Palette, PixelGrid, Remapper};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let remapper = Remapper::new(palette).space(ColorSpace::Oklab);
///
/// let mut grid = PixelGrid::from_rgba8(2, 1, &[30, 30, 30, 255, 220, 220, 220, 255]).unwrap();
/// let stats = remapper.remap(&mut grid).unwrap();
///
/// assert_eq!(stats.colors_used, 2);
/// assert_eq!(grid.to_rgba8().unwrap(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone)]
pub struct Remapper {
    palette: Palette,
    metric: Metric,
    parallel: bool,
}

impl Remapper {
    /// Create a remapper for `palette` with the default LAB metric.
    ///
    /// Parallel matching is enabled when the crate is built with the
    /// `parallel` feature.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            metric: Metric::default(),
            parallel: cfg!(feature = "parallel"),
        }
    }

    /// Replace the whole metric.
    #[inline]
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the comparison space, keeping the alpha setting.
    #[inline]
    pub fn space(mut self, space: ColorSpace) -> Self {
        self.metric.space = space;
        self
    }

    /// Set whether alpha participates in Euclidean metrics.
    #[inline]
    pub fn include_alpha(mut self, include_alpha: bool) -> Self {
        self.metric.include_alpha = include_alpha;
        self
    }

    /// Enable or disable row-parallel matching.
    ///
    /// Has no effect without the `parallel` feature.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Replace every pixel of `grid` with its nearest palette entry.
    ///
    /// On error the grid is left unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyPalette`] for an empty palette; a conversion error for
    /// non-finite pixels or palette entries.
    pub fn remap(&self, grid: &mut PixelGrid) -> Result<RemapStats, Error> {
        remap_with(grid, &self.palette, self.metric, self.parallel)
    }

    /// Remapped copy of `grid`; the input is not modified.
    pub fn remapped(&self, grid: &PixelGrid) -> Result<PixelGrid, Error> {
        let mut out = grid.clone();
        self.remap(&mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::from_rgba8(r, g, b, 255)
    }

    #[test]
    fn test_defaults() {
        let remapper = Remapper::new(Palette::new(vec![rgb(0, 0, 0)]));
        assert_eq!(remapper.metric(), Metric::default());
        assert_eq!(remapper.palette().len(), 1);
    }

    #[test]
    fn test_builder_chain() {
        let remapper = Remapper::new(Palette::default())
            .include_alpha(true)
            .space(ColorSpace::Xyz)
            .parallel(false);
        assert_eq!(
            remapper.metric(),
            Metric::new(ColorSpace::Xyz).with_alpha(true)
        );
        assert!(!remapper.parallel);
    }

    #[test]
    fn test_with_metric_replaces_both_fields() {
        let remapper = Remapper::new(Palette::default())
            .space(ColorSpace::Rgb)
            .include_alpha(true)
            .with_metric(Metric::new(ColorSpace::Oklab));
        assert_eq!(remapper.metric(), Metric::new(ColorSpace::Oklab));

        let remapper = remapper.space(ColorSpace::Lab);
        assert_eq!(remapper.metric(), Metric::default());
    }

    #[test]
    fn test_remapped_leaves_input() {
        let palette = Palette::new(vec![rgb(0, 0, 0), rgb(255, 255, 255)]);
        let remapper = Remapper::new(palette);
        let grid = PixelGrid::new(3, 3, rgb(200, 200, 200)).unwrap();

        let out = remapper.remapped(&grid).unwrap();
        assert!(grid.pixels().iter().all(|&px| px == rgb(200, 200, 200)));
        assert!(out.pixels().iter().all(|&px| px == rgb(255, 255, 255)));
    }

    #[test]
    fn test_reusable_across_images() {
        let remapper = Remapper::new(Palette::new(vec![rgb(255, 0, 0), rgb(0, 0, 255)]))
            .space(ColorSpace::Rgb);

        let mut small = PixelGrid::new(1, 1, rgb(200, 0, 30)).unwrap();
        let mut large = PixelGrid::new(64, 64, rgb(10, 0, 220)).unwrap();
        remapper.remap(&mut small).unwrap();
        remapper.remap(&mut large).unwrap();

        assert_eq!(small.get(0, 0), Some(rgb(255, 0, 0)));
        assert!(large.pixels().iter().all(|&px| px == rgb(0, 0, 255)));
    }

    #[test]
    fn test_alpha_changes_winner() {
        let opaque_gray = rgb(128, 128, 128);
        let clear_gray = Color::from_rgba8(120, 120, 120, 0);
        let palette = Palette::new(vec![opaque_gray, clear_gray]);
        let query = rgb(121, 121, 121);

        let remapper = Remapper::new(palette).space(ColorSpace::Rgb);
        let mut grid = PixelGrid::new(1, 1, query).unwrap();
        remapper.remap(&mut grid).unwrap();
        assert_eq!(grid.get(0, 0), Some(clear_gray));

        let mut grid = PixelGrid::new(1, 1, query).unwrap();
        remapper.include_alpha(true).remap(&mut grid).unwrap();
        assert_eq!(grid.get(0, 0), Some(opaque_gray));
    }
}
