//! Brute-force nearest-color search.

use super::palette::Palette;
use crate::color::Color;
use crate::difference::Metric;
use crate::error::Error;

/// A palette prepared for nearest-color queries under one [`Metric`].
///
/// Holds every palette entry converted into the metric's space, so a query
/// costs one conversion plus one distance per entry. The matcher only reads
/// its data and is `Sync`; one instance serves all worker threads.
#[derive(Debug, Clone)]
pub struct Matcher<'a> {
    palette: &'a Palette,
    metric: Metric,
    converted: Vec<Color>,
}

impl<'a> Matcher<'a> {
    pub(super) fn new(palette: &'a Palette, metric: Metric) -> Result<Self, Error> {
        if palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        let converted = palette
            .iter()
            .map(|color| color.convert(metric.space))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            palette,
            metric,
            converted,
        })
    }

    /// The metric this matcher compares with.
    #[inline]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The palette being searched.
    #[inline]
    pub fn palette(&self) -> &'a Palette {
        self.palette
    }

    /// Index and distance of the palette entry closest to `color`.
    ///
    /// Linear scan in palette order with a strict `<` comparison: on equal
    /// distances the first entry wins.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteComponent`] if `color` has a NaN or infinite
    /// component.
    pub fn find_closest_index(&self, color: &Color) -> Result<(usize, f32), Error> {
        let query = color.convert(self.metric.space)?;

        let mut best_idx = 0;
        let mut best_dist = f32::INFINITY;
        for (i, entry) in self.converted.iter().enumerate() {
            let dist = self.metric.distance_converted(&query, entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        Ok((best_idx, best_dist))
    }

    /// The palette entry closest to `color`, as originally given to the
    /// palette (same space, same components).
    ///
    /// # Errors
    ///
    /// See [`find_closest_index()`](Self::find_closest_index).
    pub fn find_closest(&self, color: &Color) -> Result<Color, Error> {
        let (idx, _) = self.find_closest_index(color)?;
        Ok(self.palette.colors()[idx])
    }
}
