//! Color difference metrics
//!
//! Four distances, one per [`ColorSpace`]:
//!
//! | Space | Metric |
//! |-------|--------|
//! | RGB   | Euclidean over gamma-encoded channels in 0..=1 |
//! | XYZ   | Euclidean |
//! | OKLAB | Euclidean |
//! | LAB   | CIEDE2000 (kL = kC = kH = 1) |
//!
//! Euclidean LAB under-weights hue and over-weights chroma for saturated
//! colors; CIEDE2000 corrects this and is the default [`Metric`].
//!
//! All metrics are symmetric, non-negative and zero on identical inputs.

use crate::color::{Color, ColorSpace};
use crate::error::Error;

/// How palette matching measures distance.
///
/// `include_alpha` adds the alpha difference as a fourth Euclidean term for
/// RGB, XYZ and OKLAB. CIEDE2000 has no alpha term and ignores it.
///
/// ```
/// use less_colors::{ColorSpace, Metric};
///
/// let metric = Metric::default();
/// assert_eq!(metric.space, ColorSpace::Lab);
/// assert!(!metric.include_alpha);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Metric {
    /// Comparison space; selects the distance formula
    pub space: ColorSpace,
    /// Whether alpha participates in Euclidean metrics
    pub include_alpha: bool,
}

impl Default for Metric {
    fn default() -> Self {
        Self::new(ColorSpace::Lab)
    }
}

impl Metric {
    /// Metric for `space` without alpha.
    #[inline]
    pub const fn new(space: ColorSpace) -> Self {
        Self {
            space,
            include_alpha: false,
        }
    }

    /// Set whether alpha participates.
    #[inline]
    #[must_use]
    pub const fn with_alpha(mut self, include_alpha: bool) -> Self {
        self.include_alpha = include_alpha;
        self
    }

    /// Distance between two colors, converting both into the metric's
    /// space first.
    pub fn distance(&self, a: &Color, b: &Color) -> Result<f32, Error> {
        let a = a.convert(self.space)?;
        let b = b.convert(self.space)?;
        Ok(self.distance_converted(&a, &b))
    }

    /// Distance between two colors that are already in `self.space`.
    #[inline]
    pub(crate) fn distance_converted(&self, a: &Color, b: &Color) -> f32 {
        debug_assert_eq!(a.space(), self.space);
        debug_assert_eq!(b.space(), self.space);
        let a = a.components();
        let b = b.components();
        match self.space {
            ColorSpace::Lab => ciede2000([a[0], a[1], a[2]], [b[0], b[1], b[2]]),
            ColorSpace::Rgb | ColorSpace::Oklab | ColorSpace::Xyz => {
                let channels = if self.include_alpha { 4 } else { 3 };
                a[..channels]
                    .iter()
                    .zip(&b[..channels])
                    .map(|(x, y)| (x - y) * (x - y))
                    .sum::<f32>()
                    .sqrt()
            }
        }
    }
}

/// Euclidean distance over sRGB channels (alpha excluded).
pub fn rgb_distance(a: &Color, b: &Color) -> Result<f32, Error> {
    Metric::new(ColorSpace::Rgb).distance(a, b)
}

/// CIEDE2000 difference in LAB.
pub fn lab_distance(a: &Color, b: &Color) -> Result<f32, Error> {
    Metric::new(ColorSpace::Lab).distance(a, b)
}

/// Euclidean distance in Oklab (alpha excluded).
pub fn oklab_distance(a: &Color, b: &Color) -> Result<f32, Error> {
    Metric::new(ColorSpace::Oklab).distance(a, b)
}

/// Euclidean distance in XYZ (alpha excluded).
pub fn xyz_distance(a: &Color, b: &Color) -> Result<f32, Error> {
    Metric::new(ColorSpace::Xyz).distance(a, b)
}

/// Distance using the default metric of `space`.
///
/// ```
/// use less_colors::{distance, Color, ColorSpace};
///
/// let red = Color::from_rgba8(255, 0, 0, 255);
/// let blue = Color::from_rgba8(0, 0, 255, 255);
/// let d = distance(&red, &blue, ColorSpace::Rgb).unwrap();
/// assert!((d - 2f32.sqrt()).abs() < 1e-6);
/// ```
pub fn distance(a: &Color, b: &Color, space: ColorSpace) -> Result<f32, Error> {
    Metric::new(space).distance(a, b)
}

/// CIEDE2000 color difference between two LAB triples.
///
/// Follows Sharma, Wu & Dalal (2005), "The CIEDE2000 Color-Difference
/// Formula: Implementation Notes, Supplementary Test Data, and Mathematical
/// Observations". Evaluated in f64.
pub fn ciede2000(lab1: [f32; 3], lab2: [f32; 3]) -> f32 {
    const POW25_7: f64 = 6_103_515_625.0; // 25^7

    let [l1, a1, b1] = lab1.map(f64::from);
    let [l2, a2, b2] = lab2.map(f64::from);

    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_bar = 0.5 * (c1 + c2);
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);

    let hue = |b: f64, ap: f64| {
        if b == 0.0 && ap == 0.0 {
            0.0
        } else {
            b.atan2(ap).to_degrees().rem_euclid(360.0)
        }
    };
    let h1p = hue(b1, a1p);
    let h2p = hue(b2, a2p);

    let delta_lp = l2 - l1;
    let delta_cp = c2p - c1p;

    let chroma_product = c1p * c2p;
    let delta_hp_angle = if chroma_product == 0.0 {
        0.0
    } else {
        let d = h2p - h1p;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let delta_hp = 2.0 * chroma_product.sqrt() * (0.5 * delta_hp_angle).to_radians().sin();

    let l_bar_p = 0.5 * (l1 + l2);
    let c_bar_p = 0.5 * (c1p + c2p);
    let h_bar_p = if chroma_product == 0.0 {
        h1p + h2p
    } else if (h1p - h2p).abs() <= 180.0 {
        0.5 * (h1p + h2p)
    } else if h1p + h2p < 360.0 {
        0.5 * (h1p + h2p + 360.0)
    } else {
        0.5 * (h1p + h2p - 360.0)
    };

    let t = 1.0 - 0.17 * (h_bar_p - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar_p).to_radians().cos()
        + 0.32 * (3.0 * h_bar_p + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar_p - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_bar_p - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let r_c = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
    let l_offset = (l_bar_p - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset / (20.0 + l_offset).sqrt();
    let s_c = 1.0 + 0.045 * c_bar_p;
    let s_h = 1.0 + 0.015 * c_bar_p * t;
    let r_t = -(2.0 * delta_theta).to_radians().sin() * r_c;

    let dl = delta_lp / s_l;
    let dc = delta_cp / s_c;
    let dh = delta_hp / s_h;

    (dl * dl + dc * dc + dh * dh + r_t * dc * dh).max(0.0).sqrt() as f32
}
