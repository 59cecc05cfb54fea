//! Space-tagged color value

use std::fmt;
use std::str::FromStr;

use super::oklab::{linear_to_oklab, oklab_to_linear};
use super::space::ColorSpace;
use super::srgb;
use super::xyz::{lab_to_xyz, linear_to_xyz, xyz_to_lab, xyz_to_linear};
use crate::error::Error;

/// A color in one of the supported [`ColorSpace`]s.
///
/// Four `f32` components plus a space tag. The first three components are
/// interpreted per space; the fourth is always alpha in 0.0..=1.0.
///
/// | Space | c1 | c2 | c3 |
/// |-------|----|----|----|
/// | RGB   | red 0..=1 | green 0..=1 | blue 0..=1 |
/// | LAB   | L 0..=100 | a | b |
/// | OKLAB | L 0..=1 | a | b |
/// | XYZ   | X | Y | Z |
///
/// `Color` is immutable: [`convert()`](Color::convert) returns a new value.
/// Equality is exact component equality plus equal space tags.
///
/// # Example
///
/// ```
/// use less_colors::{Color, ColorSpace};
///
/// let rust = Color::from_rgba8(178, 123, 99, 255);
/// let lab = rust.convert(ColorSpace::Lab).unwrap();
/// assert!((lab.components()[0] - 56.62).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    space: ColorSpace,
    components: [f32; 4],
}

impl Color {
    /// Create a color from raw components in the given space.
    #[inline]
    pub const fn new(space: ColorSpace, components: [f32; 4]) -> Self {
        Self { space, components }
    }

    /// sRGB color with channels and alpha in 0.0..=1.0.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self::new(ColorSpace::Rgb, [r, g, b, alpha])
    }

    /// CIELAB color (D65).
    #[inline]
    pub const fn lab(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Self::new(ColorSpace::Lab, [l, a, b, alpha])
    }

    /// Oklab color.
    #[inline]
    pub const fn oklab(l: f32, a: f32, b: f32, alpha: f32) -> Self {
        Self::new(ColorSpace::Oklab, [l, a, b, alpha])
    }

    /// CIE XYZ color (D65).
    #[inline]
    pub const fn xyz(x: f32, y: f32, z: f32, alpha: f32) -> Self {
        Self::new(ColorSpace::Xyz, [x, y, z, alpha])
    }

    /// sRGB color from 8-bit channels.
    ///
    /// ```
    /// use less_colors::Color;
    /// let red = Color::from_rgba8(255, 0, 0, 255);
    /// assert_eq!(red.components(), [1.0, 0.0, 0.0, 1.0]);
    /// ```
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// sRGB color from a packed ARGB word (alpha in the top byte, blue in
    /// the bottom byte).
    #[inline]
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    /// The space this color's components are expressed in.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// All four components, alpha last.
    #[inline]
    pub fn components(&self) -> [f32; 4] {
        self.components
    }

    /// Alpha component.
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.components[3]
    }

    /// Fails with [`Error::NonFiniteComponent`] if any component is NaN or
    /// infinite.
    pub fn check_finite(&self) -> Result<(), Error> {
        match self.components.iter().position(|c| !c.is_finite()) {
            Some(index) => Err(Error::NonFiniteComponent {
                space: self.space,
                index,
            }),
            None => Ok(()),
        }
    }

    /// Convert to another color space.
    ///
    /// Converting to the current space returns a copy. Alpha is carried
    /// through unchanged. Conversions into RGB clamp each channel to
    /// 0.0..=1.0 independently (no gamut mapping).
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteComponent`] if any component of `self` is NaN or
    /// infinite.
    pub fn convert(&self, target: ColorSpace) -> Result<Color, Error> {
        self.check_finite()?;
        if self.space == target {
            return Ok(*self);
        }

        let converted = match target {
            ColorSpace::Rgb => self
                .linear_rgb()
                .map(|c| srgb::encode(c.clamp(0.0, 1.0)).clamp(0.0, 1.0)),
            ColorSpace::Lab => xyz_to_lab(self.xyz_triple()),
            ColorSpace::Oklab => linear_to_oklab(self.linear_rgb()),
            ColorSpace::Xyz => self.xyz_triple(),
        };

        Ok(Self::new(
            target,
            [
                converted[0] as f32,
                converted[1] as f32,
                converted[2] as f32,
                self.alpha(),
            ],
        ))
    }

    /// Convert to sRGB and quantize to 8-bit channels.
    ///
    /// Each channel is rounded, then clamped to 0..=255.
    pub fn to_rgba8(&self) -> Result<[u8; 4], Error> {
        let rgb = self.convert(ColorSpace::Rgb)?;
        Ok(rgb
            .components
            .map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8))
    }

    /// Convert to sRGB and pack as an ARGB word.
    ///
    /// Layout, most to least significant byte: alpha, red, green, blue.
    ///
    /// ```
    /// use less_colors::Color;
    /// let c = Color::from_rgba8(0x11, 0x22, 0x33, 0x44);
    /// assert_eq!(c.to_argb().unwrap(), 0x4411_2233);
    /// ```
    pub fn to_argb(&self) -> Result<u32, Error> {
        let [r, g, b, a] = self.to_rgba8()?;
        Ok(u32::from_be_bytes([a, r, g, b]))
    }

    /// Hex notation of the 8-bit sRGB value: `#rrggbb`, or `#rrggbbaa` when
    /// not fully opaque.
    pub fn to_hex(&self) -> Result<String, Error> {
        let [r, g, b, a] = self.to_rgba8()?;
        Ok(if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        })
    }

    #[inline]
    fn triple(&self) -> [f64; 3] {
        [
            f64::from(self.components[0]),
            f64::from(self.components[1]),
            f64::from(self.components[2]),
        ]
    }

    /// Linear-light sRGB, unclamped.
    fn linear_rgb(&self) -> [f64; 3] {
        match self.space {
            ColorSpace::Rgb => self.triple().map(srgb::decode),
            ColorSpace::Lab => xyz_to_linear(lab_to_xyz(self.triple())),
            ColorSpace::Oklab => oklab_to_linear(self.triple()),
            ColorSpace::Xyz => xyz_to_linear(self.triple()),
        }
    }

    fn xyz_triple(&self) -> [f64; 3] {
        match self.space {
            ColorSpace::Rgb => linear_to_xyz(self.triple().map(srgb::decode)),
            ColorSpace::Lab => lab_to_xyz(self.triple()),
            ColorSpace::Oklab => linear_to_xyz(oklab_to_linear(self.triple())),
            ColorSpace::Xyz => self.triple(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, alpha] = self.components;
        write!(f, "{}({c1}, {c2}, {c3}, {alpha})", self.space)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse an sRGB color from `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// ```
    /// use less_colors::Color;
    ///
    /// let red: Color = "#F00".parse().unwrap();
    /// assert_eq!(red, Color::from_rgba8(255, 0, 0, 255));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b, a] = srgb::parse_hex(s)?;
        Ok(Self::from_rgba8(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_components(color: Color, expected: [f32; 3], tol: f32) {
        let c = color.components();
        for i in 0..3 {
            assert!(
                (c[i] - expected[i]).abs() < tol,
                "component {i}: got {}, expected {} (tol {tol}) in {color}",
                c[i],
                expected[i]
            );
        }
    }

    #[test]
    fn test_rgb_to_lab_literal() {
        let lab = Color::from_rgba8(178, 123, 99, 255)
            .convert(ColorSpace::Lab)
            .unwrap();
        assert_eq!(lab.space(), ColorSpace::Lab);
        assert_components(lab, [56.62, 18.48, 21.72], 0.01);
        assert_eq!(lab.alpha(), 1.0);
    }

    #[test]
    fn test_lab_to_rgb_literal() {
        let rgb = Color::lab(56.62, 18.48, 21.72, 1.0);
        assert_eq!(rgb.to_rgba8().unwrap(), [178, 123, 99, 255]);
    }

    #[test]
    fn test_lab_literal_near_gamut_edge() {
        let lab = Color::from_rgba8(1, 254, 33, 255)
            .convert(ColorSpace::Lab)
            .unwrap();
        assert_components(lab, [87.485, -85.203, 79.288], 0.01);

        let rgb = Color::lab(87.484_95, -85.202_94, 79.287_68, 1.0);
        assert_eq!(rgb.to_rgba8().unwrap(), [1, 254, 33, 255]);
    }

    #[test]
    fn test_lab_literal_linear_segment() {
        let lab = Color::from_rgba8(1, 1, 1, 255)
            .convert(ColorSpace::Lab)
            .unwrap();
        assert_components(lab, [0.274, 0.0, 0.0], 0.01);

        let rgb = Color::lab(0.274_175_9, 0.000_037_3, -0.000_073_8, 1.0);
        assert_eq!(rgb.to_rgba8().unwrap(), [1, 1, 1, 255]);
    }

    #[test]
    fn test_black_and_white_lab() {
        let black = Color::from_rgba8(0, 0, 0, 255)
            .convert(ColorSpace::Lab)
            .unwrap();
        assert_components(black, [0.0, 0.0, 0.0], 1e-3);

        let white = Color::from_rgba8(255, 255, 255, 255)
            .convert(ColorSpace::Lab)
            .unwrap();
        assert_components(white, [100.0, 0.0, 0.0], 1e-3);
    }

    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::{IntoColor, Lab, Srgb};

        for (r, g, b) in [(178u8, 123u8, 99u8), (0, 128, 255), (12, 200, 40)] {
            let ours = Color::from_rgba8(r, g, b, 255)
                .convert(ColorSpace::Lab)
                .unwrap();
            let theirs: Lab = Srgb::new(r, g, b).into_format::<f32>().into_linear().into_color();
            assert_components(ours, [theirs.l, theirs.a, theirs.b], 0.05);
        }
    }

    #[test]
    fn test_convert_same_space_is_copy() {
        let c = Color::oklab(0.5, 0.1, -0.1, 0.5);
        assert_eq!(c.convert(ColorSpace::Oklab).unwrap(), c);
    }

    #[test]
    fn test_alpha_passes_through() {
        let c = Color::from_rgba8(10, 20, 30, 77);
        for space in ColorSpace::ALL {
            let converted = c.convert(space).unwrap();
            assert_eq!(converted.alpha(), c.alpha(), "alpha changed in {space}");
            assert_eq!(
                converted.convert(ColorSpace::Rgb).unwrap().alpha(),
                c.alpha()
            );
        }
    }

    #[test]
    fn test_out_of_gamut_clamps() {
        // Saturated green far outside sRGB
        let wild = Color::lab(50.0, -200.0, 150.0, 1.0);
        let rgb = wild.convert(ColorSpace::Rgb).unwrap();
        for c in &rgb.components()[..3] {
            assert!((0.0..=1.0).contains(c), "channel {c} not clamped");
        }

        let too_bright = Color::oklab(1.5, 0.0, 0.0, 1.0);
        assert_eq!(too_bright.to_rgba8().unwrap(), [255, 255, 255, 255]);

        let too_dark = Color::lab(-20.0, 0.0, 0.0, 1.0);
        assert_eq!(too_dark.to_rgba8().unwrap(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_non_finite_rejected() {
        let nan = Color::rgb(f32::NAN, 0.0, 0.0, 1.0);
        assert_eq!(
            nan.convert(ColorSpace::Lab),
            Err(Error::NonFiniteComponent {
                space: ColorSpace::Rgb,
                index: 0
            })
        );

        let inf_alpha = Color::lab(50.0, 0.0, 0.0, f32::INFINITY);
        assert!(matches!(
            inf_alpha.convert(ColorSpace::Lab),
            Err(Error::NonFiniteComponent { index: 3, .. })
        ));
        assert!(inf_alpha.to_argb().is_err());
    }

    #[test]
    fn test_argb_packing() {
        let c = Color::from_argb(0x80FF_4000);
        assert_eq!(c.to_rgba8().unwrap(), [0xFF, 0x40, 0x00, 0x80]);
        assert_eq!(c.to_argb().unwrap(), 0x80FF_4000);

        let opaque_blue = Color::from_rgba8(0, 0, 255, 255);
        assert_eq!(opaque_blue.to_argb().unwrap(), 0xFF00_00FF);
    }

    #[test]
    fn test_hex() {
        let c: Color = "#12ab34".parse().unwrap();
        assert_eq!(c.to_hex().unwrap(), "#12ab34");

        let translucent: Color = "#12ab3480".parse().unwrap();
        assert_eq!(translucent.to_hex().unwrap(), "#12ab3480");

        assert!(matches!(
            "#12ab3".parse::<Color>(),
            Err(Error::ParseColor(_))
        ));
    }

    #[test]
    fn test_display() {
        let c = Color::lab(50.0, -1.5, 2.0, 1.0);
        assert_eq!(c.to_string(), "lab(50, -1.5, 2, 1)");
    }
}
