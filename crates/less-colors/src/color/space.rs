//! Color space tags

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The color spaces a [`Color`](super::Color) can live in.
///
/// The set is closed: every conversion and distance routine matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB, channels in 0.0..=1.0
    Rgb,
    /// CIELAB against the D65 white, L in 0.0..=100.0
    Lab,
    /// Oklab (Ottosson 2020), L in 0.0..=1.0
    Oklab,
    /// CIE 1931 XYZ, D65 adapted, Y of white = 1.0
    Xyz,
}

impl ColorSpace {
    /// All color spaces, in declaration order.
    pub const ALL: [ColorSpace; 4] = [
        ColorSpace::Rgb,
        ColorSpace::Lab,
        ColorSpace::Oklab,
        ColorSpace::Xyz,
    ];

    /// Lowercase canonical name.
    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Lab => "lab",
            ColorSpace::Oklab => "oklab",
            ColorSpace::Xyz => "xyz",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    /// Parse a color space name, case-insensitively.
    ///
    /// Accepts `rgb`, `srgb`, `lab`, `cielab`, `oklab` and `xyz`.
    ///
    /// ```
    /// use less_colors::ColorSpace;
    ///
    /// assert_eq!("OKLAB".parse::<ColorSpace>().unwrap(), ColorSpace::Oklab);
    /// assert!("hsl".parse::<ColorSpace>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" | "srgb" => Ok(ColorSpace::Rgb),
            "lab" | "cielab" => Ok(ColorSpace::Lab),
            "oklab" => Ok(ColorSpace::Oklab),
            "xyz" => Ok(ColorSpace::Xyz),
            _ => Err(Error::UnknownColorSpace(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("rgb".parse::<ColorSpace>(), Ok(ColorSpace::Rgb));
        assert_eq!("sRGB".parse::<ColorSpace>(), Ok(ColorSpace::Rgb));
        assert_eq!("Lab".parse::<ColorSpace>(), Ok(ColorSpace::Lab));
        assert_eq!("cielab".parse::<ColorSpace>(), Ok(ColorSpace::Lab));
        assert_eq!(" oklab ".parse::<ColorSpace>(), Ok(ColorSpace::Oklab));
        assert_eq!("XYZ".parse::<ColorSpace>(), Ok(ColorSpace::Xyz));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "hsv".parse::<ColorSpace>().unwrap_err();
        assert_eq!(err, Error::UnknownColorSpace("hsv".to_string()));
        assert!("".parse::<ColorSpace>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for space in ColorSpace::ALL {
            assert_eq!(space.to_string().parse::<ColorSpace>(), Ok(space));
        }
    }
}
