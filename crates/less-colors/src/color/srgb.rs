//! sRGB transfer function and hex notation
//!
//! The gamma curve is the IEC 61966-2-1 piecewise formula, evaluated
//! directly in f64.

use crate::error::ParseColorError;

/// Gamma-decode one sRGB channel into linear light.
///
/// Linear segment below 0.04045, power curve above. Values outside
/// 0.0..=1.0 are decoded without clamping.
#[inline]
pub(crate) fn decode(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Gamma-encode one linear channel back to sRGB.
#[inline]
pub(crate) fn encode(linear: f64) -> f64 {
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` into RGBA bytes.
///
/// The hash is optional, parsing is case-insensitive and surrounding
/// whitespace is trimmed. Forms without alpha are opaque.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 4], ParseColorError> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(ParseColorError::NotAscii);
    }
    let digits = s
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ParseColorError::InvalidDigit(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;
    let byte = |i: usize| digits[2 * i] << 4 | digits[2 * i + 1];

    match digits.len() {
        // Shorthand: each digit doubles up (0xF -> 0xFF)
        3 => Ok([digits[0] * 17, digits[1] * 17, digits[2] * 17, 255]),
        6 => Ok([byte(0), byte(1), byte(2), 255]),
        8 => Ok([byte(0), byte(1), byte(2), byte(3)]),
        _ => Err(ParseColorError::InvalidLength),
    }
}
