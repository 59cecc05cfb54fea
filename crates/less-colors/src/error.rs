//! Error types for the less-colors crate.
//!
//! [`Error`] is the single error type returned by every fallible operation in
//! the crate, so application code can propagate with `?`. Use
//! [`Error::kind()`] to tell caller mistakes apart from numeric domain
//! failures.

use thiserror::Error;

use crate::color::ColorSpace;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 digits after stripping '#')
    #[error("invalid hex color length (expected 3, 6 or 8 characters)")]
    InvalidLength,
    /// Hex string contains non-ASCII characters
    #[error("hex color must be ASCII")]
    NotAscii,
    /// Character that is not a hex digit
    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something unusable: an empty palette, an unknown
    /// color space name, mismatched buffer sizes, an unparsable color.
    InvalidArgument,
    /// A color component was NaN or infinite going into a conversion.
    ConversionDomain,
}

/// Unified error type for the less-colors public API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Nearest-color search over a palette with no entries
    #[error("palette cannot be empty")]
    EmptyPalette,

    /// Color space name that is not one of rgb, lab, oklab, xyz
    #[error("unknown color space: {0:?}")]
    UnknownColorSpace(String),

    /// NaN or infinite component found before a conversion
    #[error("non-finite component {index} in {space} color")]
    NonFiniteComponent {
        /// Color space of the offending value
        space: ColorSpace,
        /// Component index (0..=3, alpha is 3)
        index: usize,
    },

    /// Pixel buffer does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Required buffer length
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// Pixel coordinate outside the grid
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Grid dimensions whose pixel count overflows `usize`
    #[error("grid dimensions {width}x{height} are too large")]
    GridTooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}

impl Error {
    /// Classify this error.
    ///
    /// ```
    /// use less_colors::{Error, ErrorKind};
    ///
    /// assert_eq!(Error::EmptyPalette.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NonFiniteComponent { .. } => ErrorKind::ConversionDomain,
            Error::EmptyPalette
            | Error::UnknownColorSpace(_)
            | Error::DimensionMismatch { .. }
            | Error::OutOfBounds { .. }
            | Error::GridTooLarge { .. }
            | Error::ParseColor(_) => ErrorKind::InvalidArgument,
        }
    }
}
