use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't find file: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Missing palette: give a palette image or a list of colors")]
    MissingPalette,

    #[error("Conflicting palette sources: give a palette image or a list of colors, not both")]
    ConflictingPalette,

    #[error("Unsupported output type: {0}")]
    UnsupportedFormat(String),

    #[error("Image too large: {width}x{height}")]
    ImageTooLarge { width: usize, height: usize },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Color error: {0}")]
    Color(#[from] less_colors::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
