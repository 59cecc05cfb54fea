//! Image file I/O: files to [`PixelGrid`]s and back.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};
use less_colors::PixelGrid;

use crate::error::AppError;

/// Decode an image file of any supported format into an RGB grid.
///
/// The format is detected from the file contents. Every source is expanded
/// to 8-bit RGBA first.
pub fn load_grid(path: &Path) -> Result<PixelGrid, AppError> {
    let img = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| AppError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();

    let (width, height) = img.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Decoded image");
    Ok(PixelGrid::from_rgba8(
        width as usize,
        height as usize,
        img.as_raw(),
    )?)
}

/// Resolve an output-type string ("png", "jpg", "bmp", ...) to an encodable
/// format.
pub fn resolve_format(output_type: &str) -> Result<ImageFormat, AppError> {
    ImageFormat::from_extension(output_type.trim().to_ascii_lowercase())
        .filter(|format| format.writing_enabled())
        .ok_or_else(|| AppError::UnsupportedFormat(output_type.to_string()))
}

/// Convert to the color type the encoder for `format` accepts.
fn encodable(format: ImageFormat, img: DynamicImage) -> DynamicImage {
    match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => DynamicImage::ImageRgb8(img.into_rgb8()),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(img.into_rgba16()),
        ImageFormat::Hdr => DynamicImage::ImageRgb32F(img.into_rgb32f()),
        ImageFormat::OpenExr => DynamicImage::ImageRgba32F(img.into_rgba32f()),
        _ => img,
    }
}

/// Encode `grid` to `path` in the given output type.
///
/// Formats that cannot carry alpha are written as 8-bit RGB; Farbfeld, HDR
/// and OpenEXR get the wider sample types their encoders require.
pub fn save_grid(grid: &PixelGrid, path: &Path, output_type: &str) -> Result<(), AppError> {
    let format = resolve_format(output_type)?;

    let too_large = || AppError::ImageTooLarge {
        width: grid.width(),
        height: grid.height(),
    };
    let width = u32::try_from(grid.width()).map_err(|_| too_large())?;
    let height = u32::try_from(grid.height()).map_err(|_| too_large())?;
    let rgba = RgbaImage::from_raw(width, height, grid.to_rgba8()?).ok_or_else(too_large)?;

    let img = encodable(format, DynamicImage::ImageRgba8(rgba));
    img.save_with_format(path, format)
        .map_err(|source| AppError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), ?format, "Encoded image");
    Ok(())
}
