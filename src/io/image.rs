//! Source image loading and PNG export

use crate::io::error::{Result, TileError};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB, dropping any alpha
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist or is not a regular file
/// - The file cannot be opened or decoded as an image
pub fn load_rgb_image(path: &Path) -> Result<RgbImage> {
    if !path.is_file() {
        return Err(TileError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| TileError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(img.into_rgb8())
}

/// Write an RGB image as PNG, regardless of the path's extension
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written to `path`
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| TileError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
