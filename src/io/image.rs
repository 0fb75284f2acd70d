//! PNG export of generated wallpapers

use crate::io::error::{PatternError, Result, WithContext};
use image::RgbaImage;
use std::path::Path;

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| PatternError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
