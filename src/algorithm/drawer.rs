//! Common interface of the wallpaper generation methods

use crate::io::error::Result;
use image::RgbaImage;

/// A fully configured wallpaper generator
///
/// Implementations are plain parameter sets; drawing has no side effects
/// and the same parameters always produce the same image.
pub trait Drawer {
    /// Render the wallpaper
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters cannot produce an image, such as a
    /// brush that cannot tile the canvas
    fn draw(&self) -> Result<RgbaImage>;

    /// Command-line arguments that regenerate exactly this image
    fn describe(&self) -> String;

    /// Filesystem-safe name derived from the parameters
    fn file_stem(&self) -> String;
}
