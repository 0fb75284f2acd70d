//! Painting a tile sequence into a pixel buffer

use crate::io::color::ColorPair;
use crate::spatial::{TileGeometry, TilePos};
use image::{Rgba, RgbaImage};

/// Which color of the pair a tile receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// The inside color
    Inside,
    /// The outside color; also used for the first tile
    Outside,
}

impl Paint {
    /// The other color
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Inside => Self::Outside,
            Self::Outside => Self::Inside,
        }
    }

    /// Resolve against a color pair
    pub const fn color(self, colors: &ColorPair) -> Rgba<u8> {
        match self {
            Self::Inside => colors.inside,
            Self::Outside => colors.outside,
        }
    }
}

/// Paints tiles in walk order with alternating colors
///
/// The renderer knows nothing about the walk; it fills each tile it is given
/// and flips the paint for the next one.
#[derive(Debug, Clone, Copy)]
pub struct PatternRenderer {
    geometry: TileGeometry,
    colors: ColorPair,
}

impl PatternRenderer {
    /// Create a renderer for a sized canvas
    pub const fn new(geometry: TileGeometry, colors: ColorPair) -> Self {
        Self { geometry, colors }
    }

    /// Paint every tile of `tiles` in order, then fill the margins
    pub fn render<I>(&self, tiles: I) -> RgbaImage
    where
        I: IntoIterator<Item = TilePos>,
    {
        let mut image = RgbaImage::new(self.geometry.width, self.geometry.height);

        let mut paint = Paint::Outside;
        let mut painted = 0_usize;
        for tile in tiles {
            self.fill_tile(&mut image, tile, paint.color(&self.colors));
            paint = paint.flipped();
            painted += 1;
        }

        self.fill_margins(&mut image);

        log::debug!(
            "painted {painted}/{} tiles of {}px on {}x{}",
            self.geometry.tile_count(),
            self.geometry.tile,
            self.geometry.width,
            self.geometry.height
        );

        image
    }

    fn fill_tile(&self, image: &mut RgbaImage, tile: TilePos, color: Rgba<u8>) {
        let (x, y) = self.geometry.tile_origin(tile.x, tile.y);
        let size = self.geometry.tile;
        fill_area(image, x, y, size, size, color);
    }

    fn fill_margins(&self, image: &mut RgbaImage) {
        let TileGeometry {
            width,
            height,
            band_start,
            band_end,
            ..
        } = self.geometry;
        let outside = self.colors.outside;

        fill_area(image, 0, 0, width, band_start, outside);
        fill_area(image, 0, band_end + 1, width, height - band_end - 1, outside);
    }
}

/// Fill a rectangle whose top-left pixel is `(x, y)`, clipped to the image
pub fn fill_area(image: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    for py in y..y.saturating_add(height) {
        for px in x..x.saturating_add(width) {
            if let Some(pixel) = image.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}
