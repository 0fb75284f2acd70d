//! Arithmetic billiards wallpaper: sizing, walking and painting in one call

use crate::algorithm::drawer::Drawer;
use crate::algorithm::renderer::PatternRenderer;
use crate::algorithm::walker::{Corner, walk};
use crate::io::color::{ColorPair, to_hex};
use crate::io::error::{Result, computation_error, invalid_tile_size};
use crate::math::arithmetic::{gcd, small_divisors};
use crate::spatial::TileGeometry;
use crate::spatial::geometry::{size_tiles, validate_canvas};
use image::{Rgba, RgbaImage};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Parameters of one bounce-fill wallpaper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BilliardsConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Requested tile edge; `None` uses `gcd(width, height)`
    pub tile: Option<u32>,
    /// Inside and outside colors
    pub colors: ColorPair,
    /// Corner the walk starts from
    pub corner: Corner,
}

impl BilliardsConfig {
    /// Configure a canvas with the natural tile size
    pub const fn new(width: u32, height: u32, colors: ColorPair, corner: Corner) -> Self {
        Self {
            width,
            height,
            tile: None,
            colors,
            corner,
        }
    }

    /// Request a specific tile size
    #[must_use]
    pub const fn with_tile(mut self, tile: Option<u32>) -> Self {
        self.tile = tile;
        self
    }

    /// Tile size the render uses
    pub fn resolved_tile(&self) -> u32 {
        self.tile.unwrap_or_else(|| gcd(self.width, self.height))
    }

    /// Size the canvas
    ///
    /// # Errors
    ///
    /// Propagates sizing errors from [`size_tiles`]
    pub fn geometry(&self) -> Result<TileGeometry> {
        size_tiles(self.width, self.height, self.tile)
    }
}

impl Drawer for BilliardsConfig {
    fn draw(&self) -> Result<RgbaImage> {
        let geometry = self.geometry()?;
        let mut walker = walk(geometry.grid_width(), geometry.grid_height(), self.corner);
        let image = PatternRenderer::new(geometry, self.colors).render(&mut walker);

        // Sized grids have coprime sides, so the walk always covers them
        if !walker.is_complete() {
            return Err(computation_error(
                "bounce walk",
                &format!(
                    "walk covered {} of {} tiles",
                    walker.visited_count(),
                    geometry.tile_count()
                ),
            ));
        }

        Ok(image)
    }

    fn describe(&self) -> String {
        format!(
            "billiards --width {} --height {} --brush {} --colors '{}' '{}' --corner {}",
            self.width,
            self.height,
            self.resolved_tile(),
            to_hex(self.colors.inside),
            to_hex(self.colors.outside),
            self.corner
        )
    }

    fn file_stem(&self) -> String {
        format!(
            "billiards_{}x{}_b{}_{}_{}_{}",
            self.width,
            self.height,
            self.resolved_tile(),
            self.corner,
            to_hex(self.colors.inside).trim_start_matches('#'),
            to_hex(self.colors.outside).trim_start_matches('#')
        )
    }
}

/// Render a bounce-fill wallpaper
///
/// # Errors
///
/// Returns `InvalidDimensions` or `InvalidTileSize` when the canvas cannot
/// be tiled with the requested brush
pub fn generate(
    width: u32,
    height: u32,
    tile: Option<u32>,
    inside: Rgba<u8>,
    outside: Rgba<u8>,
    corner: Corner,
) -> Result<RgbaImage> {
    BilliardsConfig::new(width, height, ColorPair::new(inside, outside), corner)
        .with_tile(tile)
        .draw()
}

/// Pick a tile size at random among the small divisors of the width that
/// the sizer accepts for this canvas
///
/// # Errors
///
/// Returns `InvalidDimensions` for an invalid canvas and `InvalidTileSize`,
/// carrying the largest divisor tried, when no divisor fits
pub fn pick_random_tile<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Result<u32> {
    validate_canvas(width, height)?;

    let divisors = small_divisors(width);
    let candidates: Vec<u32> = divisors
        .iter()
        .copied()
        .filter(|&tile| size_tiles(width, height, Some(tile)).is_ok())
        .collect();

    candidates.choose(rng).copied().ok_or_else(|| {
        let largest = divisors.last().copied().unwrap_or(width);
        invalid_tile_size(
            width,
            height,
            largest,
            &format!("no divisor of the width up to {largest} fits the canvas"),
        )
    })
}

/// Pick a start corner uniformly at random
pub fn pick_random_corner<R: Rng + ?Sized>(rng: &mut R) -> Corner {
    Corner::ALL
        .choose(rng)
        .copied()
        .unwrap_or(Corner::TopLeft)
}
