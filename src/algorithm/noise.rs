//! Chaotic noise wallpaper
//!
//! The canvas is cut into `brush_x x brush_y` cells and every cell takes one
//! of two colors by an independent coin flip. Unlike the billiards pattern
//! there is no walk and no band; the brush only has to divide the canvas.

use crate::algorithm::drawer::Drawer;
use crate::algorithm::renderer::fill_area;
use crate::io::color::to_hex;
use crate::io::error::{Result, computation_error, invalid_dimensions, invalid_tile_size};
use crate::math::arithmetic::small_divisors;
use crate::spatial::geometry::validate_canvas;
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters of one chaotic noise wallpaper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaosNoise {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Cell width in pixels
    pub brush_x: u32,
    /// Cell height in pixels
    pub brush_y: u32,
    /// Color of cells whose coin came up heads
    pub colored: Rgba<u8>,
    /// Color of the remaining cells
    pub background: Rgba<u8>,
    /// Seed of the coin flips
    pub seed: u64,
}

impl ChaosNoise {
    /// Check the brush divides the canvas
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero side or brush and
    /// `InvalidTileSize` when a brush side does not divide its canvas side
    pub fn validate(&self) -> Result<()> {
        validate_canvas(self.width, self.height)?;
        if self.brush_x == 0 || self.brush_y == 0 {
            return Err(invalid_dimensions(
                self.width,
                self.height,
                &"brush sides must be positive",
            ));
        }
        if self.width % self.brush_x != 0 {
            return Err(invalid_tile_size(
                self.width,
                self.height,
                self.brush_x,
                &"width must be divisible by the brush width",
            ));
        }
        if self.height % self.brush_y != 0 {
            return Err(invalid_tile_size(
                self.width,
                self.height,
                self.brush_y,
                &"height must be divisible by the brush height",
            ));
        }
        Ok(())
    }

    /// Number of cells along each axis (columns, rows)
    pub const fn cells(&self) -> (usize, usize) {
        (
            (self.width / self.brush_x) as usize,
            (self.height / self.brush_y) as usize,
        )
    }

    /// Coin flips indexed `[column, row]`, drawn column by column
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail [`Self::validate`]
    pub fn coin_map(&self) -> Result<Array2<bool>> {
        self.validate()?;
        let (columns, rows) = self.cells();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let flips: Vec<bool> = (0..columns * rows).map(|_| rng.random_bool(0.5)).collect();
        Array2::from_shape_vec((columns, rows), flips)
            .map_err(|e| computation_error("coin map", &e))
    }
}

impl Drawer for ChaosNoise {
    fn draw(&self) -> Result<RgbaImage> {
        let map = self.coin_map()?;
        let mut image = RgbaImage::new(self.width, self.height);

        for ((column, row), &heads) in map.indexed_iter() {
            let color = if heads { self.colored } else { self.background };
            fill_area(
                &mut image,
                column as u32 * self.brush_x,
                row as u32 * self.brush_y,
                self.brush_x,
                self.brush_y,
                color,
            );
        }

        Ok(image)
    }

    fn describe(&self) -> String {
        format!(
            "noise --width {} --height {} --brush {} {} --colors '{}' '{}' --seed {}",
            self.width,
            self.height,
            self.brush_x,
            self.brush_y,
            to_hex(self.colored),
            to_hex(self.background),
            self.seed
        )
    }

    fn file_stem(&self) -> String {
        format!(
            "noise_{}x{}_b{}x{}_{}_{}_s{}",
            self.width,
            self.height,
            self.brush_x,
            self.brush_y,
            to_hex(self.colored).trim_start_matches('#'),
            to_hex(self.background).trim_start_matches('#'),
            self.seed
        )
    }
}

/// Pick brush sides at random among the small divisors of each canvas side
///
/// # Errors
///
/// Returns `InvalidDimensions` for an invalid canvas
pub fn pick_random_brush<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    rng: &mut R,
) -> Result<(u32, u32)> {
    validate_canvas(width, height)?;
    let brush_x = small_divisors(width).choose(rng).copied().unwrap_or(1);
    let brush_y = small_divisors(height).choose(rng).copied().unwrap_or(1);
    Ok((brush_x, brush_y))
}
