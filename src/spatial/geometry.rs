//! Tile sizing and pattern band placement
//!
//! A bounce-fill pattern needs a tile grid whose sides are coprime. For a
//! `width x height` canvas the natural tile is `gcd(width, height)`. Any
//! other tile is reached by cropping the height until `gcd(width, h')`
//! equals the requested tile; the cropped rows become plain margins split
//! between top and bottom, with the odd row going to the bottom.

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_dimensions, invalid_tile_size};
use crate::math::arithmetic::gcd;

/// Resolved tile size and the vertical band covered by whole tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Tile edge in pixels
    pub tile: u32,
    /// First pixel row of the band (inclusive)
    pub band_start: u32,
    /// Last pixel row of the band (inclusive)
    pub band_end: u32,
}

impl TileGeometry {
    /// Height of the tiled band in pixels
    pub const fn pattern_height(&self) -> u32 {
        self.band_end - self.band_start + 1
    }

    /// Number of tile columns
    pub const fn grid_width(&self) -> u32 {
        self.width / self.tile
    }

    /// Number of tile rows
    pub const fn grid_height(&self) -> u32 {
        self.pattern_height() / self.tile
    }

    /// Total number of tiles in the band
    pub const fn tile_count(&self) -> usize {
        self.grid_width() as usize * self.grid_height() as usize
    }

    /// Rows above the band
    pub const fn top_margin(&self) -> u32 {
        self.band_start
    }

    /// Rows below the band
    pub const fn bottom_margin(&self) -> u32 {
        self.height - 1 - self.band_end
    }

    /// Top-left pixel of a tile
    pub const fn tile_origin(&self, tx: u32, ty: u32) -> (u32, u32) {
        (tx * self.tile, self.band_start + ty * self.tile)
    }

    const fn full_band(width: u32, height: u32, tile: u32) -> Self {
        Self {
            width,
            height,
            tile,
            band_start: 0,
            band_end: height - 1,
        }
    }
}

/// Check canvas sides are positive and within `MAX_CANVAS_DIMENSION`
///
/// # Errors
///
/// Returns `InvalidDimensions` if a side is zero or too large
pub fn validate_canvas(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(invalid_dimensions(
            width,
            height,
            &"width and height must be positive",
        ));
    }
    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(invalid_dimensions(
            width,
            height,
            &format!("sides may not exceed {MAX_CANVAS_DIMENSION} pixels"),
        ));
    }
    Ok(())
}

/// Compute the tile size and pattern band for a canvas
///
/// `requested == None` selects the natural tile `gcd(width, height)`.
///
/// # Errors
///
/// Returns:
/// - `InvalidDimensions` if a side is zero or too large, or the requested
///   tile is zero
/// - `InvalidTileSize` if the tile exceeds a side, does not divide the
///   width, or no cropped height reproduces it as the gcd
pub fn size_tiles(width: u32, height: u32, requested: Option<u32>) -> Result<TileGeometry> {
    validate_canvas(width, height)?;

    let natural = gcd(width, height);
    let Some(tile) = requested else {
        return Ok(TileGeometry::full_band(width, height, natural));
    };

    if tile == 0 {
        return Err(invalid_dimensions(
            width,
            height,
            &"an explicit tile size must be positive",
        ));
    }
    if tile > width || tile > height {
        return Err(invalid_tile_size(
            width,
            height,
            tile,
            &"tile can't be bigger than the picture area",
        ));
    }
    if width % tile != 0 {
        return Err(invalid_tile_size(
            width,
            height,
            tile,
            &"width must be divisible by the tile size",
        ));
    }
    if tile == natural {
        return Ok(TileGeometry::full_band(width, height, natural));
    }

    let cropped = (1..=height)
        .rev()
        .find(|&trial| gcd(width, trial) == tile)
        .ok_or_else(|| {
            invalid_tile_size(
                width,
                height,
                tile,
                &"no cropped height fits this width and tile size",
            )
        })?;

    let diff = height - cropped;
    let band_start = diff / 2;
    let band_end = height - 1 - diff.div_ceil(2);

    log::debug!(
        "cropped {width}x{height} to band {band_start}..={band_end} for tile {tile}"
    );

    Ok(TileGeometry {
        width,
        height,
        tile,
        band_start,
        band_end,
    })
}
