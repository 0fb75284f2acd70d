//! Tile coordinates and visited-tile tracking

use bitvec::prelude::*;
use std::fmt;

/// Logical tile coordinate: column `x`, row `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePos {
    /// Tile column
    pub x: u32,
    /// Tile row
    pub y: u32,
}

impl TilePos {
    /// Create a tile coordinate
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Tile grid extent in tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
}

impl GridSize {
    /// Create a grid extent
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of tiles
    pub const fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Last column index
    pub const fn last_col(&self) -> u32 {
        self.width.saturating_sub(1)
    }

    /// Last row index
    pub const fn last_row(&self) -> u32 {
        self.height.saturating_sub(1)
    }

    /// Test whether a position lies inside the grid
    pub const fn contains(&self, pos: TilePos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    const fn index(&self, pos: TilePos) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }
}

/// Fixed-size bit grid marking tiles the walker has entered
///
/// Row-major, one bit per tile. Out-of-grid positions read as visited so
/// that callers never step onto them.
#[derive(Clone, Debug)]
pub struct VisitedGrid {
    bits: BitVec,
    size: GridSize,
    count: usize,
}

impl VisitedGrid {
    /// Create a grid with no tiles visited
    pub fn new(size: GridSize) -> Self {
        Self {
            bits: bitvec![0; size.area()],
            size,
            count: 0,
        }
    }

    /// Grid extent
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Mark a tile visited, returning whether it was newly marked
    pub fn mark(&mut self, pos: TilePos) -> bool {
        if self.is_visited(pos) {
            return false;
        }
        self.bits.set(self.size.index(pos), true);
        self.count += 1;
        true
    }

    /// Test tile membership
    pub fn is_visited(&self, pos: TilePos) -> bool {
        if !self.size.contains(pos) {
            return true;
        }
        self.bits.get(self.size.index(pos)).as_deref() == Some(&true)
    }

    /// Number of tiles visited so far
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Test whether every tile has been visited
    pub const fn is_full(&self) -> bool {
        self.count == self.size.area()
    }
}
