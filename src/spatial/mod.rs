//! Spatial data structures for the tile grid
//!
//! This module contains spatial-related functionality including:
//! - Tile sizing and the pattern band within the canvas
//! - Tile coordinates and visited-tile tracking

/// Tile sizing and pattern band placement
pub mod geometry;
/// Tile coordinates and visited-tile bit grid
pub mod grid;

pub use geometry::TileGeometry;
pub use grid::{GridSize, TilePos, VisitedGrid};
