//! Arithmetic billiards and chaotic noise wallpaper generation
//!
//! A billiards wallpaper follows a ray that leaves a corner of the canvas at
//! 45 degrees and reflects off its edges. The canvas is cut into square tiles
//! sized so the tile grid has coprime sides; the ray then enters every tile
//! exactly once, and tiles are painted with alternating colors in the order
//! the ray enters them.

#![forbid(unsafe_code)]

/// Walk, rendering and the generation methods built on them
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Integer arithmetic for tile sizing
pub mod math;
/// Tile geometry, coordinates and visited tracking
pub mod spatial;

pub use algorithm::billiards::{BilliardsConfig, generate};
pub use algorithm::drawer::Drawer;
pub use algorithm::walker::Corner;
pub use io::error::{PatternError, Result};
