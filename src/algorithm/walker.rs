//! Bounce walk over the tile grid
//!
//! The walk is the discretized light ray of arithmetic billiards: it leaves
//! a corner diagonally, reflects off the grid edges and, on a grid with
//! coprime sides, enters every tile exactly once. A reflection flips one
//! component of the heading and moves one tile along the edge. Landing on an
//! already entered tile keeps stepping without yielding until fresh ground
//! is found.

use crate::io::configuration::MAX_SLIDE_FACTOR;
use crate::io::error::{PatternError, invalid_parameter};
use crate::spatial::{GridSize, TilePos, VisitedGrid};
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// Canvas corner the walk starts from
///
/// Each corner mirrors the resulting pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-left corner, heading down-right
    TopLeft,
    /// Top-right corner, heading down-left
    TopRight,
    /// Bottom-right corner, heading up-left
    BottomRight,
    /// Bottom-left corner, heading up-right
    BottomLeft,
}

impl Corner {
    /// Every corner, in the numbering accepted by `FromStr`
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Kebab-case name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// Start tile and heading for a grid
    pub const fn initial_state(self, grid: GridSize) -> WalkerState {
        let (x, y, heading) = match self {
            Self::TopLeft => (0, 0, Heading::DownRight),
            Self::TopRight => (grid.last_col(), 0, Heading::DownLeft),
            Self::BottomRight => (grid.last_col(), grid.last_row(), Heading::UpLeft),
            Self::BottomLeft => (0, grid.last_row(), Heading::UpRight),
        };
        WalkerState {
            position: TilePos::new(x, y),
            heading,
        }
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Corner {
    type Err = PatternError;

    /// Accepts the kebab-case name or the index `0..=3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        if let Ok(index) = normalized.parse::<usize>() {
            return Self::ALL
                .get(index)
                .copied()
                .ok_or_else(|| invalid_parameter("corner", &s, &"corner index must be 0..=3"));
        }
        Self::ALL
            .into_iter()
            .find(|corner| corner.name() == normalized)
            .ok_or_else(|| {
                invalid_parameter(
                    "corner",
                    &s,
                    &"expected top-left, top-right, bottom-right or bottom-left",
                )
            })
    }
}

/// Diagonal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Towards column 0 and row 0
    UpLeft,
    /// Towards the last column and row 0
    UpRight,
    /// Towards column 0 and the last row
    DownLeft,
    /// Towards the last column and the last row
    DownRight,
}

impl Heading {
    /// Whether the horizontal component points right
    pub const fn is_rightward(self) -> bool {
        matches!(self, Self::UpRight | Self::DownRight)
    }

    /// Whether the vertical component points down
    pub const fn is_downward(self) -> bool {
        matches!(self, Self::DownLeft | Self::DownRight)
    }

    const fn from_components(rightward: bool, downward: bool) -> Self {
        match (rightward, downward) {
            (false, false) => Self::UpLeft,
            (true, false) => Self::UpRight,
            (false, true) => Self::DownLeft,
            (true, true) => Self::DownRight,
        }
    }

    /// Reverse the horizontal component
    #[must_use]
    pub const fn flip_horizontal(self) -> Self {
        Self::from_components(!self.is_rightward(), self.is_downward())
    }

    /// Reverse the vertical component
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Self::from_components(self.is_rightward(), !self.is_downward())
    }
}

/// Position and heading of the walker between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalkerState {
    /// Tile the walker stands on
    pub position: TilePos,
    /// Direction of the next move
    pub heading: Heading,
}

impl WalkerState {
    /// Apply one move of the bounce rule
    ///
    /// A horizontal edge is checked first: hitting it flips the horizontal
    /// heading and moves one tile vertically. Otherwise a vertical edge flips
    /// the vertical heading and moves one tile horizontally. Otherwise the
    /// move is diagonal. Returns `None` when the reduced move would still
    /// leave the grid, which only happens in a corner.
    #[must_use]
    pub const fn step(self, grid: GridSize) -> Option<Self> {
        let TilePos { x, y } = self.position;
        let rightward = self.heading.is_rightward();
        let downward = self.heading.is_downward();

        let horizontal_blocked = if rightward { x >= grid.last_col() } else { x == 0 };
        let vertical_blocked = if downward { y >= grid.last_row() } else { y == 0 };

        let (x, y, heading) = if horizontal_blocked {
            if vertical_blocked {
                return None;
            }
            (x, advance(y, downward), self.heading.flip_horizontal())
        } else if vertical_blocked {
            (advance(x, rightward), y, self.heading.flip_vertical())
        } else {
            (advance(x, rightward), advance(y, downward), self.heading)
        };

        Some(Self {
            position: TilePos::new(x, y),
            heading,
        })
    }
}

// Callers check the edge first, so neither branch can wrap.
const fn advance(value: u32, forward: bool) -> u32 {
    if forward { value + 1 } else { value - 1 }
}

/// Pull-based bounce walk yielding each entered tile once
///
/// The walker owns its visited grid. It is not restartable; build a new one
/// to walk again.
#[derive(Debug, Clone)]
pub struct BounceWalker {
    grid: GridSize,
    visited: VisitedGrid,
    next: Option<WalkerState>,
    slide_limit: usize,
}

impl BounceWalker {
    /// Start a walk from a corner of the grid
    pub fn new(grid: GridSize, corner: Corner) -> Self {
        let next = (grid.area() > 0).then(|| corner.initial_state(grid));
        Self {
            grid,
            visited: VisitedGrid::new(grid),
            next,
            slide_limit: MAX_SLIDE_FACTOR * grid.area(),
        }
    }

    /// State the next call to `next` will yield, if any
    pub const fn peek_state(&self) -> Option<WalkerState> {
        self.next
    }

    /// Number of tiles yielded so far
    pub const fn visited_count(&self) -> usize {
        self.visited.count()
    }

    /// Whether every tile of the grid has been yielded
    ///
    /// After the iterator is exhausted this is `false` only for grids whose
    /// sides are not coprime, where the ray closes before covering the grid.
    pub const fn is_complete(&self) -> bool {
        self.visited.is_full()
    }

    fn advance_from(&self, state: WalkerState) -> Option<WalkerState> {
        let mut current = state;
        for _ in 0..self.slide_limit {
            current = current.step(self.grid)?;
            if !self.visited.is_visited(current.position) {
                return Some(current);
            }
        }
        log::debug!(
            "walk on {}x{} grid stuck at {} after {} tiles",
            self.grid.width,
            self.grid.height,
            current.position,
            self.visited.count()
        );
        None
    }
}

impl Iterator for BounceWalker {
    type Item = TilePos;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.next.take()?;
        self.visited.mark(state.position);
        if !self.visited.is_full() {
            self.next = self.advance_from(state);
        }
        Some(state.position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.area() - self.visited.count();
        (usize::from(self.next.is_some()), Some(remaining))
    }
}

impl FusedIterator for BounceWalker {}

/// Start a bounce walk over a `grid_width x grid_height` tile grid
pub fn walk(grid_width: u32, grid_height: u32, corner: Corner) -> BounceWalker {
    BounceWalker::new(GridSize::new(grid_width, grid_height), corner)
}
