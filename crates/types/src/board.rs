//! # Board Module
//!
//! This module contains the pure geometry of the square game grid: its size,
//! positions on it, the two ship orientations and the four movement
//! directions used while laying out a fleet.
//!
//! ## Key Types
//!
//! - **`GridSize`** - Side length N of the square board (never zero)
//! - **`Position`** - A cell with x,y coordinates
//! - **`Orientation`** - Horizontal or vertical extent of a ship
//! - **`Direction`** - One-cell movement used by the placement session
//!
//! ## Board Layout
//!
//! - Coordinates are 0-indexed, valid cells satisfy `0 <= x, y < N`
//! - Flat views are stored in row-major order (`y * N + x`)
//! - Horizontal ships grow along +x, vertical ships along +y
//!
//! ## Usage Examples
//!
//! ```rust
//! use battleships_types::{cells_of, in_bounds, GridSize, Orientation, Position, ShipSpec};
//!
//! let grid = GridSize::new(8).unwrap();
//! let spec = ShipSpec::new(3, Orientation::Horizontal).unwrap();
//! let cells = cells_of(Position::new(5, 0), spec);
//! assert!(cells.iter().all(|cell| in_bounds(*cell, grid)));
//! assert!(!in_bounds(Position::new(8, 0), grid));
//! ```

use crate::ships::ShipSpec;
use crate::ClientError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// BOARD MODULE - Grid size, coordinates and orientation
// ============================================================================

/// Side length of the square game grid
///
/// Typical boards are 8 to 12 cells wide. Zero is rejected at construction,
/// so every `GridSize` has at least one cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    pub fn new(size: u8) -> Result<GridSize, ClientError> {
        if size == 0 {
            return Err(ClientError::Invalid("grid size must be positive"));
        }
        Ok(GridSize(size))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Row-major index of `pos`, or `None` when it lies outside the grid.
    pub fn index(self, pos: Position) -> Option<usize> {
        if !in_bounds(pos, self) {
            return None;
        }
        Some((pos.y as usize) * (self.0 as usize) + (pos.x as usize))
    }

    /// All cells of the grid in row-major order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let size = self.0;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position { x, y }))
    }
}

impl TryFrom<u8> for GridSize {
    type Error = ClientError;

    fn try_from(value: u8) -> Result<GridSize, ClientError> {
        GridSize::new(value)
    }
}

impl From<GridSize> for u8 {
    fn from(value: GridSize) -> u8 {
        value.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Represents a cell on the game board
///
/// Serialises as `{"x": .., "y": ..}`, the shape the contract uses for
/// ship anchors and shot targets. A `Position` is not bounds-checked on its
/// own; pair it with a [`GridSize`] through [`in_bounds`].
///
/// # Fields
/// * `x` - The column
/// * `y` - The row
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct Position {
    /// The column
    pub x: u8,
    /// The row
    pub y: u8,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: u8, y: u8) -> Position {
        Position { x, y }
    }

    /// The neighbouring cell in `direction`, or `None` past the zero edge
    /// or the `u8` range.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let Position { x, y } = self;
        match direction {
            Direction::Up => y.checked_sub(1).map(|y| Position { x, y }),
            Direction::Down => y.checked_add(1).map(|y| Position { x, y }),
            Direction::Left => x.checked_sub(1).map(|x| Position { x, y }),
            Direction::Right => x.checked_add(1).map(|x| Position { x, y }),
        }
    }

    /// The cell `distance` steps along `orientation`.
    ///
    /// Saturates at `u8::MAX`, which no grid contains, so an overflowing
    /// ship is always reported out of bounds rather than wrapping around.
    pub fn offset(self, orientation: Orientation, distance: u8) -> Position {
        match orientation {
            Orientation::Horizontal => Position {
                x: self.x.saturating_add(distance),
                y: self.y,
            },
            Orientation::Vertical => Position {
                x: self.x,
                y: self.y.saturating_add(distance),
            },
        }
    }
}

impl From<(u8, u8)> for Position {
    fn from(value: (u8, u8)) -> Position {
        Position::new(value.0, value.1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis along which a ship extends from its anchor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn flip(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// One-cell movement of the active ship
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Whether `pos` lies on a grid of side `grid`.
pub fn in_bounds(pos: Position, grid: GridSize) -> bool {
    pos.x < grid.0 && pos.y < grid.0
}

/// The `spec.length` cells covered by a ship anchored at `anchor`.
///
/// Never fails: cells beyond the grid are returned as they are and it is up
/// to the caller to reject them with [`in_bounds`].
pub fn cells_of(anchor: Position, spec: ShipSpec) -> Vec<Position> {
    (0..spec.length)
        .map(|i| anchor.offset(spec.orientation, i))
        .collect()
}
