//! # Ships Module
//!
//! Ship specifications, ships committed to a layout, and the fleet manifest
//! that says which ship lengths a layout must contain.
//!
//! ## Ship Rules
//!
//! - A ship has a positive length and covers `length` consecutive cells
//! - It extends from its anchor along its orientation
//! - The fleet manifest lists each required length exactly once
//! - No required length may exceed the side of the grid

use crate::board::{cells_of, GridSize, Orientation, Position};
use crate::msg::ShipConstructor;
use crate::ClientError;
use serde::{Deserialize, Serialize};

// ============================================================================
// SHIPS MODULE - Specifications and committed ships
// ============================================================================

/// Length and orientation of a ship, independent of where it sits
///
/// Zero-length ships cannot be built, so every `ShipSpec` that reaches the
/// validator covers at least one cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ShipSpec {
    pub length: u8,
    pub orientation: Orientation,
}

impl ShipSpec {
    pub fn new(length: u8, orientation: Orientation) -> Result<ShipSpec, ClientError> {
        if length == 0 {
            return Err(ClientError::Invalid("ship length must be positive"));
        }
        Ok(ShipSpec {
            length,
            orientation,
        })
    }

    pub fn flipped(self) -> ShipSpec {
        ShipSpec {
            orientation: self.orientation.flip(),
            ..self
        }
    }
}

/// A ship committed to a layout
///
/// # Fields
/// * `id` - Position of the ship in commit order (0 for the first commit)
/// * `anchor` - The cell the ship extends from
/// * `spec` - Length and orientation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacedShip {
    /// Position of the ship in commit order
    pub id: usize,
    /// The cell the ship extends from
    pub anchor: Position,
    /// Length and orientation
    pub spec: ShipSpec,
}

impl PlacedShip {
    pub fn new(id: usize, anchor: Position, spec: ShipSpec) -> PlacedShip {
        PlacedShip { id, anchor, spec }
    }

    pub fn cells(&self) -> Vec<Position> {
        cells_of(self.anchor, self.spec)
    }

    pub fn length(&self) -> u8 {
        self.spec.length
    }

    /// The contract's constructor for this ship.
    pub fn to_constructor(&self) -> ShipConstructor {
        ShipConstructor {
            position: self.anchor,
            length: self.spec.length,
            is_horizontal: self.spec.orientation.is_horizontal(),
        }
    }
}

/// The ship lengths a layout must contain, on a grid of a given size
///
/// # Example
/// ```rust
/// use battleships_types::{FleetManifest, GridSize};
///
/// let manifest = FleetManifest::new(GridSize::new(10).unwrap(), vec![2, 3, 4, 6]).unwrap();
/// assert!(manifest.requires(6));
/// assert!(FleetManifest::new(GridSize::new(5).unwrap(), vec![2, 2]).is_err());
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FleetManifest {
    grid_size: GridSize,
    ship_sizes: Vec<u8>,
}

impl FleetManifest {
    pub fn new(grid_size: GridSize, ship_sizes: Vec<u8>) -> Result<FleetManifest, ClientError> {
        if ship_sizes.is_empty() {
            return Err(ClientError::Invalid("fleet manifest is empty"));
        }
        for (i, &length) in ship_sizes.iter().enumerate() {
            if length == 0 {
                return Err(ClientError::Invalid("ship length must be positive"));
            }
            if length > grid_size.get() {
                return Err(ClientError::Invalid("ship longer than the grid"));
            }
            if ship_sizes[..i].contains(&length) {
                return Err(ClientError::Invalid("duplicate ship length in manifest"));
            }
        }
        Ok(FleetManifest {
            grid_size,
            ship_sizes,
        })
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn ship_sizes(&self) -> &[u8] {
        &self.ship_sizes
    }

    pub fn len(&self) -> usize {
        self.ship_sizes.len()
    }

    pub fn requires(&self, length: u8) -> bool {
        self.ship_sizes.contains(&length)
    }
}
