//! # Validation Module
//!
//! Client-side placement pre-check built from small validation strategies.
//! Each strategy checks one rule; [`check_placement`] runs the default chain
//! and stops at the first rejection.
//!
//! ## Default Chain
//!
//! 1. **`ShipLengthValidationStrategy`** - the candidate covers at least one cell
//! 2. **`BoundsValidationStrategy`** - every candidate cell lies on the grid
//! 3. **`OverlapValidationStrategy`** - no candidate cell is already occupied
//!
//! The checks are conservative: anything rejected here would also be rejected
//! by the contract, which stays the authority on the final layout.
//!
//! ## Example
//! ```rust
//! use battleships_types::{can_place, GridSize, Orientation, PlacedShip, Position, ShipSpec};
//!
//! let grid = GridSize::new(8).unwrap();
//! let two = ShipSpec::new(2, Orientation::Horizontal).unwrap();
//! let placed = vec![PlacedShip::new(0, Position::new(0, 0), two)];
//!
//! let three = ShipSpec::new(3, Orientation::Vertical).unwrap();
//! assert!(!can_place(Position::new(1, 0), three, &placed, grid));
//! assert!(can_place(Position::new(2, 0), three, &placed, grid));
//! ```

use crate::board::{cells_of, in_bounds, GridSize, Position};
use crate::ships::{PlacedShip, ShipSpec};
use std::collections::HashMap;
use thiserror::Error;

/// Why a candidate placement was refused
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("ship length must be positive")]
    ZeroLength,
    #[error("cell {cell} is outside the grid")]
    OutOfBounds { cell: Position },
    #[error("cell {cell} is already taken by ship #{ship}")]
    Overlap { cell: Position, ship: usize },
}

/// Everything a strategy needs to judge one candidate ship
///
/// # Fields
/// * `anchor` - Anchor of the candidate
/// * `spec` - Length and orientation of the candidate
/// * `existing` - Ships already committed to the layout
/// * `grid` - Side of the board
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    pub anchor: Position,
    pub spec: ShipSpec,
    pub existing: &'a [PlacedShip],
    pub grid: GridSize,
}

impl ValidationInput<'_> {
    pub fn cells(&self) -> Vec<Position> {
        cells_of(self.anchor, self.spec)
    }
}

/// One placement rule
pub trait ValidationStrategy {
    fn validate(&self, input: &ValidationInput<'_>) -> Result<(), PlacementError>;
}

pub struct ShipLengthValidationStrategy;

impl ValidationStrategy for ShipLengthValidationStrategy {
    fn validate(&self, input: &ValidationInput<'_>) -> Result<(), PlacementError> {
        if input.spec.length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        Ok(())
    }
}

pub struct BoundsValidationStrategy;

impl ValidationStrategy for BoundsValidationStrategy {
    fn validate(&self, input: &ValidationInput<'_>) -> Result<(), PlacementError> {
        match input.cells().into_iter().find(|cell| !in_bounds(*cell, input.grid)) {
            Some(cell) => Err(PlacementError::OutOfBounds { cell }),
            None => Ok(()),
        }
    }
}

/// Rejects a candidate sharing even a single cell with a committed ship.
pub struct OverlapValidationStrategy;

impl ValidationStrategy for OverlapValidationStrategy {
    fn validate(&self, input: &ValidationInput<'_>) -> Result<(), PlacementError> {
        let occupied: HashMap<Position, usize> = input
            .existing
            .iter()
            .flat_map(|ship| ship.cells().into_iter().map(move |cell| (cell, ship.id)))
            .collect();

        for cell in input.cells() {
            if let Some(&ship) = occupied.get(&cell) {
                return Err(PlacementError::Overlap { cell, ship });
            }
        }
        Ok(())
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// Runs the default strategy chain for one candidate ship.
pub fn check_placement(
    anchor: Position,
    spec: ShipSpec,
    existing: &[PlacedShip],
    grid: GridSize,
) -> Result<(), PlacementError> {
    let input = ValidationInput {
        anchor,
        spec,
        existing,
        grid,
    };
    let strategies: [&dyn ValidationStrategy; 3] = [
        &ShipLengthValidationStrategy,
        &BoundsValidationStrategy,
        &OverlapValidationStrategy,
    ];
    strategies
        .iter()
        .try_for_each(|strategy| strategy.validate(&input))
}

/// Whether a ship may be placed at `anchor` next to the `existing` ones.
pub fn can_place(anchor: Position, spec: ShipSpec, existing: &[PlacedShip], grid: GridSize) -> bool {
    check_placement(anchor, spec, existing, grid).is_ok()
}

/// Re-checks a full layout, each ship against the ones committed before it.
pub fn validate_fleet(grid: GridSize, ships: &[PlacedShip]) -> Result<(), PlacementError> {
    for (i, ship) in ships.iter().enumerate() {
        check_placement(ship.anchor, ship.spec, &ships[..i], grid)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Orientation;

    fn grid(n: u8) -> GridSize {
        GridSize::new(n).unwrap()
    }

    fn spec(length: u8, orientation: Orientation) -> ShipSpec {
        ShipSpec::new(length, orientation).unwrap()
    }

    #[test]
    fn zero_length_is_refused_first() {
        let zero = ShipSpec {
            length: 0,
            orientation: Orientation::Horizontal,
        };
        assert_eq!(
            check_placement(Position::new(9, 9), zero, &[], grid(5)),
            Err(PlacementError::ZeroLength)
        );
    }

    #[test]
    fn bounds_reports_first_outside_cell() {
        let result = check_placement(
            Position::new(3, 1),
            spec(3, Orientation::Horizontal),
            &[],
            grid(5),
        );
        assert_eq!(
            result,
            Err(PlacementError::OutOfBounds {
                cell: Position::new(5, 1)
            })
        );
    }

    #[test]
    fn full_width_ship_only_fits_from_origin_edge() {
        let full = spec(5, Orientation::Horizontal);
        assert!(can_place(Position::new(0, 4), full, &[], grid(5)));
        assert!(!can_place(Position::new(1, 4), full, &[], grid(5)));
    }

    #[test]
    fn single_shared_cell_is_overlap() {
        let placed = vec![PlacedShip::new(
            0,
            Position::new(2, 2),
            spec(3, Orientation::Vertical),
        )];
        assert_eq!(
            check_placement(
                Position::new(0, 4),
                spec(3, Orientation::Horizontal),
                &placed,
                grid(8)
            ),
            Err(PlacementError::Overlap {
                cell: Position::new(2, 4),
                ship: 0
            })
        );
        assert!(can_place(
            Position::new(0, 5),
            spec(3, Orientation::Horizontal),
            &placed,
            grid(8)
        ));
    }

    #[test]
    fn fleet_validation_checks_against_earlier_ships() {
        let two = spec(2, Orientation::Horizontal);
        let three = spec(3, Orientation::Vertical);
        let good = vec![
            PlacedShip::new(0, Position::new(0, 0), two),
            PlacedShip::new(1, Position::new(0, 1), three),
        ];
        assert!(validate_fleet(grid(5), &good).is_ok());

        let bad = vec![
            PlacedShip::new(0, Position::new(0, 0), two),
            PlacedShip::new(1, Position::new(1, 0), three),
        ];
        assert!(matches!(
            validate_fleet(grid(5), &bad),
            Err(PlacementError::Overlap { ship: 0, .. })
        ));
    }
}
