use std::collections::HashSet;

use battleships_types::{
    can_place, cells_of, in_bounds, GridSize, Orientation, PlacedShip, Position, ShipSpec,
};
use proptest::prelude::*;

fn spec(length: u8, orientation: Orientation) -> ShipSpec {
    ShipSpec::new(length, orientation).expect("positive length")
}

fn all_in_bounds(anchor: Position, spec: ShipSpec, grid: GridSize) -> bool {
    cells_of(anchor, spec)
        .into_iter()
        .all(|cell| in_bounds(cell, grid))
}

proptest! {
    #[test]
    fn origin_horizontal_fits_iff_length_within_grid(n in 1_u8..=40, length in 1_u8..=60) {
        let grid = GridSize::new(n).unwrap();
        let ship = spec(length, Orientation::Horizontal);
        prop_assert_eq!(all_in_bounds(Position::ORIGIN, ship, grid), length <= n);
        prop_assert_eq!(can_place(Position::ORIGIN, ship, &[], grid), length <= n);
    }

    #[test]
    fn far_edge_anchor_always_fits(n in 1_u8..=40, length_seed in 0_u8..=255) {
        let length = length_seed % n + 1;
        let grid = GridSize::new(n).unwrap();
        let anchor = Position::new(n - length, 0);
        prop_assert!(all_in_bounds(anchor, spec(length, Orientation::Horizontal), grid));
        prop_assert!(!all_in_bounds(
            Position::new(n - length + 1, 0),
            spec(length, Orientation::Horizontal),
            grid
        ));
    }
}

/// Two non-overlapping ships of length 2 and 3 on an 8x8 grid, then every
/// possible third candidate: refused iff it shares a cell with either ship.
#[test]
fn third_candidate_refused_iff_it_intersects_existing_ships() {
    let grid = GridSize::new(8).unwrap();
    let layouts = [
        (
            PlacedShip::new(0, Position::new(0, 0), spec(2, Orientation::Horizontal)),
            PlacedShip::new(1, Position::new(3, 3), spec(3, Orientation::Vertical)),
        ),
        (
            PlacedShip::new(0, Position::new(6, 7), spec(2, Orientation::Horizontal)),
            PlacedShip::new(1, Position::new(0, 5), spec(3, Orientation::Horizontal)),
        ),
        (
            PlacedShip::new(0, Position::new(4, 0), spec(2, Orientation::Vertical)),
            PlacedShip::new(1, Position::new(5, 0), spec(3, Orientation::Vertical)),
        ),
    ];

    for (first, second) in layouts {
        let existing = vec![first, second];
        let occupied: HashSet<Position> = existing.iter().flat_map(|s| s.cells()).collect();
        assert_eq!(occupied.len(), 5, "fixture ships must not overlap");

        let mut refused_for_overlap = 0;
        for length in [2, 3] {
            for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                let candidate = spec(length, orientation);
                for anchor in grid.positions() {
                    if !all_in_bounds(anchor, candidate, grid) {
                        assert!(!can_place(anchor, candidate, &existing, grid));
                        continue;
                    }
                    let intersects = cells_of(anchor, candidate)
                        .iter()
                        .any(|cell| occupied.contains(cell));
                    if intersects {
                        refused_for_overlap += 1;
                    }
                    assert_eq!(
                        can_place(anchor, candidate, &existing, grid),
                        !intersects,
                        "anchor {anchor} length {length} {orientation:?}"
                    );
                }
            }
        }
        assert!(refused_for_overlap > 0);
    }
}
