//! # Profiles Module
//!
//! Built-in game profiles. A profile fixes the grid size and the fleet
//! manifest of a new game, and with them the price of creating it.
//!
//! ## Creation Cost
//!
//! `500000 + 25000 * N^2 - 25000 * (sum of ship lengths)` uscrt: every
//! empty cell the owner leaves on the board costs 25000 uscrt on top of the
//! base price.
//!
//! | Profile | Grid | Ships | Cost (uscrt) |
//! |---|---|---|---|
//! | Classic | 10 | 2, 3, 4, 6 | 2 625 000 |
//! | Long Ships | 12 | 3, 4, 5, 7 | 3 625 000 |
//! | Mini | 8 | 2, 3, 4 | 1 875 000 |

use crate::session::PlacementSession;
use battleships_types::{ClientError, FleetManifest, GridSize};
use serde::Serialize;

pub const BASE_CREATION_COST: u128 = 500_000;
pub const COST_PER_CELL: u128 = 25_000;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GameProfile {
    pub name: &'static str,
    pub grid_size: u8,
    pub ship_sizes: &'static [u8],
}

pub const CLASSIC: GameProfile = GameProfile {
    name: "Classic",
    grid_size: 10,
    ship_sizes: &[2, 3, 4, 6],
};

pub const LONG_SHIPS: GameProfile = GameProfile {
    name: "Long Ships",
    grid_size: 12,
    ship_sizes: &[3, 4, 5, 7],
};

pub const MINI: GameProfile = GameProfile {
    name: "Mini",
    grid_size: 8,
    ship_sizes: &[2, 3, 4],
};

pub const PROFILES: [GameProfile; 3] = [CLASSIC, LONG_SHIPS, MINI];

impl GameProfile {
    pub fn by_name(name: &str) -> Option<GameProfile> {
        PROFILES.iter().copied().find(|profile| profile.name == name)
    }

    /// Price of creating a game with this profile, in uscrt.
    pub fn creation_cost(&self) -> u128 {
        let cells = u128::from(self.grid_size) * u128::from(self.grid_size);
        let ship_cells: u128 = self.ship_sizes.iter().map(|&l| u128::from(l)).sum();
        (BASE_CREATION_COST + COST_PER_CELL * cells).saturating_sub(COST_PER_CELL * ship_cells)
    }

    pub fn manifest(&self) -> Result<FleetManifest, ClientError> {
        FleetManifest::new(GridSize::new(self.grid_size)?, self.ship_sizes.to_vec())
    }

    /// A fresh placement session for this profile.
    pub fn session(&self) -> Result<PlacementSession, ClientError> {
        Ok(PlacementSession::new(self.manifest()?))
    }
}
