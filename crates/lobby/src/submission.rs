//! The create-game payload produced by a complete placement session.

use battleships_types::{Coin, ExecuteMsg, GridSize, ShipConstructor};
use serde::Serialize;

/// Name used when the player leaves the game name blank
pub const DEFAULT_GAME_NAME: &str = "My Game";

/// Everything the transport needs to create a game
///
/// # Fields
/// * `size` - Side of the grid
/// * `name` - Display name, trimmed and never empty
/// * `ships` - The fleet, in commit order
/// * `cost` - Funds attached to the request
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameSubmission {
    pub size: GridSize,
    pub name: String,
    pub ships: Vec<ShipConstructor>,
    pub cost: Coin,
}

impl GameSubmission {
    pub fn new(
        size: GridSize,
        name: &str,
        ships: Vec<ShipConstructor>,
        cost: u128,
    ) -> GameSubmission {
        let name = match name.trim() {
            "" => DEFAULT_GAME_NAME,
            trimmed => trimmed,
        };
        GameSubmission {
            size,
            name: name.to_string(),
            ships,
            cost: Coin::uscrt(cost),
        }
    }

    pub fn to_execute_msg(&self) -> ExecuteMsg {
        ExecuteMsg::CreateGame {
            size: self.size.get(),
            name: self.name.clone(),
            ships: self.ships.clone(),
        }
    }
}
