//! # Messages Module
//!
//! JSON messages understood by the battleship contract, and the answers it
//! gives to queries. Field names follow the contract's snake_case schema.
//!
//! ## Execute Messages
//! - `create_game { size, name, ships }` - paid with the profile's creation cost
//! - `take_shot { game_id, x, y }` - paid with [`crate::SHOT_COST`]
//! - `collect_winnings { game_id }` - no funds attached
//!
//! ## Queries
//! - `game { game_id }` -> `{ "game": GameResponse }`
//! - `all_games {}` -> `{ "all_games": { "ids": [...] } }`

use crate::board::{GridSize, Position};
use crate::serde_u128_string;
use serde::{Deserialize, Serialize};

// ============================================================================
// EXECUTE / QUERY MESSAGES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    CreateGame {
        size: u8,
        name: String,
        ships: Vec<ShipConstructor>,
    },
    TakeShot {
        #[serde(with = "serde_u128_string")]
        game_id: u128,
        x: u8,
        y: u8,
    },
    CollectWinnings {
        #[serde(with = "serde_u128_string")]
        game_id: u128,
    },
}

/// One ship of a create-game request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipConstructor {
    pub position: Position,
    pub length: u8,
    pub is_horizontal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Game {
        #[serde(with = "serde_u128_string")]
        game_id: u128,
    },
    AllGames {},
}

// ============================================================================
// QUERY ANSWERS
// ============================================================================

/// Answer to the `game` query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameQueryAnswer {
    pub game: GameResponse,
}

/// Public state of one game as reported by the contract
///
/// # Fields
/// * `game_id` - Numeric identifier
/// * `size` - Side of the grid
/// * `total_reward` - Pot still to be won, in uscrt
/// * `shots_taken` - Every shot fired so far, in order
/// * `name` - Display name chosen by the owner
/// * `ships` - Length and sunk flag of each ship
/// * `owner` - Address of the creator
/// * `completed` - All ships sunk
/// * `winnings_collected` - The owner collected what remained of the pot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResponse {
    #[serde(with = "serde_u128_string")]
    pub game_id: u128,
    pub size: GridSize,
    #[serde(with = "serde_u128_string")]
    pub total_reward: u128,
    #[serde(default)]
    pub shots_taken: Vec<ShotFired>,
    pub name: String,
    #[serde(default)]
    pub ships: Vec<ShipStatus>,
    pub owner: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub winnings_collected: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShotFired {
    pub position: Position,
    pub hit: bool,
}

/// A ship as seen by other players: only its length and whether it sank
///
/// Older contract builds report ships as bare lengths; those decode as
/// not sunk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "ShipStatusInput")]
pub struct ShipStatus {
    pub length: u8,
    pub sunk: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ShipStatusInput {
    Length(u8),
    Full {
        length: u8,
        #[serde(default)]
        sunk: bool,
    },
}

impl From<ShipStatusInput> for ShipStatus {
    fn from(input: ShipStatusInput) -> ShipStatus {
        match input {
            ShipStatusInput::Length(length) => ShipStatus {
                length,
                sunk: false,
            },
            ShipStatusInput::Full { length, sunk } => ShipStatus { length, sunk },
        }
    }
}

/// Answer to the `all_games` query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllGamesAnswer {
    pub all_games: AllGamesResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AllGamesResponse {
    #[serde(with = "serde_u128_string::vec")]
    pub ids: Vec<u128>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn execute_messages_use_contract_schema() {
        let msg = ExecuteMsg::CreateGame {
            size: 10,
            name: "My Game".to_string(),
            ships: vec![ShipConstructor {
                position: Position::new(1, 2),
                length: 3,
                is_horizontal: true,
            }],
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"create_game": {
                "size": 10,
                "name": "My Game",
                "ships": [{"position": {"x": 1, "y": 2}, "length": 3, "is_horizontal": true}]
            }})
        );

        let shot = ExecuteMsg::TakeShot {
            game_id: 4,
            x: 0,
            y: 9,
        };
        assert_eq!(
            serde_json::to_value(&shot).unwrap(),
            json!({"take_shot": {"game_id": "4", "x": 0, "y": 9}})
        );

        let collect = ExecuteMsg::CollectWinnings { game_id: 4 };
        assert_eq!(
            serde_json::to_value(&collect).unwrap(),
            json!({"collect_winnings": {"game_id": "4"}})
        );
    }

    #[test]
    fn queries_use_contract_schema() {
        assert_eq!(
            serde_json::to_value(QueryMsg::Game { game_id: 12 }).unwrap(),
            json!({"game": {"game_id": "12"}})
        );
        assert_eq!(
            serde_json::to_value(QueryMsg::AllGames {}).unwrap(),
            json!({"all_games": {}})
        );
    }

    #[test]
    fn game_answer_accepts_both_ship_shapes() {
        let answer: GameQueryAnswer = serde_json::from_value(json!({"game": {
            "game_id": "3",
            "size": 8,
            "total_reward": "1875000",
            "shots_taken": [{"position": {"x": 1, "y": 1}, "hit": true}],
            "name": "Mini",
            "ships": [2, {"length": 3, "sunk": true}],
            "owner": "secret1owner"
        }}))
        .unwrap();
        let game = answer.game;
        assert_eq!(game.game_id, 3);
        assert_eq!(game.size.get(), 8);
        assert_eq!(game.total_reward, 1_875_000);
        assert_eq!(
            game.ships,
            vec![
                ShipStatus {
                    length: 2,
                    sunk: false
                },
                ShipStatus {
                    length: 3,
                    sunk: true
                }
            ]
        );
        assert!(!game.completed);
        assert!(!game.winnings_collected);
    }

    #[test]
    fn all_games_answer_decodes_numeric_or_string_ids() {
        let answer: AllGamesAnswer =
            serde_json::from_value(json!({"all_games": {"ids": ["1", 2]}})).unwrap();
        assert_eq!(answer.all_games.ids, vec![1, 2]);
    }
}
