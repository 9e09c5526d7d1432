//! # Secret Battleships Types
//!
//! Shared vocabulary of the battleship browser client: grid geometry, ship
//! specifications, the client-side placement validator, ledger events as
//! returned by the chain, and the JSON messages exchanged with the contract.
//!
//! ## Architecture Overview
//!
//! - **`board`** - Grid size, positions, orientations and cell geometry
//! - **`ships`** - Ship specifications, placed ships and fleet manifests
//! - **`validation`** - Placement validation strategies and `can_place`
//! - **`events`** - Opaque ledger events emitted by completed transactions
//! - **`msg`** - Execute/query messages and query answers of the contract
//! - **`coin`** - Currency amounts and denominations
//!
//! The contract remains the authority on every rule checked here. The
//! validator only keeps obviously invalid fleets from being submitted.
//!
//! ## Error Handling
//!
//! Fallible constructors and remote operations return [`ClientError`]:
//! - `ClientError::Invalid` - Invalid input or state
//! - `ClientError::NotFound` - Resource not found
//! - `ClientError::Forbidden` - Operation not allowed for this caller
//! - `ClientError::Finished` - Game has already ended
//! - `ClientError::Gateway` - The remote gateway failed to answer
//! - `ClientError::Malformed` - A remote answer could not be decoded
//! - `ClientError::Config` - Client configuration is missing or invalid

#![allow(clippy::len_without_is_empty)]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod board;
pub mod coin;
pub mod events;
pub mod msg;
pub mod serde_u128_string;
pub mod ships;
pub mod validation;

use serde::Serialize;
use thiserror::Error;

// Re-export types from modules
pub use board::{cells_of, in_bounds, Direction, GridSize, Orientation, Position};
pub use coin::{format_amount, Coin, DENOM, SHOT_COST, UNITS_PER_SCRT};
pub use events::{EventAttribute, LedgerEvent, AMOUNT_KEY, COIN_RECEIVED, RECEIVER_KEY};
pub use msg::{
    AllGamesAnswer, AllGamesResponse, ExecuteMsg, GameQueryAnswer, GameResponse, QueryMsg,
    ShipConstructor, ShipStatus, ShotFired,
};
pub use ships::{FleetManifest, PlacedShip, ShipSpec};
pub use validation::{
    can_place, check_placement, validate_fleet, BoundsValidationStrategy,
    OverlapValidationStrategy, PlacementError, ShipLengthValidationStrategy, ValidationInput,
    ValidationStrategy,
};

/// Error type for all client operations
///
/// Serialised with a tagged representation so a JavaScript host can branch
/// on `kind` without parsing the message.
///
/// # Variants
/// * `Invalid(&'static str)` - Invalid input or state (e.g. zero-length ship)
/// * `NotFound(String)` - Resource not found (e.g. game id)
/// * `Forbidden(&'static str)` - Operation not allowed (e.g. owner shooting own game)
/// * `Finished` - Game has already ended
/// * `Gateway(String)` - The transport could not complete the call
/// * `Malformed(String)` - A response from the gateway could not be decoded
/// * `Config(String)` - Missing or unparsable client configuration
#[derive(Debug, Error, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "data")]
pub enum ClientError {
    /// Invalid input or state
    #[error("invalid input: {0}")]
    Invalid(&'static str),
    /// Resource not found
    #[error("not found: {0}")]
    NotFound(String),
    /// Operation not allowed
    #[error("forbidden: {0}")]
    Forbidden(&'static str),
    /// Game has already ended
    #[error("already finished")]
    Finished,
    /// Transport failure reported by the gateway
    #[error("gateway failure: {0}")]
    Gateway(String),
    /// Undecodable response
    #[error("malformed response: {0}")]
    Malformed(String),
    /// Missing or invalid configuration
    #[error("configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> ClientError {
        ClientError::Malformed(err.to_string())
    }
}
