//! # View Module
//!
//! Read-only projection of a fetched game. A [`GameView`] is rebuilt from
//! every [`GameResponse`] the contract returns and never outlives it, so
//! nothing it reports can go stale between fetches.
//!
//! ## Derived Facts
//!
//! - Ships remaining: total ships minus the sunk ones
//! - Shot lookup: position to hit/miss, built once per fetch
//! - Ownership: exact address comparison with the game owner

use battleships_types::{format_amount, in_bounds, ClientError, GameResponse, GridSize, Position};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a shooter knows about one cell of a game grid
///
/// # Variants
/// * `Unknown` - Not shot at yet
/// * `Hit` - Shot at and a ship was there
/// * `Miss` - Shot at and the cell was empty
///
/// # Example
/// ```rust
/// use battleships_game::ShotCell;
///
/// assert_eq!(ShotCell::from_hit(true), ShotCell::Hit);
/// assert_eq!(ShotCell::default(), ShotCell::Unknown);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ShotCell {
    #[default]
    Unknown,
    Hit,
    Miss,
}

impl ShotCell {
    pub fn from_hit(hit: bool) -> ShotCell {
        if hit {
            ShotCell::Hit
        } else {
            ShotCell::Miss
        }
    }
}

/// Derived view of one game
///
/// # Fields
/// * `summary` - The game as fetched
/// * `shots` - Hit flag of every position shot at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    summary: GameResponse,
    shots: HashMap<Position, bool>,
}

impl GameView {
    pub fn new(summary: GameResponse) -> GameView {
        let mut shots = HashMap::with_capacity(summary.shots_taken.len());
        for shot in &summary.shots_taken {
            // a repeated position keeps a hit once one was reported
            *shots.entry(shot.position).or_insert(false) |= shot.hit;
        }
        GameView { summary, shots }
    }

    pub fn summary(&self) -> &GameResponse {
        &self.summary
    }

    pub fn id(&self) -> u128 {
        self.summary.game_id
    }

    pub fn name(&self) -> &str {
        &self.summary.name
    }

    pub fn grid_size(&self) -> GridSize {
        self.summary.size
    }

    pub fn total_ships(&self) -> usize {
        self.summary.ships.len()
    }

    pub fn sunk_ships(&self) -> usize {
        self.summary.ships.iter().filter(|ship| ship.sunk).count()
    }

    pub fn ships_remaining(&self) -> usize {
        self.total_ships() - self.sunk_ships()
    }

    /// `Some(hit)` when `pos` was shot at, `None` otherwise.
    pub fn is_shot_at(&self, pos: Position) -> Option<bool> {
        self.shots.get(&pos).copied()
    }

    pub fn is_owner(&self, address: &str) -> bool {
        address == self.summary.owner
    }

    pub fn is_completed(&self) -> bool {
        self.summary.completed
    }

    /// Row-major grid of what is known about each cell.
    pub fn shot_grid(&self) -> Vec<ShotCell> {
        self.grid_size()
            .positions()
            .map(|pos| self.is_shot_at(pos).map_or(ShotCell::Unknown, ShotCell::from_hit))
            .collect()
    }

    /// Pre-checks a shot by `shooter` at `target` before paying for it.
    ///
    /// Owner, bounds and repeat checks run in the contract's order; a
    /// finished game is reported only for an otherwise valid shot.
    pub fn check_shot(&self, target: Position, shooter: &str) -> Result<(), ClientError> {
        if self.is_owner(shooter) {
            return Err(ClientError::Forbidden("owner cannot shoot at own game"));
        }
        if !in_bounds(target, self.grid_size()) {
            return Err(ClientError::Invalid("out of bounds"));
        }
        if self.shots.contains_key(&target) {
            return Err(ClientError::Invalid("position already shot"));
        }
        if self.is_completed() {
            return Err(ClientError::Finished);
        }
        Ok(())
    }

    /// Remaining pot in SCRT, e.g. `"2.625"`.
    pub fn possible_winnings(&self) -> String {
        format_amount(self.summary.total_reward)
    }
}

impl From<GameResponse> for GameView {
    fn from(summary: GameResponse) -> GameView {
        GameView::new(summary)
    }
}
