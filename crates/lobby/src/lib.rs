//! # Battleship Lobby
//!
//! Everything the player does before a game exists on chain: pick a game
//! profile, lay out the fleet on the grid, and turn the finished layout into
//! a create-game submission.
//!
//! ## Architecture Overview
//!
//! - **`session`** - Placement session state machine (select, move, rotate, commit)
//! - **`commands`** - Keyboard mapping onto session commands
//! - **`profiles`** - Built-in game profiles and their creation cost
//! - **`submission`** - The create-game payload built from a complete session
//!
//! ## Game Creation Flow
//! 1. **Profile**: the player picks a profile, which fixes the grid and fleet manifest
//! 2. **Placement**: ships are selected, moved, rotated and committed one by one
//! 3. **Submission**: once every required size is committed the session
//!    yields the payload handed to the transport
//!
//! Illegal placement actions are refused, never raised: every session
//! operation reports whether it was applied and leaves the state untouched
//! otherwise.
//!
//! ## Example
//! ```rust
//! use battleships_lobby::PlacementSession;
//! use battleships_types::{FleetManifest, GridSize, Position};
//!
//! let manifest = FleetManifest::new(GridSize::new(5).unwrap(), vec![2, 3]).unwrap();
//! let mut session = PlacementSession::new(manifest);
//!
//! assert!(session.select_size(2));
//! assert!(session.commit());
//!
//! assert!(session.select_size(3));
//! assert!(!session.commit()); // overlaps the first ship
//! assert!(session.move_to(Position::new(2, 0)));
//! assert!(session.commit());
//! assert!(session.is_complete());
//! ```

pub mod commands;
pub mod profiles;
pub mod session;
pub mod submission;

pub use battleships_types::ClientError;
pub use commands::PlacementCommand;
pub use profiles::{GameProfile, CLASSIC, LONG_SHIPS, MINI, PROFILES};
pub use session::{ActiveShip, GridMark, PlacementSession, SessionState};
pub use submission::{GameSubmission, DEFAULT_GAME_NAME};
