//! # Secret Battleships Game
//!
//! Everything the browser client does once a game exists: reading rewards
//! back from transaction events, projecting fetched games for display, and
//! talking to the contract through a pluggable gateway.
//!
//! ## Architecture Overview
//!
//! - **`outcome`** - Transaction results and the reward interpreter
//! - **`view`** - Derived, per-fetch view of a game
//! - **`config`** - Client configuration read from the environment
//! - **`gateway`** - The `ContractGateway` seam to the chain
//! - **`client`** - `BattleshipClient`, the façade used by the UI
//!
//! ## Game Flow
//! 1. **Create**: a complete placement session is submitted with `make_game`
//! 2. **Browse**: `get_all_games` lists every game, wrapped in a `GameView`
//! 3. **Shoot**: `fire` checks the target, pays the shot cost and returns a
//!    `RewardVerdict`
//! 4. **Collect**: the owner of a finished game calls `collect_winnings`
//!
//! ## Usage Examples
//!
//! ### Reading a Reward
//! ```rust
//! use battleships_game::{RewardVerdict, TxResult};
//! use battleships_types::LedgerEvent;
//!
//! let tx = TxResult::succeeded(vec![
//!     LedgerEvent::coin_received("secret1abc", "100000uscrt"),
//!     LedgerEvent::coin_received("secret1abc", "50000uscrt"),
//! ]);
//! let verdict = RewardVerdict::from_tx(&tx, "secret1abc", "uscrt");
//! assert!(verdict.succeeded);
//! assert_eq!(verdict.reward_amount, 150_000);
//! ```
//!
//! ## Logging
//!
//! Gateway calls are logged with `tracing`. The crate never installs a
//! subscriber; the host does.

pub mod client;
pub mod config;
pub mod gateway;
pub mod outcome;
pub mod view;

pub use battleships_types::ClientError;
pub use client::{BattleshipClient, GameCreation};
pub use config::{ClientConfig, DEFAULT_CHAIN_ID, DEFAULT_ENDPOINT, DEFAULT_GAS_LIMIT};
pub use gateway::{ContractGateway, ExecuteRequest, QueryRequest};
pub use outcome::{created_game_id, interpret, RewardVerdict, TxResult, GAME_ID_KEY, WASM_EVENT};
pub use view::{GameView, ShotCell};
