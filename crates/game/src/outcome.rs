//! # Outcome Module
//!
//! Turns the raw result of a transaction into a verdict the UI can show. The
//! contract answers a shot or a collection with nothing more than the
//! ledger events of the transaction, so the reward has to be read back from
//! the `coin_received` events crediting the player.
//!
//! ## Interpretation Rules
//!
//! - Only `coin_received` events are considered
//! - Inside an event, each `amount` is paired with the latest `receiver` before
//!   it, or with the first receiver when the event lists the amount first
//! - An amount counts when its receiver is the player and its denomination
//!   is exactly the requested one; a comma separated list counts coin by coin
//! - Every qualifying amount is added; malformed amounts add nothing
//!
//! Addition is commutative, so the verdict does not depend on event order.
//!
//! A positive reward only says that the player was paid. Whether the payment
//! was for a hit, a sunk ship or the final collection is not visible in the
//! events, so no such label is derived here.

use battleships_types::{
    serde_u128_string, Coin, LedgerEvent, AMOUNT_KEY, COIN_RECEIVED, RECEIVER_KEY,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Type tag of the events emitted by contract code
pub const WASM_EVENT: &str = "wasm";
/// Attribute the contract sets on `wasm` events when a game is created
pub const GAME_ID_KEY: &str = "game_id";

/// Result of a submitted transaction as reported by the transport
///
/// # Fields
/// * `code` - 0 on success, anything else is a failed transaction
/// * `raw_log` - Free-form log of the chain, usually the failure reason
/// * `events` - Ledger events in the order the chain emitted them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TxResult {
    pub code: u32,
    #[serde(default)]
    pub raw_log: String,
    #[serde(default)]
    pub events: Vec<LedgerEvent>,
}

impl TxResult {
    pub fn succeeded(events: Vec<LedgerEvent>) -> TxResult {
        TxResult {
            code: 0,
            raw_log: String::new(),
            events,
        }
    }

    pub fn failed(code: u32, raw_log: impl Into<String>) -> TxResult {
        TxResult {
            code,
            raw_log: raw_log.into(),
            events: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// What a shot or a collection brought the player
///
/// `succeeded` comes from the transaction status alone. A successful
/// transaction with a zero reward is a legitimate miss, not a failure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RewardVerdict {
    #[serde(with = "serde_u128_string")]
    pub reward_amount: u128,
    pub succeeded: bool,
}

impl RewardVerdict {
    pub fn failed() -> RewardVerdict {
        RewardVerdict {
            reward_amount: 0,
            succeeded: false,
        }
    }

    /// Verdict for `recipient` from a transaction result. Events of a failed
    /// transaction are not read.
    pub fn from_tx(tx: &TxResult, recipient: &str, denom: &str) -> RewardVerdict {
        if !tx.is_success() {
            return RewardVerdict::failed();
        }
        RewardVerdict {
            reward_amount: interpret(&tx.events, recipient, denom),
            succeeded: true,
        }
    }

    pub fn paid_out(&self) -> bool {
        self.succeeded && self.reward_amount > 0
    }
}

/// Total amount of `denom` credited to `recipient` by `events`.
///
/// # Example
/// ```rust
/// use battleships_game::interpret;
/// use battleships_types::LedgerEvent;
///
/// let events = vec![
///     LedgerEvent::coin_received("secret1abc", "250000uscrt"),
///     LedgerEvent::coin_received("secret1xyz", "999999uscrt"),
/// ];
/// assert_eq!(interpret(&events, "secret1abc", "uscrt"), 250_000);
/// ```
pub fn interpret(events: &[LedgerEvent], recipient: &str, denom: &str) -> u128 {
    events
        .iter()
        .filter(|event| event.is(COIN_RECEIVED))
        .map(|event| credited_in_event(event, recipient, denom))
        .fold(0u128, u128::saturating_add)
}

fn credited_in_event(event: &LedgerEvent, recipient: &str, denom: &str) -> u128 {
    let mut receiver: Option<&str> = None;
    // amounts listed before any receiver wait for the first one
    let mut unpaired: Vec<&str> = Vec::new();
    let mut total = 0u128;
    for attr in &event.attributes {
        if attr.value.is_empty() {
            continue;
        }
        match attr.key.as_str() {
            RECEIVER_KEY => {
                if receiver.is_none() && attr.value == recipient {
                    for raw in unpaired.drain(..) {
                        total = total.saturating_add(amount_of(raw, denom));
                    }
                }
                unpaired.clear();
                receiver = Some(attr.value.as_str());
            }
            AMOUNT_KEY => match receiver {
                Some(current) if current == recipient => {
                    total = total.saturating_add(amount_of(&attr.value, denom));
                }
                Some(_) => {}
                None => unpaired.push(attr.value.as_str()),
            },
            _ => {}
        }
    }
    total
}

fn amount_of(raw: &str, denom: &str) -> u128 {
    let coins = Coin::parse_list(raw);
    if coins.is_empty() {
        trace!(amount = raw, "skipping malformed amount");
    }
    coins
        .into_iter()
        .filter(|coin| coin.denom == denom)
        .fold(0u128, |acc, coin| acc.saturating_add(coin.amount))
}

/// Id of a newly created game, read from the contract's `wasm` event.
pub fn created_game_id(events: &[LedgerEvent]) -> Option<u128> {
    events
        .iter()
        .filter(|event| event.is(WASM_EVENT))
        .find_map(|event| event.attribute(GAME_ID_KEY))
        .and_then(|raw| raw.trim().parse().ok())
}
