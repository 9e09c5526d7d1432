//! # Events Module
//!
//! Ledger events as returned by the chain for a completed transaction. The
//! client treats them as an opaque, append-only list: it reads them, it
//! never rewrites them.
//!
//! A `coin_received` event looks like this on the wire:
//!
//! ```json
//! {
//!   "type": "coin_received",
//!   "attributes": [
//!     { "key": "receiver", "value": "secret1abc..." },
//!     { "key": "amount", "value": "250000uscrt" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Type tag of the event the bank module emits for every credited account
pub const COIN_RECEIVED: &str = "coin_received";
/// Attribute holding the credited address
pub const RECEIVER_KEY: &str = "receiver";
/// Attribute holding the credited coins, e.g. `250000uscrt`
pub const AMOUNT_KEY: &str = "amount";

/// One key/value attribute of a ledger event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct EventAttribute {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl EventAttribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> EventAttribute {
        EventAttribute {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Structured record emitted by a completed transaction
///
/// # Fields
/// * `kind` - Type tag (serialised as `type`), e.g. `coin_received`
/// * `attributes` - Ordered key/value pairs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LedgerEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Vec<EventAttribute>,
}

impl LedgerEvent {
    pub fn new(kind: impl Into<String>, attributes: Vec<EventAttribute>) -> LedgerEvent {
        LedgerEvent {
            kind: kind.into(),
            attributes,
        }
    }

    /// A `coin_received` event crediting `amount` to `receiver`.
    pub fn coin_received(receiver: impl Into<String>, amount: impl Into<String>) -> LedgerEvent {
        LedgerEvent::new(
            COIN_RECEIVED,
            vec![
                EventAttribute::new(RECEIVER_KEY, receiver),
                EventAttribute::new(AMOUNT_KEY, amount),
            ],
        )
    }

    pub fn is(&self, kind: &str) -> bool {
        self.kind == kind
    }

    /// Value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_chain_shape() {
        let raw = r#"{
            "type": "coin_received",
            "attributes": [
                {"key": "receiver", "value": "secret1abc"},
                {"key": "amount", "value": "250000uscrt"},
                {"key": "msg_index"}
            ]
        }"#;
        let event: LedgerEvent = serde_json::from_str(raw).unwrap();
        assert!(event.is(COIN_RECEIVED));
        assert_eq!(event.attribute(RECEIVER_KEY), Some("secret1abc"));
        assert_eq!(event.attribute(AMOUNT_KEY), Some("250000uscrt"));
        assert_eq!(event.attribute("msg_index"), Some(""));
        assert_eq!(event.attribute("spender"), None);
    }

    #[test]
    fn events_without_attributes_decode() {
        let event: LedgerEvent = serde_json::from_str(r#"{"type": "tx"}"#).unwrap();
        assert!(event.attributes.is_empty());
    }
}
