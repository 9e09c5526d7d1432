//! Currency amounts in the chain's smallest unit (`uscrt`, micro-SCRT).

use crate::serde_u128_string;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Denomination of every payment the client makes or expects
pub const DENOM: &str = "uscrt";
/// Price of a single shot, in uscrt
pub const SHOT_COST: u128 = 100_000;
/// uscrt per SCRT
pub const UNITS_PER_SCRT: u128 = 1_000_000;

/// An amount of one denomination, e.g. `250000uscrt`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Coin {
    pub denom: String,
    #[serde(with = "serde_u128_string")]
    pub amount: u128,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Coin {
        Coin {
            denom: denom.into(),
            amount,
        }
    }

    pub fn uscrt(amount: u128) -> Coin {
        Coin::new(amount, DENOM)
    }

    /// Parses `<integer><denom>` as written in event attributes.
    ///
    /// Returns `None` when there is no leading integer or it does not fit a
    /// `u128`.
    pub fn parse(raw: &str) -> Option<Coin> {
        let raw = raw.trim();
        let digits = raw.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let amount = raw[..digits].parse::<u128>().ok()?;
        Some(Coin::new(amount, &raw[digits..]))
    }

    /// Parses a comma separated coin list such as `5ufoo,250000uscrt`,
    /// dropping entries that do not parse.
    pub fn parse_list(raw: &str) -> Vec<Coin> {
        raw.split(',').filter_map(Coin::parse).collect()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Formats a uscrt amount as SCRT, e.g. `2625000` -> `2.625`.
pub fn format_amount(uscrt: u128) -> String {
    let whole = uscrt / UNITS_PER_SCRT;
    let fraction = uscrt % UNITS_PER_SCRT;
    if fraction == 0 {
        return whole.to_string();
    }
    let fraction = format!("{fraction:06}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
