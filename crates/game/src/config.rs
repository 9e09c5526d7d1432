//! Client configuration, read once by whatever builds the gateway.

use battleships_types::{ClientError, DENOM, SHOT_COST};
use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:1317";
pub const DEFAULT_CHAIN_ID: &str = "secretdev-1";
pub const DEFAULT_GAS_LIMIT: u64 = 100_000;

/// Connection and pricing settings of a [`BattleshipClient`](crate::BattleshipClient)
///
/// # Fields
/// * `chain_id` - Chain the wallet signs for
/// * `endpoint` - REST endpoint of the node
/// * `contract_address` - Address of the battleship contract
/// * `code_hash` - Code hash the encrypted messages are bound to
/// * `mnemonic` - Wallet secret, never printed
/// * `denom` - Denomination of every payment
/// * `gas_limit` - Gas limit of every execute request
/// * `shot_cost` - Funds attached to a shot
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub chain_id: String,
    pub endpoint: String,
    pub contract_address: String,
    pub code_hash: String,
    pub mnemonic: String,
    pub denom: String,
    pub gas_limit: u64,
    pub shot_cost: u128,
}

impl ClientConfig {
    pub fn new(
        contract_address: impl Into<String>,
        code_hash: impl Into<String>,
        mnemonic: impl Into<String>,
    ) -> ClientConfig {
        ClientConfig {
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            contract_address: contract_address.into(),
            code_hash: code_hash.into(),
            mnemonic: mnemonic.into(),
            denom: DENOM.to_string(),
            gas_limit: DEFAULT_GAS_LIMIT,
            shot_cost: SHOT_COST,
        }
    }

    /// Reads `MNEMONIC`, `CONTRACT_ADDRESS` and `CODE_HASH`, plus the
    /// optional `SECRET_REST_URL`, `CHAIN_ID` and `GAS_LIMIT`.
    pub fn from_env() -> Result<ClientConfig, ClientError> {
        ClientConfig::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<ClientConfig, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            var(key).ok_or_else(|| ClientError::Config(format!("{key} is not set")))
        };

        let mut config = ClientConfig::new(
            required("CONTRACT_ADDRESS")?,
            required("CODE_HASH")?,
            required("MNEMONIC")?,
        );
        if let Some(endpoint) = var("SECRET_REST_URL") {
            config.endpoint = endpoint;
        }
        if let Some(chain_id) = var("CHAIN_ID") {
            config.chain_id = chain_id;
        }
        if let Some(raw) = var("GAS_LIMIT") {
            config.gas_limit = raw
                .trim()
                .parse()
                .map_err(|_| ClientError::Config(format!("GAS_LIMIT is not a number: {raw}")))?;
        }
        Ok(config)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("chain_id", &self.chain_id)
            .field("endpoint", &self.endpoint)
            .field("contract_address", &self.contract_address)
            .field("code_hash", &self.code_hash)
            .field("mnemonic", &"<redacted>")
            .field("denom", &self.denom)
            .field("gas_limit", &self.gas_limit)
            .field("shot_cost", &self.shot_cost)
            .finish()
    }
}
