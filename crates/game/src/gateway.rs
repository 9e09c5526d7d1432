//! # Gateway Module
//!
//! The seam between the client and the chain. A [`ContractGateway`] signs,
//! broadcasts and queries; it owns the wallet, the encryption of contract
//! messages and the network. Nothing here talks to a node directly.
//!
//! A gateway reports a transaction rejected by the chain as a [`TxResult`]
//! with a non-zero code. `Err` is reserved for calls that never completed
//! (unreachable node, undecodable answer).

use crate::outcome::TxResult;
use battleships_types::{ClientError, Coin, ExecuteMsg, QueryMsg};
use serde::Serialize;

/// A signed call of the contract
///
/// # Fields
/// * `sender` - Address paying for the transaction
/// * `contract_address` - Address of the contract
/// * `code_hash` - Code hash the message is encrypted for
/// * `msg` - The execute message
/// * `sent_funds` - Coins attached to the call
/// * `gas_limit` - Gas limit of the transaction
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExecuteRequest {
    pub sender: String,
    pub contract_address: String,
    pub code_hash: String,
    pub msg: ExecuteMsg,
    pub sent_funds: Vec<Coin>,
    pub gas_limit: u64,
}

/// A read-only query of the contract
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryRequest {
    pub contract_address: String,
    pub code_hash: String,
    pub query: QueryMsg,
}

/// Transport to a deployed battleship contract
#[allow(async_fn_in_trait)]
pub trait ContractGateway {
    /// Address of the wallet the gateway signs with.
    fn sender(&self) -> &str;

    async fn execute(&self, request: ExecuteRequest) -> Result<TxResult, ClientError>;

    /// Raw JSON answer of the contract.
    async fn query(&self, request: QueryRequest) -> Result<serde_json::Value, ClientError>;

    /// Balance of `address` in `denom`, `None` when the chain reports none.
    async fn balance(&self, address: &str, denom: &str) -> Result<Option<u128>, ClientError>;
}
