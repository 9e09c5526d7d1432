#![allow(dead_code)]

use battleships_game::{ClientConfig, ContractGateway, ExecuteRequest, QueryRequest, TxResult};
use battleships_types::ClientError;
use std::cell::RefCell;
use std::collections::VecDeque;
use tracing_subscriber::filter::EnvFilter;

pub const PLAYER: &str = "secret1player";
pub const OWNER: &str = "secret1owner";
pub const CONTRACT: &str = "secret1contract";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn config() -> ClientConfig {
    ClientConfig::new(CONTRACT, "c0ffee", "test mnemonic")
}

/// In-memory gateway answering from scripted responses and recording every
/// request it receives.
#[derive(Default)]
pub struct ScriptedGateway {
    pub sender: String,
    pub executed: RefCell<Vec<ExecuteRequest>>,
    pub queried: RefCell<Vec<QueryRequest>>,
    pub tx_results: RefCell<VecDeque<Result<TxResult, ClientError>>>,
    pub answers: RefCell<VecDeque<Result<serde_json::Value, ClientError>>>,
    pub balance: Option<u128>,
}

impl ScriptedGateway {
    pub fn new(sender: &str) -> ScriptedGateway {
        ScriptedGateway {
            sender: sender.to_string(),
            ..ScriptedGateway::default()
        }
    }

    pub fn with_tx(self, result: Result<TxResult, ClientError>) -> ScriptedGateway {
        self.tx_results.borrow_mut().push_back(result);
        self
    }

    pub fn with_answer(self, answer: serde_json::Value) -> ScriptedGateway {
        self.answers.borrow_mut().push_back(Ok(answer));
        self
    }
}

impl ContractGateway for ScriptedGateway {
    fn sender(&self) -> &str {
        &self.sender
    }

    async fn execute(&self, request: ExecuteRequest) -> Result<TxResult, ClientError> {
        self.executed.borrow_mut().push(request);
        self.tx_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Gateway("no scripted transaction".to_string())))
    }

    async fn query(&self, request: QueryRequest) -> Result<serde_json::Value, ClientError> {
        self.queried.borrow_mut().push(request);
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Gateway("no scripted answer".to_string())))
    }

    async fn balance(&self, address: &str, _denom: &str) -> Result<Option<u128>, ClientError> {
        assert_eq!(address, self.sender);
        Ok(self.balance)
    }
}
