//! # Client Module
//!
//! [`BattleshipClient`] builds the contract messages of the browser client
//! and reads their outcome. Signing and broadcasting go through a
//! [`ContractGateway`]; what comes back is turned into a [`RewardVerdict`]
//! or a decoded query answer.
//!
//! ## Payments
//!
//! - `create_game` carries the creation cost of the chosen profile
//! - `take_shot` carries the configured shot cost
//! - `collect_winnings` carries nothing
//!
//! Callers must not issue the same action twice while its request is
//! outstanding; the client keeps no in-flight state.

use crate::config::ClientConfig;
use crate::gateway::{ContractGateway, ExecuteRequest, QueryRequest};
use crate::outcome::{created_game_id, RewardVerdict};
use crate::view::GameView;
use battleships_lobby::GameSubmission;
use battleships_types::{
    AllGamesAnswer, ClientError, Coin, ExecuteMsg, GameQueryAnswer, GameResponse, Position,
    QueryMsg,
};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Result of a create-game transaction
///
/// # Fields
/// * `succeeded` - The chain accepted the transaction
/// * `game_id` - Id of the new game when the contract reported it
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GameCreation {
    pub succeeded: bool,
    pub game_id: Option<u128>,
}

pub struct BattleshipClient<G> {
    gateway: G,
    config: ClientConfig,
}

impl<G: ContractGateway> BattleshipClient<G> {
    pub fn new(gateway: G, config: ClientConfig) -> BattleshipClient<G> {
        BattleshipClient { gateway, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Address of the wallet behind this client.
    pub fn address(&self) -> &str {
        self.gateway.sender()
    }

    pub fn is_client_address(&self, address: &str) -> bool {
        address == self.address()
    }

    // ========================================================================
    // TRANSACTIONS
    // ========================================================================

    /// Creates the game described by a complete placement session, paying
    /// its creation cost.
    pub async fn make_game(
        &self,
        submission: &GameSubmission,
    ) -> Result<GameCreation, ClientError> {
        let msg = submission.to_execute_msg();
        let funds = vec![Coin::new(submission.cost.amount, self.config.denom.as_str())];
        info!(
            size = %submission.size,
            game_name = %submission.name,
            cost = %submission.cost.amount,
            "creating game"
        );

        let tx = self.gateway.execute(self.request(msg, funds)).await?;
        if !tx.is_success() {
            warn!(code = tx.code, log = %tx.raw_log, "create game transaction failed");
            return Ok(GameCreation {
                succeeded: false,
                game_id: None,
            });
        }
        Ok(GameCreation {
            succeeded: true,
            game_id: created_game_id(&tx.events),
        })
    }

    /// Fires at `target` without any client-side pre-check.
    pub async fn take_shot(
        &self,
        game_id: u128,
        target: Position,
    ) -> Result<RewardVerdict, ClientError> {
        let msg = ExecuteMsg::TakeShot {
            game_id,
            x: target.x,
            y: target.y,
        };
        let funds = vec![Coin::new(self.config.shot_cost, self.config.denom.as_str())];
        info!(game_id = %game_id, x = target.x, y = target.y, "taking shot");

        let tx = self.gateway.execute(self.request(msg, funds)).await?;
        if !tx.is_success() {
            warn!(code = tx.code, log = %tx.raw_log, "shot transaction failed");
        }
        let verdict = RewardVerdict::from_tx(&tx, self.address(), &self.config.denom);
        debug!(reward = %verdict.reward_amount, succeeded = verdict.succeeded, "shot resolved");
        Ok(verdict)
    }

    /// Checks the shot against `game` first, then fires.
    pub async fn fire(
        &self,
        game: &GameView,
        target: Position,
    ) -> Result<RewardVerdict, ClientError> {
        game.check_shot(target, self.address())?;
        self.take_shot(game.id(), target).await
    }

    pub async fn collect_winnings(&self, game_id: u128) -> Result<RewardVerdict, ClientError> {
        info!(game_id = %game_id, "collecting winnings");
        let tx = self
            .gateway
            .execute(self.request(ExecuteMsg::CollectWinnings { game_id }, Vec::new()))
            .await?;
        if !tx.is_success() {
            warn!(code = tx.code, log = %tx.raw_log, "collect winnings transaction failed");
        }
        Ok(RewardVerdict::from_tx(&tx, self.address(), &self.config.denom))
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub async fn query_game(&self, game_id: u128) -> Result<GameResponse, ClientError> {
        let answer = self.gateway.query(self.query(QueryMsg::Game { game_id })).await?;
        if answer.is_null() {
            return Err(ClientError::NotFound(format!("game {game_id}")));
        }
        let answer: GameQueryAnswer = serde_json::from_value(answer)?;
        Ok(answer.game)
    }

    pub async fn query_all_game_ids(&self) -> Result<Vec<u128>, ClientError> {
        let answer = self.gateway.query(self.query(QueryMsg::AllGames {})).await?;
        let answer: AllGamesAnswer = serde_json::from_value(answer)?;
        Ok(answer.all_games.ids)
    }

    /// Every listed game, in the order the contract lists them.
    pub async fn get_all_games(&self) -> Result<Vec<GameResponse>, ClientError> {
        let ids = self.query_all_game_ids().await?;
        let mut games = Vec::with_capacity(ids.len());
        for id in ids {
            games.push(self.query_game(id).await?);
        }
        Ok(games)
    }

    /// Balance of the client wallet in the configured denomination.
    pub async fn get_balance(&self) -> Result<Option<u128>, ClientError> {
        self.gateway.balance(self.address(), &self.config.denom).await
    }

    fn request(&self, msg: ExecuteMsg, sent_funds: Vec<Coin>) -> ExecuteRequest {
        ExecuteRequest {
            sender: self.address().to_string(),
            contract_address: self.config.contract_address.clone(),
            code_hash: self.config.code_hash.clone(),
            msg,
            sent_funds,
            gas_limit: self.config.gas_limit,
        }
    }

    fn query(&self, query: QueryMsg) -> QueryRequest {
        QueryRequest {
            contract_address: self.config.contract_address.clone(),
            code_hash: self.config.code_hash.clone(),
            query,
        }
    }
}
