//! Read-only queries against the exchange and token contracts.
//!
//! Every query returns the current external value or `None` after logging
//! the failure; a missing value is never reported as a true zero. No
//! retries, no caching: each call reflects chain state at call time.

use tracing::warn;
use web3::contract::Options;
use web3::types::{Address, U256};
use web3::Transport;

use crate::client::ExchangeClient;
use crate::types::{Reserves, SwapDirection};

impl<T: Transport> ExchangeClient<T> {
    /// Ether balance of an account, in wei.
    pub async fn ether_balance(&self, owner: Address) -> Option<U256> {
        match self.web3.eth().balance(owner, None).await {
            Ok(balance) => Some(balance),
            Err(e) => {
                warn!("ether balance query failed for {:?}: {}", owner, e);
                None
            }
        }
    }

    /// Ether side of the pool: the exchange contract's own balance.
    pub async fn ether_reserve(&self) -> Option<U256> {
        self.ether_balance(self.exchange_address).await
    }

    /// Token balance of `owner` at the ERC-20 contract.
    pub async fn token_balance(&self, owner: Address) -> Option<U256> {
        match self
            .token
            .query("balanceOf", (owner,), None, Options::default(), None)
            .await
        {
            Ok(balance) => Some(balance),
            Err(e) => {
                warn!("token balance query failed for {:?}: {}", owner, e);
                None
            }
        }
    }

    /// LP token balance of `owner` at the exchange contract.
    pub async fn lp_token_balance(&self, owner: Address) -> Option<U256> {
        match self
            .exchange
            .query("balanceOf", (owner,), None, Options::default(), None)
            .await
        {
            Ok(balance) => Some(balance),
            Err(e) => {
                warn!("LP balance query failed for {:?}: {}", owner, e);
                None
            }
        }
    }

    /// Token side of the pool, as tracked by the exchange.
    pub async fn token_reserve(&self) -> Option<U256> {
        match self
            .exchange
            .query("getReserve", (), None, Options::default(), None)
            .await
        {
            Ok(reserve) => Some(reserve),
            Err(e) => {
                warn!("token reserve query failed: {}", e);
                None
            }
        }
    }

    /// Total LP token supply.
    pub async fn lp_total_supply(&self) -> Option<U256> {
        match self
            .exchange
            .query("totalSupply", (), None, Options::default(), None)
            .await
        {
            Ok(supply) => Some(supply),
            Err(e) => {
                warn!("LP supply query failed: {}", e);
                None
            }
        }
    }

    /// Reserve snapshot, or `None` when either leg fails.
    pub async fn reserves(&self) -> Option<Reserves> {
        let ether = self.ether_reserve().await?;
        let token = self.token_reserve().await?;
        Some(Reserves { ether, token })
    }

    /// Token amount the pool expects alongside `ether_to_add`, previewed
    /// against a reserve snapshot.
    pub fn preview_token_deposit(&self, ether_to_add: U256, reserves: &Reserves) -> Option<U256> {
        match amm::proportional_token_deposit(ether_to_add, reserves.ether, reserves.token) {
            Ok(amount) => Some(amount),
            Err(e) => {
                warn!("deposit preview failed: {}", e);
                None
            }
        }
    }

    /// Ether and tokens returned for burning `lp_tokens`, based on the live
    /// LP supply and a reserve snapshot.
    pub async fn preview_withdrawal(
        &self,
        lp_tokens: U256,
        reserves: &Reserves,
    ) -> Option<(U256, U256)> {
        let supply = self.lp_total_supply().await?;
        match amm::withdrawal_amounts(lp_tokens, supply, reserves.ether, reserves.token) {
            Ok(amounts) => Some(amounts),
            Err(e) => {
                warn!("withdrawal preview failed: {}", e);
                None
            }
        }
    }

    /// Swap output as priced by the contract itself.
    ///
    /// Fetches the current reserves, orders them for `direction`, and asks
    /// the exchange's own pricing function, so the preview and the eventual
    /// trade share one formula.
    pub async fn quote_swap_output(
        &self,
        amount_in: U256,
        direction: SwapDirection,
    ) -> Option<U256> {
        let reserves = self.reserves().await?;
        let (reserve_in, reserve_out) = reserves.ordered_for(direction);
        match self
            .exchange
            .query(
                "getAmountOfTokens",
                (amount_in, reserve_in, reserve_out),
                None,
                Options::default(),
                None,
            )
            .await
        {
            Ok(amount) => Some(amount),
            Err(e) => {
                warn!("swap quote failed: {}", e);
                None
            }
        }
    }

    /// Offline swap preview from an already-fetched snapshot.
    ///
    /// Mirrors the contract's pricing with the configured fee; good for
    /// per-keystroke UI feedback without an RPC round-trip.
    pub fn preview_swap_output(
        &self,
        amount_in: U256,
        reserves: &Reserves,
        direction: SwapDirection,
    ) -> Option<U256> {
        let (reserve_in, reserve_out) = reserves.ordered_for(direction);
        match amm::swap_output(amount_in, reserve_in, reserve_out, self.config.fee_bps) {
            Ok(amount) => Some(amount),
            Err(e) => {
                warn!("swap preview failed: {}", e);
                None
            }
        }
    }
}
