//! State-changing calls: allowance grants, liquidity management, swaps.
//!
//! Each operation is a sequential pipeline of at most two external calls;
//! the first failure aborts whatever remains. The external ledger is atomic
//! per call, so there is nothing to roll back locally.

use tracing::{debug, error, info};
use web3::contract::Options;
use web3::types::{Address, TransactionReceipt, U256, U64};
use web3::Transport;

use crate::client::ExchangeClient;
use crate::error::ExchangeError;
use crate::types::SwapDirection;

impl<T: Transport> ExchangeClient<T> {
    /// Grants the exchange an allowance of at least `amount`, skipping the
    /// transaction when the current allowance already covers it.
    ///
    /// Returns whether an approval transaction was actually sent.
    /// Re-granting is safe: an interrupted approve-then-act sequence leaves
    /// only a reusable allowance behind.
    pub async fn ensure_allowance(
        &self,
        from: Address,
        amount: U256,
    ) -> Result<bool, ExchangeError> {
        let current: U256 = self
            .token
            .query(
                "allowance",
                (from, self.exchange_address),
                None,
                Options::default(),
                None,
            )
            .await
            .map_err(|e| {
                error!("allowance query failed: {}", e);
                ExchangeError::from(e)
            })?;

        if current >= amount {
            debug!(
                "allowance {} already covers {}, skipping approve",
                current, amount
            );
            return Ok(false);
        }

        let receipt = self
            .token
            .call_with_confirmations(
                "approve",
                (self.exchange_address, amount),
                from,
                Options::default(),
                self.config.confirmations,
            )
            .await
            .map_err(|e| {
                error!("approve transaction failed: {}", e);
                ExchangeError::from(e)
            })?;
        check_receipt(receipt)?;

        debug!("approved {} for the exchange", amount);
        Ok(true)
    }

    /// Deposits `ether_amount` wei and `token_amount` tokens into the pool.
    ///
    /// Runs the allowance leg first; its failure aborts the deposit.
    pub async fn add_liquidity(
        &self,
        from: Address,
        token_amount: U256,
        ether_amount: U256,
    ) -> Result<TransactionReceipt, ExchangeError> {
        self.ensure_allowance(from, token_amount).await?;

        let receipt = self
            .exchange
            .call_with_confirmations(
                "addLiquidity",
                (token_amount,),
                from,
                Options::with(|opt| opt.value = Some(ether_amount)),
                self.config.confirmations,
            )
            .await
            .map_err(|e| {
                error!("addLiquidity transaction failed: {}", e);
                ExchangeError::from(e)
            })?;
        let receipt = check_receipt(receipt)?;

        info!(
            "added liquidity: {} wei + {} tokens in tx {:?}",
            ether_amount, token_amount, receipt.transaction_hash
        );
        Ok(receipt)
    }

    /// Burns `lp_amount` LP tokens, withdrawing the proportional reserves.
    pub async fn remove_liquidity(
        &self,
        from: Address,
        lp_amount: U256,
    ) -> Result<TransactionReceipt, ExchangeError> {
        let receipt = self
            .exchange
            .call_with_confirmations(
                "removeLiquidity",
                (lp_amount,),
                from,
                Options::default(),
                self.config.confirmations,
            )
            .await
            .map_err(|e| {
                error!("removeLiquidity transaction failed: {}", e);
                ExchangeError::from(e)
            })?;
        let receipt = check_receipt(receipt)?;

        info!(
            "removed {} LP tokens in tx {:?}",
            lp_amount, receipt.transaction_hash
        );
        Ok(receipt)
    }

    /// Swaps `amount_in` of the input asset for at least `min_amount_out`
    /// of the other asset.
    ///
    /// Token-funded swaps run the allowance leg first; ether-funded swaps
    /// attach the input as call value and need no allowance.
    pub async fn swap(
        &self,
        from: Address,
        amount_in: U256,
        min_amount_out: U256,
        direction: SwapDirection,
    ) -> Result<TransactionReceipt, ExchangeError> {
        let receipt = match direction {
            SwapDirection::EthToToken => self
                .exchange
                .call_with_confirmations(
                    "ethToToken",
                    (min_amount_out,),
                    from,
                    Options::with(|opt| opt.value = Some(amount_in)),
                    self.config.confirmations,
                )
                .await
                .map_err(|e| {
                    error!("ethToToken transaction failed: {}", e);
                    ExchangeError::from(e)
                })?,
            SwapDirection::TokenToEth => {
                self.ensure_allowance(from, amount_in).await?;
                self.exchange
                    .call_with_confirmations(
                        "tokenToEth",
                        (amount_in, min_amount_out),
                        from,
                        Options::default(),
                        self.config.confirmations,
                    )
                    .await
                    .map_err(|e| {
                        error!("tokenToEth transaction failed: {}", e);
                        ExchangeError::from(e)
                    })?
            }
        };
        let receipt = check_receipt(receipt)?;

        info!(
            "swapped {} in ({:?}) in tx {:?}",
            amount_in, direction, receipt.transaction_hash
        );
        Ok(receipt)
    }
}

/// Rejects receipts the contract reverted; post-Byzantium nodes always
/// populate `status`.
pub(crate) fn check_receipt(
    receipt: TransactionReceipt,
) -> Result<TransactionReceipt, ExchangeError> {
    match receipt.status {
        Some(status) if status == U64::from(1u64) => Ok(receipt),
        _ => {
            error!("transaction {:?} reverted", receipt.transaction_hash);
            Err(ExchangeError::Reverted(receipt.transaction_hash))
        }
    }
}
