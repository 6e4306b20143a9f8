//! Error taxonomy for exchange calls.
//!
//! Three failure classes reach callers: transport failures talking to the
//! node, rejections by the external system itself (reverts and refused
//! calls), and local precondition violations caught before anything is
//! sent. All are logged at the call site and surfaced as a failure signal;
//! none triggers an automatic retry.

use thiserror::Error;
use web3::types::H256;

/// Failure signal returned by the exchange client.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// The node could not be reached or answered out of protocol.
    #[error("transport failure: {0}")]
    Transport(#[from] web3::Error),

    /// A contract call was refused or could not be encoded/decoded.
    #[error("contract call failed: {0}")]
    Contract(#[from] web3::contract::Error),

    /// The transaction was mined but reverted by the contract.
    #[error("transaction {0:?} was reverted by the exchange")]
    Reverted(H256),

    /// A quote precondition failed before any call was issued.
    #[error("quote failed: {0}")]
    Quote(#[from] amm::AmmError),

    /// Configuration could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}
