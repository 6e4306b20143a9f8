//! Transient value types shared by the reader and invoker.

use web3::types::U256;

/// Which asset funds a swap.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SwapDirection {
    /// Ether in, token out
    EthToToken,
    /// Token in, ether out
    TokenToEth,
}

/// Snapshot of the pool's holdings at the moment of query.
///
/// Owned by the exchange contract, not by this client; values are stale the
/// moment they arrive and are only good for previews.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Reserves {
    /// Ether held by the exchange contract, in wei
    pub ether: U256,
    /// Tokens held by the exchange contract, in the token's smallest unit
    pub token: U256,
}

impl Reserves {
    /// Orders the pair as (input, output) for the given swap direction.
    pub fn ordered_for(&self, direction: SwapDirection) -> (U256, U256) {
        match direction {
            SwapDirection::EthToToken => (self.ether, self.token),
            SwapDirection::TokenToEth => (self.token, self.ether),
        }
    }
}
