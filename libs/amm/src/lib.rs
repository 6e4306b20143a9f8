//! # AMM quote mathematics
//!
//! Pure, synchronous helpers mirroring the exchange contract's constant
//! product arithmetic. Every function works on wei-denominated `U256`
//! amounts with 512-bit intermediates and floor division, so a preview
//! computed off-chain always matches what the contract settles on-chain.
//!
//! Nothing in this crate performs I/O or holds state; reserve snapshots are
//! passed in by the caller and discarded after the call.

pub mod cpmm;
pub mod error;

pub use cpmm::{
    price_impact_pct, proportional_token_deposit, swap_output, withdrawal_amounts,
    BPS_DENOMINATOR,
};
pub use error::AmmError;

/// Re-export of the wei amount type used across the quote API.
pub use ethereum_types::U256;
