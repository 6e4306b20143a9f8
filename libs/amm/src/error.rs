//! Quote math failure taxonomy.

use thiserror::Error;

/// Errors surfaced by the pool quote calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A reserve needed as a divisor is zero: the pool has not been seeded.
    #[error("pool has no liquidity yet")]
    EmptyPool,
    /// The LP token supply is zero, so no proportional claim exists.
    #[error("LP token supply is zero")]
    EmptySupply,
    /// Fee exceeds the 10000 basis-point denominator.
    #[error("fee of {0} basis points exceeds the 10000 denominator")]
    FeeOutOfRange(u32),
    /// A quote does not fit in 256 bits.
    #[error("calculated amount overflows 256 bits")]
    AmountOverflow,
}
