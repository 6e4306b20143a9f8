//! Constant product pool math with exact integer arithmetic.
//!
//! Mirrors the exchange contract's wei-denominated calculations bit for bit:
//! every multiply-then-divide runs through 512-bit intermediates and floor
//! division, matching on-chain rounding.

use ethereum_types::{U256, U512};
use rust_decimal::Decimal;

use crate::error::AmmError;

/// Fee denominator used by the exchange contract (basis points).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Token amount preserving the pool ratio for an ether deposit.
///
/// Computes `floor(ether_to_add * token_reserve / ether_reserve)`, the token
/// leg that keeps the reserve ratio constant when `ether_to_add` wei joins
/// the pool.
///
/// Fails with [`AmmError::EmptyPool`] while the pool holds no ether; the
/// first liquidity provider picks both amounts freely instead of computing
/// one from the other.
pub fn proportional_token_deposit(
    ether_to_add: U256,
    ether_reserve: U256,
    token_reserve: U256,
) -> Result<U256, AmmError> {
    if ether_reserve.is_zero() {
        return Err(AmmError::EmptyPool);
    }

    let numerator = ether_to_add.full_mul(token_reserve);
    floor_to_u256(numerator / U512::from(ether_reserve))
}

/// Ether and token paid out for burning `lp_tokens` of the LP supply.
///
/// Both legs are `floor(reserve * lp_tokens / total_supply)`, the burner's
/// proportional claim on each reserve.
pub fn withdrawal_amounts(
    lp_tokens: U256,
    total_supply: U256,
    ether_reserve: U256,
    token_reserve: U256,
) -> Result<(U256, U256), AmmError> {
    if total_supply.is_zero() {
        return Err(AmmError::EmptySupply);
    }

    let supply = U512::from(total_supply);
    let ether_out = floor_to_u256(ether_reserve.full_mul(lp_tokens) / supply)?;
    let token_out = floor_to_u256(token_reserve.full_mul(lp_tokens) / supply)?;

    Ok((ether_out, token_out))
}

/// Output amount for a constant product swap, after the pool fee.
///
/// Integer form of the `x * y = k` pricing the contract enforces:
/// `in_with_fee = amount_in * (10000 - fee_bps)` and
/// `out = floor(in_with_fee * reserve_out / (reserve_in * 10000 + in_with_fee))`.
pub fn swap_output(
    amount_in: U256,
    reserve_in: U256,
    reserve_out: U256,
    fee_bps: u32,
) -> Result<U256, AmmError> {
    if fee_bps > BPS_DENOMINATOR {
        return Err(AmmError::FeeOutOfRange(fee_bps));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::EmptyPool);
    }

    let in_with_fee = amount_in.full_mul(U256::from(BPS_DENOMINATOR - fee_bps));
    let numerator = in_with_fee
        .checked_mul(U512::from(reserve_out))
        .ok_or(AmmError::AmountOverflow)?;
    let denominator = U512::from(reserve_in) * U512::from(BPS_DENOMINATOR) + in_with_fee;

    floor_to_u256(numerator / denominator)
}

/// Price impact of a swap as a display percentage.
///
/// Compares the realized rate against the spot rate `reserve_out /
/// reserve_in`, ignoring the fee so the figure isolates depth impact.
/// Resolution is one basis point; the result is for UI display only and
/// never feeds an on-chain amount.
pub fn price_impact_pct(
    amount_in: U256,
    reserve_in: U256,
    reserve_out: U256,
) -> Result<Decimal, AmmError> {
    if amount_in.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let out = swap_output(amount_in, reserve_in, reserve_out, 0)?;
    let realized = out.full_mul(reserve_in);
    let spot = amount_in.full_mul(reserve_out);

    let retained_bps = realized
        .checked_mul(U512::from(BPS_DENOMINATOR))
        .ok_or(AmmError::AmountOverflow)?
        / spot;
    let impact_bps = u64::from(BPS_DENOMINATOR) - retained_bps.as_u64();

    Ok(Decimal::from(impact_bps) / Decimal::from(100u32))
}

fn floor_to_u256(value: U512) -> Result<U256, AmmError> {
    U256::try_from(value).map_err(|_| AmmError::AmountOverflow)
}
