//! Decimal-string conversions for wei amounts.
//!
//! UI code works in whole-asset strings ("1.5"); the chain works in integer
//! smallest units. Conversions are pure string/integer arithmetic so no
//! precision is lost on the way in or out.

use thiserror::Error;
use web3::types::U256;

/// Decimals of the native currency.
pub const ETHER_DECIMALS: u32 = 18;

/// Failures converting between decimal strings and smallest units.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("'{0}' is not a decimal number")]
    InvalidNumber(String),
    #[error("'{0}' has more fractional digits than the asset's {1} decimals")]
    PrecisionLoss(String, u32),
    #[error("amount does not fit in 256 bits")]
    Overflow,
}

/// Parses a decimal string into the asset's smallest unit.
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, UnitsError> {
    let trimmed = amount.trim();
    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(UnitsError::InvalidNumber(amount.to_string()));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(UnitsError::InvalidNumber(amount.to_string()));
    }
    if frac_part.len() as u32 > decimals {
        return Err(UnitsError::PrecisionLoss(amount.to_string(), decimals));
    }

    let scale = pow10(decimals)?;
    let frac_scale = pow10(decimals - frac_part.len() as u32)?;
    let int_value = parse_digits(int_part)?;
    let frac_value = parse_digits(frac_part)?
        .checked_mul(frac_scale)
        .ok_or(UnitsError::Overflow)?;

    int_value
        .checked_mul(scale)
        .and_then(|value| value.checked_add(frac_value))
        .ok_or(UnitsError::Overflow)
}

/// Parses an ether string into wei.
pub fn parse_ether(amount: &str) -> Result<U256, UnitsError> {
    parse_units(amount, ETHER_DECIMALS)
}

/// Formats a smallest-unit amount as a decimal string, trimming trailing
/// fractional zeros.
pub fn format_units(amount: U256, decimals: u32) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let scale = U256::exp10(decimals as usize);
    let whole = amount / scale;
    let frac = amount % scale;

    if frac.is_zero() {
        whole.to_string()
    } else {
        let digits = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
        format!("{}.{}", whole, digits.trim_end_matches('0'))
    }
}

fn parse_digits(digits: &str) -> Result<U256, UnitsError> {
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    U256::from_dec_str(digits).map_err(|_| UnitsError::Overflow)
}

fn pow10(exp: u32) -> Result<U256, UnitsError> {
    U256::from(10u64)
        .checked_pow(U256::from(exp))
        .ok_or(UnitsError::Overflow)
}
