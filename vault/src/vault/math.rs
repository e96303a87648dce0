use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::errors::VaultError;

/// Shares minted for `assets` at the current exchange rate, rounded down
///
/// The first deposit into an empty share supply mints at parity. With shares
/// outstanding and no assets backing them the rate is undefined and the
/// conversion fails closed. The product is taken in 256 bits, so only a
/// result that does not fit in i128 panics.
///
/// ### Arguments
/// * `assets` - Amount of underlying being deposited
/// * `total_shares` - Share supply before the deposit
/// * `total_assets` - Total assets before the deposit transfer
pub fn to_shares(
    e: &Env,
    assets: i128,
    total_shares: i128,
    total_assets: i128,
) -> Result<i128, VaultError> {
    if total_shares == 0 {
        return Ok(assets);
    }
    if total_assets <= 0 {
        return Err(VaultError::ArithmeticOverflow);
    }
    Ok(assets.fixed_mul_floor(e, &total_shares, &total_assets))
}

/// Assets redeemable for `shares` at the current exchange rate, rounded down
///
/// ### Arguments
/// * `shares` - Amount of shares being redeemed
/// * `total_shares` - Share supply before the burn
/// * `total_assets` - Total assets before the withdrawal transfer
pub fn to_assets(
    e: &Env,
    shares: i128,
    total_shares: i128,
    total_assets: i128,
) -> Result<i128, VaultError> {
    if total_shares == 0 || total_assets <= 0 {
        return Ok(0);
    }
    Ok(shares.fixed_mul_floor(e, &total_assets, &total_shares))
}

/// Overflow-checked addition of two ledger amounts
pub fn add(a: i128, b: i128) -> Result<i128, VaultError> {
    a.checked_add(b).ok_or(VaultError::ArithmeticOverflow)
}

/// Overflow-checked subtraction of two ledger amounts
pub fn sub(a: i128, b: i128) -> Result<i128, VaultError> {
    a.checked_sub(b).ok_or(VaultError::ArithmeticOverflow)
}
