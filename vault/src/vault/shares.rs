use soroban_sdk::{panic_with_error, token::TokenClient, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::{ledger, math};

/// Pull `assets` from `user` and mint shares at the pre-transfer rate
///
/// ### Panics
/// - `InvalidArgument` if `assets` is not positive
/// - `ZeroShares` if the deposit is too small to mint a share
/// - `ArithmeticOverflow` if the conversion overflows or shares have no backing
pub fn execute_deposit(e: &Env, user: &Address, assets: i128) -> i128 {
    if assets <= 0 {
        panic_with_error!(e, VaultError::InvalidArgument);
    }

    let total_shares = storage::get_total_shares(e);
    let shares = math::to_shares(e, assets, total_shares, ledger::total_assets(e))
        .unwrap_or_else(|err| panic_with_error!(e, err));
    if shares == 0 {
        panic_with_error!(e, VaultError::ZeroShares);
    }
    let new_total = math::add(total_shares, shares).unwrap_or_else(|err| panic_with_error!(e, err));
    let new_balance = math::add(storage::get_shares(e, user), shares)
        .unwrap_or_else(|err| panic_with_error!(e, err));

    TokenClient::new(e, &storage::get_asset(e)).transfer(user, &e.current_contract_address(), &assets);

    storage::set_shares(e, user, &new_balance);
    storage::set_total_shares(e, &new_total);

    VaultEvents::deposit(e, user.clone(), assets, shares);
    shares
}

/// Burn `shares` from `user` and pay out their value from pool-held funds
///
/// Allocated funds are never recalled here; a shortfall fails the withdrawal.
/// Once every asset has been written off the shares are worthless and are
/// burned for nothing, which lets the supply drain back to zero.
///
/// ### Panics
/// - `InvalidArgument` if `shares` is not positive or redeems for nothing
///   while the vault still holds value
/// - `InsufficientShares` if `user` holds fewer than `shares`
/// - `InsufficientLiquidity` if pool-held funds cannot cover the payout
pub fn execute_withdraw(e: &Env, user: &Address, shares: i128) -> i128 {
    if shares <= 0 {
        panic_with_error!(e, VaultError::InvalidArgument);
    }
    let balance = storage::get_shares(e, user);
    if balance < shares {
        panic_with_error!(e, VaultError::InsufficientShares);
    }

    let total_shares = storage::get_total_shares(e);
    let total_assets = ledger::total_assets(e);
    let assets = math::to_assets(e, shares, total_shares, total_assets)
        .unwrap_or_else(|err| panic_with_error!(e, err));
    if assets == 0 && total_assets > 0 {
        panic_with_error!(e, VaultError::InvalidArgument);
    }
    if assets > ledger::pool_held_balance(e) {
        panic_with_error!(e, VaultError::InsufficientLiquidity);
    }

    storage::set_shares(e, user, &(balance - shares));
    storage::set_total_shares(e, &(total_shares - shares));

    if assets > 0 {
        TokenClient::new(e, &storage::get_asset(e)).transfer(&e.current_contract_address(), user, &assets);
    }

    VaultEvents::withdraw(e, user.clone(), shares, assets);
    assets
}

/// Burn every share `user` holds
///
/// ### Panics
/// - `InsufficientShares` if `user` holds no shares
pub fn execute_withdraw_all(e: &Env, user: &Address) -> i128 {
    let balance = storage::get_shares(e, user);
    if balance == 0 {
        panic_with_error!(e, VaultError::InsufficientShares);
    }
    execute_withdraw(e, user, balance)
}

pub fn preview_shares(e: &Env, assets: i128) -> i128 {
    math::to_shares(e, assets, storage::get_total_shares(e), ledger::total_assets(e))
        .unwrap_or_else(|err| panic_with_error!(e, err))
}

pub fn preview_assets(e: &Env, shares: i128) -> i128 {
    math::to_assets(e, shares, storage::get_total_shares(e), ledger::total_assets(e))
        .unwrap_or_else(|err| panic_with_error!(e, err))
}

/// Assets `user` could withdraw right now, bounded by pool-held liquidity
pub fn max_withdraw(e: &Env, user: &Address) -> i128 {
    preview_assets(e, storage::get_shares(e, user)).min(ledger::pool_held_balance(e))
}
