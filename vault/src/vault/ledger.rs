use soroban_sdk::{panic_with_error, token::TokenClient, Env, String};

use crate::errors::VaultError;
use crate::storage;
use crate::types::PoolRecord;
use crate::vault::math;

/// Underlying physically held by the vault contract
pub fn pool_held_balance(e: &Env) -> i128 {
    TokenClient::new(e, &storage::get_asset(e)).balance(&e.current_contract_address())
}

/// Pool-held balance plus every outstanding allocation
///
/// Destinations' self-reported balances are never added here; the ledger is
/// the source of truth for allocated funds.
pub fn total_assets(e: &Env) -> i128 {
    math::add(pool_held_balance(e), storage::get_total_allocated(e))
        .unwrap_or_else(|err| panic_with_error!(e, err))
}

/// Credit `amount` to a pool and the running total in one step
pub fn record_allocation(e: &Env, name: &String, pool: &mut PoolRecord, amount: i128) {
    let total = storage::get_total_allocated(e);
    let allocated = math::add(pool.allocated, amount).unwrap_or_else(|err| panic_with_error!(e, err));
    let total = math::add(total, amount).unwrap_or_else(|err| panic_with_error!(e, err));

    pool.allocated = allocated;
    storage::set_pool(e, name, pool);
    storage::set_total_allocated(e, &total);
}

/// Debit `amount` from a pool and the running total in one step
///
/// ### Panics
/// - `InsufficientBalance` if the pool has less than `amount` allocated
pub fn record_release(e: &Env, name: &String, pool: &mut PoolRecord, amount: i128) {
    if amount > pool.allocated {
        panic_with_error!(e, VaultError::InsufficientBalance);
    }
    let total = storage::get_total_allocated(e);
    let allocated = math::sub(pool.allocated, amount).unwrap_or_else(|err| panic_with_error!(e, err));
    let total = math::sub(total, amount).unwrap_or_else(|err| panic_with_error!(e, err));
    if total < 0 {
        panic_with_error!(e, VaultError::LedgerMismatch);
    }

    pool.allocated = allocated;
    storage::set_pool(e, name, pool);
    storage::set_total_allocated(e, &total);
}

/// Recompute the sum of pool allocations and compare it to the running total
///
/// ### Panics
/// - `LedgerMismatch` if the two disagree
pub fn verify(e: &Env) {
    let mut sum: i128 = 0;
    for name in storage::get_pool_list(e).iter() {
        let allocated = storage::get_pool(e, &name)
            .map(|pool| pool.allocated)
            .unwrap_or_else(|| panic_with_error!(e, VaultError::LedgerMismatch));
        sum = math::add(sum, allocated).unwrap_or_else(|err| panic_with_error!(e, err));
    }
    if sum != storage::get_total_allocated(e) {
        panic_with_error!(e, VaultError::LedgerMismatch);
    }
}
