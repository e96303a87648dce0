use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

use crate::constants::MAX_POOL_NAME_LEN;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::PoolRecord;

/// Add a pool to the registry. Registration is append-only.
///
/// ### Panics
/// - `InvalidArgument` if the name is empty or too long, or the destination is
///   the vault itself or the underlying asset
/// - `AlreadyExists` if the name is taken
pub fn execute_register(e: &Env, name: &String, destination: &Address) {
    if name.len() == 0 || name.len() > MAX_POOL_NAME_LEN {
        panic_with_error!(e, VaultError::InvalidArgument);
    }
    if *destination == e.current_contract_address() || *destination == storage::get_asset(e) {
        panic_with_error!(e, VaultError::InvalidArgument);
    }
    if storage::has_pool(e, name) {
        panic_with_error!(e, VaultError::AlreadyExists);
    }

    let pool = PoolRecord {
        destination: destination.clone(),
        active: true,
        allocated: 0,
    };
    storage::set_pool(e, name, &pool);
    storage::push_pool_list(e, name);

    VaultEvents::register_pool(e, name.clone(), destination.clone());
}

/// Activate or deactivate a pool. Its ledger entry is kept either way.
///
/// ### Panics
/// - `NotFound` if the pool is not registered
pub fn execute_toggle(e: &Env, name: &String, active: bool) {
    let mut pool = load(e, name);
    if pool.active == active {
        return;
    }
    pool.active = active;
    storage::set_pool(e, name, &pool);

    VaultEvents::toggle_pool(e, name.clone(), active);
}

/// Fetch a registered pool, active or not
///
/// ### Panics
/// - `NotFound` if the pool is not registered
pub fn load(e: &Env, name: &String) -> PoolRecord {
    storage::get_pool(e, name).unwrap_or_else(|| panic_with_error!(e, VaultError::NotFound))
}

/// Fetch a pool that can accept allocations
///
/// ### Panics
/// - `NotFound` if the pool is not registered or inactive
pub fn resolve(e: &Env, name: &String) -> PoolRecord {
    match storage::get_pool(e, name) {
        Some(pool) if pool.active => pool,
        _ => panic_with_error!(e, VaultError::NotFound),
    }
}

/// Pool names in registration order
pub fn list(e: &Env) -> Vec<String> {
    storage::get_pool_list(e)
}
