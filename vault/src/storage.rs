use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, String, Symbol, TryFromVal, Val,
    Vec,
};

use crate::types::{PoolRecord, Role};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const ASSET_KEY: &str = "Asset";
const TOTAL_SHARES_KEY: &str = "TotalShares";
const TOTAL_ALLOCATED_KEY: &str = "TotalAlloc";
const POOL_LIST_KEY: &str = "PoolList";
const ADMIN_COUNT_KEY: &str = "AdminCount";
const LOCK_KEY: &str = "Locked";

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VaultDataKey {
    // Role membership flag for an address
    Role(Role, Address),
    // Registered pool record by name
    Pool(String),
    // Share balance of a holder
    Shares(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Asset **********/

/// Fetch the underlying asset address
///
/// ### Panics
/// If the vault has not been constructed
pub fn get_asset(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ASSET_KEY))
        .unwrap_optimized()
}

pub fn set_asset(e: &Env, asset: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ASSET_KEY), asset);
}

/********** Share Supply **********/

pub fn get_total_shares(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, TOTAL_SHARES_KEY))
        .unwrap_or(0)
}

pub fn set_total_shares(e: &Env, total_shares: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, TOTAL_SHARES_KEY), total_shares);
}

/// Fetch the share balance of a holder, zero if none
///
/// ### Arguments
/// * `holder` - The address of the share holder
pub fn get_shares(e: &Env, holder: &Address) -> i128 {
    let key = VaultDataKey::Shares(holder.clone());
    get_persistent_default(e, &key, || 0, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Set the share balance of a holder. A zero balance removes the entry.
///
/// ### Arguments
/// * `holder` - The address of the share holder
/// * `shares` - The new share balance
pub fn set_shares(e: &Env, holder: &Address, shares: &i128) {
    let key = VaultDataKey::Shares(holder.clone());
    if *shares == 0 {
        e.storage().persistent().remove(&key);
        return;
    }
    e.storage()
        .persistent()
        .set::<VaultDataKey, i128>(&key, shares);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/********** Roles **********/

/// Check if an address holds a role
///
/// ### Arguments
/// * `role` - The role to check
/// * `account` - The address to check
pub fn has_role(e: &Env, role: &Role, account: &Address) -> bool {
    let key = VaultDataKey::Role(*role, account.clone());
    get_persistent_default(
        e,
        &key,
        || false,
        LEDGER_THRESHOLD_SHARED,
        LEDGER_BUMP_SHARED,
    )
}

pub fn set_role(e: &Env, role: &Role, account: &Address) {
    let key = VaultDataKey::Role(*role, account.clone());
    e.storage().persistent().set::<VaultDataKey, bool>(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn remove_role(e: &Env, role: &Role, account: &Address) {
    let key = VaultDataKey::Role(*role, account.clone());
    e.storage().persistent().remove(&key);
}

pub fn get_admin_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, ADMIN_COUNT_KEY))
        .unwrap_or(0)
}

pub fn set_admin_count(e: &Env, count: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, ADMIN_COUNT_KEY), &count);
}

/********** Pool Registry **********/

/// Fetch a pool record by name
///
/// ### Arguments
/// * `name` - The pool identifier
pub fn get_pool(e: &Env, name: &String) -> Option<PoolRecord> {
    let key = VaultDataKey::Pool(name.clone());
    let pool = e.storage().persistent().get::<VaultDataKey, PoolRecord>(&key);
    if pool.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
    }
    pool
}

/// Set a pool record
///
/// ### Arguments
/// * `name` - The pool identifier
/// * `pool` - The pool record
pub fn set_pool(e: &Env, name: &String, pool: &PoolRecord) {
    let key = VaultDataKey::Pool(name.clone());
    e.storage()
        .persistent()
        .set::<VaultDataKey, PoolRecord>(&key, pool);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

pub fn has_pool(e: &Env, name: &String) -> bool {
    let key = VaultDataKey::Pool(name.clone());
    e.storage().persistent().has(&key)
}

/// Fetch the pool names in registration order
pub fn get_pool_list(e: &Env) -> Vec<String> {
    e.storage()
        .instance()
        .get::<Symbol, Vec<String>>(&Symbol::new(e, POOL_LIST_KEY))
        .unwrap_or(Vec::new(e))
}

/// Append a pool name to the list and return its index
///
/// ### Arguments
/// * `name` - The pool identifier
pub fn push_pool_list(e: &Env, name: &String) -> u32 {
    let mut pool_list = get_pool_list(e);
    pool_list.push_back(name.clone());
    let new_index = pool_list.len() - 1;
    e.storage()
        .instance()
        .set::<Symbol, Vec<String>>(&Symbol::new(e, POOL_LIST_KEY), &pool_list);
    new_index
}

/********** Allocation Totals **********/

pub fn get_total_allocated(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, TOTAL_ALLOCATED_KEY))
        .unwrap_or(0)
}

pub fn set_total_allocated(e: &Env, total: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, TOTAL_ALLOCATED_KEY), total);
}

/********** Reentrancy Lock **********/

pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<Symbol, bool>(&Symbol::new(e, LOCK_KEY))
        .unwrap_or(false)
}

pub fn set_locked(e: &Env, locked: bool) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, LOCK_KEY), &locked);
}
