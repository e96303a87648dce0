#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env, String};

use crate::{VaultClient, VaultContract};

/// Deploy a stellar asset contract to serve as the underlying
pub fn create_asset(e: &Env, admin: &Address) -> (Address, StellarAssetClient<'static>) {
    let asset = e.register_stellar_asset_contract_v2(admin.clone()).address();
    let client = StellarAssetClient::new(e, &asset);
    (asset, client)
}

/// Deploy a vault over `asset` with `admin` as the bootstrap principal
pub fn create_vault<'a>(e: &Env, admin: &Address, asset: &Address) -> VaultClient<'a> {
    let vault = e.register(VaultContract {}, (admin.clone(), asset.clone()));
    VaultClient::new(e, &vault)
}

/// Run `op` with the vault's reentrancy lock held, as if a mutating call
/// were in flight
pub fn with_lock_held<T>(e: &Env, vault: &Address, op: impl FnOnce() -> T) -> T {
    e.as_contract(vault, || crate::storage::set_locked(e, true));
    let result = op();
    e.as_contract(vault, || crate::storage::set_locked(e, false));
    result
}

pub fn pool_name(e: &Env, name: &str) -> String {
    String::from_str(e, name)
}

pub fn generate_users(e: &Env, count: u32) -> soroban_sdk::Vec<Address> {
    let mut users = soroban_sdk::Vec::new(e);
    for _ in 0..count {
        users.push_back(Address::generate(e));
    }
    users
}
