#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::{Address, Env};

use crate::{LendingAdapter, LendingAdapterClient};

/// Deploy an adapter owned by `vault` over `asset`
pub fn create_adapter<'a>(e: &Env, vault: &Address, asset: &Address) -> LendingAdapterClient<'a> {
    let adapter = e.register(LendingAdapter {}, (vault.clone(), asset.clone()));
    LendingAdapterClient::new(e, &adapter)
}
