//! Lending adapter integration tests
//!
//! Tests custody of vault deposits, withdrawals back to the vault, balance
//! reporting with accrued yield, and rejection of foreign callers and assets.

use lending_adapter::{AdapterError, LendingAdapter, LendingAdapterClient};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env, Error,
};

const SCALAR_7: i128 = 10_000_000;

fn contract_error(err: AdapterError) -> Error {
    Error::from_contract_error(err as u32)
}

fn setup_adapter<'a>() -> (Env, Address, Address, LendingAdapterClient<'a>) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let vault = Address::generate(&env);
    let asset = env.register_stellar_asset_contract_v2(admin).address();
    StellarAssetClient::new(&env, &asset).mint(&vault, &(10_000 * SCALAR_7));

    let adapter_id = env.register(LendingAdapter {}, (vault.clone(), asset.clone()));
    let adapter = LendingAdapterClient::new(&env, &adapter_id);
    (env, vault, asset, adapter)
}

#[test]
fn test_adapter_getters() {
    let (_, vault, asset, adapter) = setup_adapter();

    assert_eq!(adapter.vault(), vault);
    assert_eq!(adapter.asset(), asset);
    assert_eq!(adapter.principal(), 0);
    assert_eq!(adapter.balance(&vault, &asset), 0);
}

#[test]
fn test_deposit_pulls_from_vault() {
    let (env, vault, asset, adapter) = setup_adapter();
    let token = TokenClient::new(&env, &asset);

    adapter.deposit(&vault, &asset, &(1_000 * SCALAR_7));

    assert_eq!(token.balance(&vault), 9_000 * SCALAR_7);
    assert_eq!(token.balance(&adapter.address), 1_000 * SCALAR_7);
    assert_eq!(adapter.balance(&vault, &asset), 1_000 * SCALAR_7);
    assert_eq!(adapter.principal(), 1_000 * SCALAR_7);
}

#[test]
fn test_withdraw_returns_to_vault() {
    let (env, vault, asset, adapter) = setup_adapter();
    let token = TokenClient::new(&env, &asset);

    adapter.deposit(&vault, &asset, &(1_000 * SCALAR_7));
    adapter.withdraw(&vault, &asset, &(400 * SCALAR_7));

    assert_eq!(token.balance(&vault), 9_400 * SCALAR_7);
    assert_eq!(adapter.balance(&vault, &asset), 600 * SCALAR_7);
    assert_eq!(adapter.principal(), 600 * SCALAR_7);
}

#[test]
fn test_balance_includes_yield() {
    let (env, vault, asset, adapter) = setup_adapter();

    adapter.deposit(&vault, &asset, &(1_000 * SCALAR_7));
    // yield paid straight into the adapter
    StellarAssetClient::new(&env, &asset).mint(&adapter.address, &(50 * SCALAR_7));

    assert_eq!(adapter.balance(&vault, &asset), 1_050 * SCALAR_7);
    assert_eq!(adapter.principal(), 1_000 * SCALAR_7);

    // yield can be withdrawn on top of principal
    adapter.withdraw(&vault, &asset, &(1_050 * SCALAR_7));
    assert_eq!(adapter.balance(&vault, &asset), 0);
    assert_eq!(adapter.principal(), 0);
}

#[test]
fn test_balance_for_other_owner_is_zero() {
    let (env, vault, asset, adapter) = setup_adapter();
    let stranger = Address::generate(&env);

    adapter.deposit(&vault, &asset, &(1_000 * SCALAR_7));

    assert_eq!(adapter.balance(&stranger, &asset), 0);
}

#[test]
fn test_foreign_depositor_rejected() {
    let (env, _, asset, adapter) = setup_adapter();
    let stranger = Address::generate(&env);
    StellarAssetClient::new(&env, &asset).mint(&stranger, &(100 * SCALAR_7));

    let result = adapter.try_deposit(&stranger, &asset, &(100 * SCALAR_7));
    assert_eq!(result, Err(Ok(contract_error(AdapterError::Unauthorized))));
}

#[test]
fn test_withdraw_to_stranger_rejected() {
    let (env, vault, asset, adapter) = setup_adapter();
    let stranger = Address::generate(&env);

    adapter.deposit(&vault, &asset, &(1_000 * SCALAR_7));

    let result = adapter.try_withdraw(&stranger, &asset, &(100 * SCALAR_7));
    assert_eq!(result, Err(Ok(contract_error(AdapterError::Unauthorized))));
    assert_eq!(adapter.balance(&vault, &asset), 1_000 * SCALAR_7);
}

#[test]
fn test_wrong_asset_rejected() {
    let (env, vault, _, adapter) = setup_adapter();
    let other_asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let result = adapter.try_deposit(&vault, &other_asset, &(100 * SCALAR_7));
    assert_eq!(result, Err(Ok(contract_error(AdapterError::InvalidAsset))));
}

#[test]
fn test_zero_amount_rejected() {
    let (_, vault, asset, adapter) = setup_adapter();

    assert_eq!(
        adapter.try_deposit(&vault, &asset, &0),
        Err(Ok(contract_error(AdapterError::InvalidAmount)))
    );
    assert_eq!(
        adapter.try_withdraw(&vault, &asset, &-1),
        Err(Ok(contract_error(AdapterError::InvalidAmount)))
    );
}

#[test]
fn test_overdraw_rejected() {
    let (_, vault, asset, adapter) = setup_adapter();

    adapter.deposit(&vault, &asset, &(100 * SCALAR_7));

    let result = adapter.try_withdraw(&vault, &asset, &(101 * SCALAR_7));
    assert_eq!(result, Err(Ok(contract_error(AdapterError::InsufficientFunds))));
}
