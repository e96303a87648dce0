use soroban_sdk::auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation};
use soroban_sdk::{log, panic_with_error, vec, Address, Env, IntoVal, String, Symbol, Val, Vec};

use crate::dependencies::LendingClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::{ledger, math, registry};

/// Move `amount` of pool-held funds into an active pool
///
/// ### Panics
/// - `InvalidArgument` if `amount` is not positive
/// - `NotFound` if the pool is unknown or inactive
/// - `InsufficientLiquidity` if the vault holds less than `amount`
/// - `ExternalCallFailed` if the destination fails or does not take the funds
pub fn execute_allocate(e: &Env, agent: &Address, name: &String, amount: i128) {
    require_positive(e, amount);
    let mut pool = registry::resolve(e, name);
    if amount > ledger::pool_held_balance(e) {
        panic_with_error!(e, VaultError::InsufficientLiquidity);
    }

    let asset = storage::get_asset(e);
    push_to_destination(e, &asset, &pool.destination, amount);

    ledger::record_allocation(e, name, &mut pool, amount);
    ledger::verify(e);

    VaultEvents::allocate(e, name.clone(), agent.clone(), amount, pool.allocated);
}

/// Recall `amount` from a registered pool back into vault custody
///
/// Inactive pools can still be drained.
///
/// ### Panics
/// - `InvalidArgument` if `amount` is not positive
/// - `NotFound` if the pool is unknown
/// - `InsufficientBalance` if the pool has less than `amount` allocated
/// - `ExternalCallFailed` if the destination fails or under-delivers
pub fn execute_deallocate(e: &Env, agent: &Address, name: &String, amount: i128) {
    require_positive(e, amount);
    let mut pool = registry::load(e, name);
    if amount > pool.allocated {
        panic_with_error!(e, VaultError::InsufficientBalance);
    }

    let asset = storage::get_asset(e);
    pull_from_destination(e, &asset, &pool.destination, amount);

    ledger::record_release(e, name, &mut pool, amount);
    ledger::verify(e);

    VaultEvents::deallocate(e, name.clone(), agent.clone(), amount, pool.allocated);
}

/// Pull whatever a pool reports above its allocation into vault custody
///
/// Returns the amount harvested. The ledger entry is unchanged, so the
/// harvested yield raises the share price.
pub fn execute_harvest(e: &Env, agent: &Address, name: &String) -> i128 {
    let pool = registry::load(e, name);
    let asset = storage::get_asset(e);

    let reported = query_balance(e, &asset, &pool.destination);
    let surplus = math::sub(reported, pool.allocated).unwrap_or_else(|err| panic_with_error!(e, err));
    if surplus <= 0 {
        return 0;
    }

    pull_from_destination(e, &asset, &pool.destination, surplus);
    ledger::verify(e);

    VaultEvents::harvest(e, name.clone(), agent.clone(), surplus);
    surplus
}

/// Write a pool's allocation down to the balance it reports
///
/// Returns the amount written off. This is the only path besides share
/// withdrawals that lowers total assets.
pub fn execute_recognize_loss(e: &Env, agent: &Address, name: &String) -> i128 {
    let mut pool = registry::load(e, name);
    let asset = storage::get_asset(e);

    let reported = query_balance(e, &asset, &pool.destination).max(0);
    if reported >= pool.allocated {
        return 0;
    }
    let loss = pool.allocated - reported;

    ledger::record_release(e, name, &mut pool, loss);
    ledger::verify(e);

    VaultEvents::loss(e, name.clone(), agent.clone(), loss, pool.allocated);
    loss
}

fn require_positive(e: &Env, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, VaultError::InvalidArgument);
    }
}

/// Authorize the destination to pull `amount` and invoke its deposit
///
/// The vault's own balance must drop by exactly `amount`, otherwise the funds
/// would be counted both as held and as allocated.
fn push_to_destination(e: &Env, asset: &Address, destination: &Address, amount: i128) {
    let vault = e.current_contract_address();
    let args: Vec<Val> = vec![
        e,
        vault.into_val(e),
        destination.into_val(e),
        amount.into_val(e),
    ];
    e.authorize_as_current_contract(vec![
        e,
        InvokerContractAuthEntry::Contract(SubContractInvocation {
            context: ContractContext {
                contract: asset.clone(),
                fn_name: Symbol::new(e, "transfer"),
                args,
            },
            sub_invocations: vec![e],
        }),
    ]);

    let held_before = ledger::pool_held_balance(e);
    let client = LendingClient::new(e, destination);
    if !matches!(client.try_deposit(&vault, asset, &amount), Ok(Ok(()))) {
        log!(e, "pool deposit rejected: {}", amount);
        panic_with_error!(e, VaultError::ExternalCallFailed);
    }

    let sent = math::sub(held_before, ledger::pool_held_balance(e))
        .unwrap_or_else(|err| panic_with_error!(e, err));
    if sent != amount {
        log!(e, "pool deposit moved {} of {}", sent, amount);
        panic_with_error!(e, VaultError::ExternalCallFailed);
    }
}

/// Invoke the destination's withdraw and confirm the funds settled in custody
fn pull_from_destination(e: &Env, asset: &Address, destination: &Address, amount: i128) {
    let vault = e.current_contract_address();
    let held_before = ledger::pool_held_balance(e);
    let client = LendingClient::new(e, destination);
    if !matches!(client.try_withdraw(&vault, asset, &amount), Ok(Ok(()))) {
        log!(e, "pool withdraw rejected: {}", amount);
        panic_with_error!(e, VaultError::ExternalCallFailed);
    }

    let received = math::sub(ledger::pool_held_balance(e), held_before)
        .unwrap_or_else(|err| panic_with_error!(e, err));
    if received < amount {
        log!(e, "pool withdraw settled {} of {}", received, amount);
        panic_with_error!(e, VaultError::ExternalCallFailed);
    }
}

fn query_balance(e: &Env, asset: &Address, destination: &Address) -> i128 {
    let client = LendingClient::new(e, destination);
    match client.try_balance(&e.current_contract_address(), asset) {
        Ok(Ok(balance)) => balance,
        _ => panic_with_error!(e, VaultError::ExternalCallFailed),
    }
}
