use sep_41_token::TokenClient;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Symbol};

use crate::errors::AdapterError;
use crate::storage;

/// Single-vault custody adapter satisfying the vault's lending capability
///
/// Holds whatever its vault deposits and reports its full token balance,
/// including any yield paid into it, as the vault's balance. Funds only ever
/// leave toward the vault.
#[contract]
pub struct LendingAdapter;

#[contractimpl]
impl LendingAdapter {
    /// # Arguments
    /// * `vault` - The only address allowed to deposit and withdraw
    /// * `asset` - The only token this adapter custodies
    pub fn __constructor(e: Env, vault: Address, asset: Address) {
        storage::set_vault(&e, &vault);
        storage::set_asset(&e, &asset);
        storage::extend_instance(&e);
    }

    /// Pull `amount` of `asset` from the vault
    ///
    /// # Panics
    /// - `Unauthorized` if `from` is not the vault
    /// - `InvalidAsset` if `asset` is not the custodied token
    /// - `InvalidAmount` if amount <= 0
    /// - `ArithmeticOverflow` if the tracked principal would overflow
    pub fn deposit(e: Env, from: Address, asset: Address, amount: i128) {
        storage::extend_instance(&e);
        from.require_auth();
        require_vault_call(&e, &from, &asset, amount);

        let principal = storage::get_principal(&e)
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(e, AdapterError::ArithmeticOverflow));

        TokenClient::new(&e, &asset).transfer(&from, &e.current_contract_address(), &amount);
        storage::set_principal(&e, &principal);

        e.events()
            .publish((Symbol::new(&e, "deposit"),), (from, amount));
    }

    /// Send `amount` of `asset` back to the vault
    ///
    /// # Panics
    /// - `Unauthorized` if `to` is not the vault
    /// - `InvalidAsset` if `asset` is not the custodied token
    /// - `InvalidAmount` if amount <= 0
    /// - `InsufficientFunds` if the adapter holds less than `amount`
    pub fn withdraw(e: Env, to: Address, asset: Address, amount: i128) {
        storage::extend_instance(&e);
        to.require_auth();
        require_vault_call(&e, &to, &asset, amount);

        let token = TokenClient::new(&e, &asset);
        if token.balance(&e.current_contract_address()) < amount {
            panic_with_error!(e, AdapterError::InsufficientFunds);
        }
        token.transfer(&e.current_contract_address(), &to, &amount);
        storage::set_principal(&e, &(storage::get_principal(&e) - amount).max(0));

        e.events()
            .publish((Symbol::new(&e, "withdraw"),), (to, amount));
    }

    /// Amount of `asset` held for `owner`
    ///
    /// Everything the adapter holds belongs to its vault; any other owner or
    /// asset holds nothing.
    pub fn balance(e: Env, owner: Address, asset: Address) -> i128 {
        storage::extend_instance(&e);
        if owner != storage::get_vault(&e) || asset != storage::get_asset(&e) {
            return 0;
        }
        TokenClient::new(&e, &asset).balance(&e.current_contract_address())
    }

    /// Net amount deposited by the vault and not yet withdrawn
    pub fn principal(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_principal(&e)
    }

    pub fn vault(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_vault(&e)
    }

    pub fn asset(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_asset(&e)
    }
}

fn require_vault_call(e: &Env, account: &Address, asset: &Address, amount: i128) {
    if *account != storage::get_vault(e) {
        panic_with_error!(e, AdapterError::Unauthorized);
    }
    if *asset != storage::get_asset(e) {
        panic_with_error!(e, AdapterError::InvalidAsset);
    }
    if amount <= 0 {
        panic_with_error!(e, AdapterError::InvalidAmount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LendingAdapterClient;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::token::StellarAssetClient;
    use soroban_sdk::Error;

    #[test]
    fn test_principal_overflow_is_typed() {
        let e = Env::default();
        e.mock_all_auths();

        let vault = Address::generate(&e);
        let asset = e
            .register_stellar_asset_contract_v2(Address::generate(&e))
            .address();
        StellarAssetClient::new(&e, &asset).mint(&vault, &100);

        let adapter_id = e.register(LendingAdapter {}, (vault.clone(), asset.clone()));
        let adapter = LendingAdapterClient::new(&e, &adapter_id);
        e.as_contract(&adapter_id, || storage::set_principal(&e, &(i128::MAX - 10)));

        let result = adapter.try_deposit(&vault, &asset, &100);
        assert_eq!(
            result,
            Err(Ok(Error::from_contract_error(AdapterError::ArithmeticOverflow as u32)))
        );
        assert_eq!(adapter.principal(), i128::MAX - 10);
    }
}
