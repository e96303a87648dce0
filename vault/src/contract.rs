use soroban_sdk::{contract, contractclient, contractimpl, Address, BytesN, Env, String, Vec};

use crate::events::VaultEvents;
use crate::types::{PoolRecord, Role};
use crate::{storage, vault};

#[contract]
pub struct VaultContract;

#[contractclient(name = "VaultClient")]
pub trait Vault {
    /// Returns the address of the underlying asset managed by this vault
    fn asset(e: Env) -> Address;

    /// Returns the total assets under management
    ///
    /// Pool-held balance plus every outstanding pool allocation. This is the
    /// figure the share exchange rate is priced against.
    fn total_assets(e: Env) -> i128;

    /// Returns the amount of underlying physically held by the vault
    fn pool_held_balance(e: Env) -> i128;

    /// Returns the sum of all pool allocations
    fn total_allocated(e: Env) -> i128;

    /// Returns the total number of shares in circulation
    fn total_shares(e: Env) -> i128;

    /// Returns the share balance of `user`
    fn shares_of(e: Env, user: Address) -> i128;

    /// Returns the shares `assets` would mint at the current rate
    ///
    /// # Panics
    /// - `ArithmeticOverflow` if the conversion overflows
    fn convert_to_shares(e: Env, assets: i128) -> i128;

    /// Returns the assets `shares` would redeem for at the current rate
    fn convert_to_assets(e: Env, shares: i128) -> i128;

    /// Returns the assets `user` could withdraw now, bounded by pool-held funds
    fn max_withdraw(e: Env, user: Address) -> i128;

    /// Deposits underlying and mints shares to the depositor
    ///
    /// Shares are priced against total assets before the transfer:
    /// `shares = assets * total_shares / total_assets`, rounded down, or
    /// `assets` when no shares exist yet.
    ///
    /// # Arguments
    /// * `user` - Address depositing (must authorize) and receiving shares
    /// * `assets` - Amount of underlying to deposit
    ///
    /// # Returns
    /// Amount of shares minted
    ///
    /// # Panics
    /// - `InvalidArgument` if assets <= 0
    /// - `ZeroShares` if the deposit is too small to mint a share
    /// - `Reentrant` if another mutating call is in flight
    fn deposit(e: Env, user: Address, assets: i128) -> i128;

    /// Burns shares and transfers their value to the holder
    ///
    /// `assets = shares * total_assets / total_shares`, rounded down. Only
    /// pool-held funds are liquid; allocations are not recalled automatically.
    /// After a total write-off the shares redeem for nothing and are burned.
    ///
    /// # Arguments
    /// * `user` - Share holder (must authorize)
    /// * `shares` - Amount of shares to burn
    ///
    /// # Returns
    /// Amount of underlying transferred to `user`
    ///
    /// # Panics
    /// - `InvalidArgument` if shares <= 0, or they redeem for nothing while the
    ///   vault still holds value
    /// - `InsufficientShares` if `user` holds fewer than `shares`
    /// - `InsufficientLiquidity` if pool-held funds cannot cover the payout
    fn withdraw(e: Env, user: Address, shares: i128) -> i128;

    /// Burns every share `user` holds. See `withdraw`.
    ///
    /// # Panics
    /// - `InsufficientShares` if `user` holds no shares
    fn withdraw_all(e: Env, user: Address) -> i128;

    /// (Agent only) Moves pool-held funds into a registered pool
    ///
    /// # Arguments
    /// * `agent` - Agent address (must authorize)
    /// * `name` - Pool identifier
    /// * `amount` - Amount of underlying to allocate
    ///
    /// # Panics
    /// - `Unauthorized` if `agent` does not hold the Agent role
    /// - `InvalidArgument` if amount <= 0
    /// - `NotFound` if the pool is unknown or inactive
    /// - `InsufficientLiquidity` if amount exceeds the pool-held balance
    /// - `ExternalCallFailed` if the destination fails
    fn allocate(e: Env, agent: Address, name: String, amount: i128);

    /// (Agent only) Recalls funds from a pool into vault custody
    ///
    /// # Panics
    /// - `Unauthorized` if `agent` does not hold the Agent role
    /// - `InvalidArgument` if amount <= 0
    /// - `NotFound` if the pool is unknown
    /// - `InsufficientBalance` if amount exceeds the pool's allocation
    /// - `ExternalCallFailed` if the destination fails or under-delivers
    fn deallocate(e: Env, agent: Address, name: String, amount: i128);

    /// (Agent only) Pulls yield a pool reports above its allocation
    ///
    /// # Returns
    /// Amount harvested into vault custody
    fn harvest(e: Env, agent: Address, name: String) -> i128;

    /// (Agent only) Writes a pool's allocation down to its reported balance
    ///
    /// # Returns
    /// Amount written off
    fn recognize_loss(e: Env, agent: Address, name: String) -> i128;

    /// (Admin only) Registers a named pool
    ///
    /// # Panics
    /// - `Unauthorized` if `caller` does not hold the Admin role
    /// - `InvalidArgument` if the name is empty or longer than 32 bytes, or the
    ///   destination is the vault or the underlying asset
    /// - `AlreadyExists` if the name is already registered
    fn register_pool(e: Env, caller: Address, name: String, destination: Address);

    /// (Admin only) Activates or deactivates a pool without removing it
    ///
    /// # Panics
    /// - `NotFound` if the pool is unknown
    fn toggle_pool(e: Env, caller: Address, name: String, active: bool);

    /// Returns the amount allocated to a pool
    ///
    /// # Panics
    /// - `NotFound` if the pool is unknown
    fn get_pool_balance(e: Env, name: String) -> i128;

    /// Returns the full record of a pool
    ///
    /// # Panics
    /// - `NotFound` if the pool is unknown
    fn get_pool(e: Env, name: String) -> PoolRecord;

    /// Returns pool identifiers in registration order
    fn get_pool_list(e: Env) -> Vec<String>;

    /// (Admin only) Grants the Admin role to `account`
    fn set_admin(e: Env, caller: Address, account: Address) -> bool;

    /// (Admin only) Grants the Agent role to `account`
    fn set_agent(e: Env, caller: Address, account: Address) -> bool;

    /// (Admin only) Grants `role` to `account`
    ///
    /// # Returns
    /// False if `account` already held the role
    fn grant_role(e: Env, caller: Address, role: Role, account: Address) -> bool;

    /// (Admin only) Revokes `role` from `account`
    ///
    /// # Returns
    /// False if `account` did not hold the role
    ///
    /// # Panics
    /// - `LastAdministrator` if this would leave the vault without an admin
    fn revoke_role(e: Env, caller: Address, role: Role, account: Address) -> bool;

    /// Returns whether `account` holds `role`
    fn has_role(e: Env, role: Role, account: Address) -> bool;

    /// (Admin only) Upgrade the contract to a new WASM binary
    ///
    /// ### Arguments
    /// * `wasm_hash` - The hash of the new WASM binary
    fn upgrade_wasm(e: Env, caller: Address, wasm_hash: BytesN<32>);
}

#[contractimpl]
impl VaultContract {
    /// Initializes the vault for a single underlying asset
    ///
    /// # Arguments
    /// * `admin` - Bootstrap principal, granted both the Admin and Agent roles
    /// * `asset` - Address of the underlying SEP-41 token
    pub fn __constructor(e: Env, admin: Address, asset: Address) {
        storage::set_asset(&e, &asset);
        storage::set_total_shares(&e, &0);
        storage::set_total_allocated(&e, &0);
        vault::initialize_roles(&e, &admin);

        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl Vault for VaultContract {
    fn asset(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_asset(&e)
    }

    fn total_assets(e: Env) -> i128 {
        storage::extend_instance(&e);
        vault::total_assets(&e)
    }

    fn pool_held_balance(e: Env) -> i128 {
        storage::extend_instance(&e);
        vault::pool_held_balance(&e)
    }

    fn total_allocated(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_allocated(&e)
    }

    fn total_shares(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_total_shares(&e)
    }

    fn shares_of(e: Env, user: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_shares(&e, &user)
    }

    fn convert_to_shares(e: Env, assets: i128) -> i128 {
        storage::extend_instance(&e);
        vault::preview_shares(&e, assets)
    }

    fn convert_to_assets(e: Env, shares: i128) -> i128 {
        storage::extend_instance(&e);
        vault::preview_assets(&e, shares)
    }

    fn max_withdraw(e: Env, user: Address) -> i128 {
        storage::extend_instance(&e);
        vault::max_withdraw(&e, &user)
    }

    fn deposit(e: Env, user: Address, assets: i128) -> i128 {
        storage::extend_instance(&e);
        user.require_auth();
        vault::non_reentrant(&e, || vault::execute_deposit(&e, &user, assets))
    }

    fn withdraw(e: Env, user: Address, shares: i128) -> i128 {
        storage::extend_instance(&e);
        user.require_auth();
        vault::non_reentrant(&e, || vault::execute_withdraw(&e, &user, shares))
    }

    fn withdraw_all(e: Env, user: Address) -> i128 {
        storage::extend_instance(&e);
        user.require_auth();
        vault::non_reentrant(&e, || vault::execute_withdraw_all(&e, &user))
    }

    fn allocate(e: Env, agent: Address, name: String, amount: i128) {
        storage::extend_instance(&e);
        vault::require_agent(&e, &agent);
        vault::non_reentrant(&e, || vault::execute_allocate(&e, &agent, &name, amount));
    }

    fn deallocate(e: Env, agent: Address, name: String, amount: i128) {
        storage::extend_instance(&e);
        vault::require_agent(&e, &agent);
        vault::non_reentrant(&e, || vault::execute_deallocate(&e, &agent, &name, amount));
    }

    fn harvest(e: Env, agent: Address, name: String) -> i128 {
        storage::extend_instance(&e);
        vault::require_agent(&e, &agent);
        vault::non_reentrant(&e, || vault::execute_harvest(&e, &agent, &name))
    }

    fn recognize_loss(e: Env, agent: Address, name: String) -> i128 {
        storage::extend_instance(&e);
        vault::require_agent(&e, &agent);
        vault::non_reentrant(&e, || vault::execute_recognize_loss(&e, &agent, &name))
    }

    fn register_pool(e: Env, caller: Address, name: String, destination: Address) {
        storage::extend_instance(&e);
        vault::require_admin(&e, &caller);
        vault::non_reentrant(&e, || vault::execute_register(&e, &name, &destination));
    }

    fn toggle_pool(e: Env, caller: Address, name: String, active: bool) {
        storage::extend_instance(&e);
        vault::require_admin(&e, &caller);
        vault::non_reentrant(&e, || vault::execute_toggle(&e, &name, active));
    }

    fn get_pool_balance(e: Env, name: String) -> i128 {
        storage::extend_instance(&e);
        vault::load_pool(&e, &name).allocated
    }

    fn get_pool(e: Env, name: String) -> PoolRecord {
        storage::extend_instance(&e);
        vault::load_pool(&e, &name)
    }

    fn get_pool_list(e: Env) -> Vec<String> {
        storage::extend_instance(&e);
        vault::pool_list(&e)
    }

    fn set_admin(e: Env, caller: Address, account: Address) -> bool {
        Self::grant_role(e, caller, Role::Admin, account)
    }

    fn set_agent(e: Env, caller: Address, account: Address) -> bool {
        Self::grant_role(e, caller, Role::Agent, account)
    }

    fn grant_role(e: Env, caller: Address, role: Role, account: Address) -> bool {
        storage::extend_instance(&e);
        vault::require_admin(&e, &caller);
        vault::non_reentrant(&e, || vault::execute_grant(&e, &caller, role, &account))
    }

    fn revoke_role(e: Env, caller: Address, role: Role, account: Address) -> bool {
        storage::extend_instance(&e);
        vault::require_admin(&e, &caller);
        vault::non_reentrant(&e, || vault::execute_revoke(&e, &caller, role, &account))
    }

    fn has_role(e: Env, role: Role, account: Address) -> bool {
        storage::extend_instance(&e);
        storage::has_role(&e, &role, &account)
    }

    fn upgrade_wasm(e: Env, caller: Address, wasm_hash: BytesN<32>) {
        storage::extend_instance(&e);
        vault::require_admin(&e, &caller);
        vault::non_reentrant(&e, || {
            e.deployer().update_current_contract_wasm(wasm_hash.clone());
            VaultEvents::upgrade_wasm(&e, caller.clone(), wasm_hash.clone());
        });
    }
}
