use soroban_sdk::{Address, BytesN, Env, String, Symbol};

use crate::types::Role;

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when assets are deposited into the vault
    ///
    /// - topics - `["deposit"]`
    /// - data - `[user: Address, assets: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * user - The address depositing and receiving the minted shares
    /// * assets - The amount of underlying deposited
    /// * shares - The amount of shares minted
    pub fn deposit(e: &Env, user: Address, assets: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"),);
        e.events().publish(topics, (user, assets, shares));
    }

    /// Emitted when shares are redeemed for assets
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[user: Address, shares: i128, assets: i128]`
    ///
    /// ### Arguments
    /// * user - The address whose shares were burned
    /// * shares - The amount of shares burned
    /// * assets - The amount of underlying transferred out
    pub fn withdraw(e: &Env, user: Address, shares: i128, assets: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (user, shares, assets));
    }

    /// Emitted when the agent allocates funds to a pool
    ///
    /// - topics - `["allocate", name: String]`
    /// - data - `[agent: Address, amount: i128, allocated: i128]`
    ///
    /// ### Arguments
    /// * name - The pool identifier
    /// * agent - The agent that moved the funds
    /// * amount - The amount allocated
    /// * allocated - The pool's allocation after the move
    pub fn allocate(e: &Env, name: String, agent: Address, amount: i128, allocated: i128) {
        let topics = (Symbol::new(e, "allocate"), name);
        e.events().publish(topics, (agent, amount, allocated));
    }

    /// Emitted when the agent recalls funds from a pool
    ///
    /// - topics - `["deallocate", name: String]`
    /// - data - `[agent: Address, amount: i128, allocated: i128]`
    pub fn deallocate(e: &Env, name: String, agent: Address, amount: i128, allocated: i128) {
        let topics = (Symbol::new(e, "deallocate"), name);
        e.events().publish(topics, (agent, amount, allocated));
    }

    /// Emitted when pool yield above the allocation is pulled into custody
    ///
    /// - topics - `["harvest", name: String]`
    /// - data - `[agent: Address, amount: i128]`
    pub fn harvest(e: &Env, name: String, agent: Address, amount: i128) {
        let topics = (Symbol::new(e, "harvest"), name);
        e.events().publish(topics, (agent, amount));
    }

    /// Emitted when a pool's allocation is written down to its reported balance
    ///
    /// - topics - `["loss", name: String]`
    /// - data - `[agent: Address, loss: i128, allocated: i128]`
    pub fn loss(e: &Env, name: String, agent: Address, loss: i128, allocated: i128) {
        let topics = (Symbol::new(e, "loss"), name);
        e.events().publish(topics, (agent, loss, allocated));
    }

    /// Emitted when a pool is added to the registry
    ///
    /// - topics - `["register_pool", name: String]`
    /// - data - `destination: Address`
    pub fn register_pool(e: &Env, name: String, destination: Address) {
        let topics = (Symbol::new(e, "register_pool"), name);
        e.events().publish(topics, destination);
    }

    /// Emitted when a pool is activated or deactivated
    ///
    /// - topics - `["toggle_pool", name: String]`
    /// - data - `active: bool`
    pub fn toggle_pool(e: &Env, name: String, active: bool) {
        let topics = (Symbol::new(e, "toggle_pool"), name);
        e.events().publish(topics, active);
    }

    /// Emitted when a role is granted
    ///
    /// - topics - `["role_granted", role: Role]`
    /// - data - `[account: Address, caller: Address]`
    pub fn role_granted(e: &Env, role: Role, account: Address, caller: Address) {
        let topics = (Symbol::new(e, "role_granted"), role);
        e.events().publish(topics, (account, caller));
    }

    /// Emitted when a role is revoked
    ///
    /// - topics - `["role_revoked", role: Role]`
    /// - data - `[account: Address, caller: Address]`
    pub fn role_revoked(e: &Env, role: Role, account: Address, caller: Address) {
        let topics = (Symbol::new(e, "role_revoked"), role);
        e.events().publish(topics, (account, caller));
    }

    /// Emitted when the contract wasm is upgraded
    ///
    /// - topics - `["upgrade_wasm"]`
    /// - data - `[admin: Address, wasm_hash: BytesN<32>]`
    pub fn upgrade_wasm(e: &Env, admin: Address, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(e, "upgrade_wasm"),);
        e.events().publish(topics, (admin, wasm_hash));
    }
}
