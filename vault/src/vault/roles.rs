use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::Role;

/// Require `caller` to authorize the invocation and to currently hold `role`
///
/// Membership is read from storage on every call so a revoked principal loses
/// access immediately.
///
/// ### Panics
/// - `Unauthorized` if `caller` does not hold `role`
pub fn require_role(e: &Env, role: Role, caller: &Address) {
    caller.require_auth();
    if !storage::has_role(e, &role, caller) {
        panic_with_error!(e, VaultError::Unauthorized);
    }
}

pub fn require_admin(e: &Env, caller: &Address) {
    require_role(e, Role::Admin, caller);
}

pub fn require_agent(e: &Env, caller: &Address) {
    require_role(e, Role::Agent, caller);
}

/// Give both roles to the bootstrap principal
pub fn execute_initialize(e: &Env, admin: &Address) {
    storage::set_role(e, &Role::Admin, admin);
    storage::set_role(e, &Role::Agent, admin);
    storage::set_admin_count(e, 1);
}

/// Grant `role` to `account`. Returns false if it was already held.
pub fn execute_grant(e: &Env, caller: &Address, role: Role, account: &Address) -> bool {
    if storage::has_role(e, &role, account) {
        return false;
    }
    storage::set_role(e, &role, account);
    if role == Role::Admin {
        let count = storage::get_admin_count(e)
            .checked_add(1)
            .unwrap_or_else(|| panic_with_error!(e, VaultError::ArithmeticOverflow));
        storage::set_admin_count(e, count);
    }
    VaultEvents::role_granted(e, role, account.clone(), caller.clone());
    true
}

/// Revoke `role` from `account`. Returns false if it was not held.
///
/// ### Panics
/// - `LastAdministrator` if `account` is the only remaining admin
pub fn execute_revoke(e: &Env, caller: &Address, role: Role, account: &Address) -> bool {
    if !storage::has_role(e, &role, account) {
        return false;
    }
    if role == Role::Admin {
        let count = storage::get_admin_count(e);
        if count <= 1 {
            panic_with_error!(e, VaultError::LastAdministrator);
        }
        storage::set_admin_count(e, count - 1);
    }
    storage::remove_role(e, &role, account);
    VaultEvents::role_revoked(e, role, account.clone(), caller.clone());
    true
}
