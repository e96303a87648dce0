use soroban_sdk::{panic_with_error, Env};

use crate::errors::VaultError;
use crate::storage;

/// Run a state-mutating operation under the vault's reentrancy lock
///
/// The lock is cleared when `op` returns. If `op` fails the host rolls back the
/// whole invocation, the lock write included, so no failure path leaves it set.
///
/// ### Panics
/// - `Reentrant` if another mutating operation is in flight
pub fn non_reentrant<T>(e: &Env, op: impl FnOnce() -> T) -> T {
    if storage::is_locked(e) {
        panic_with_error!(e, VaultError::Reentrant);
    }
    storage::set_locked(e, true);
    let result = op();
    storage::set_locked(e, false);
    result
}
