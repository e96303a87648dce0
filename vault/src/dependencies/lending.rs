use soroban_sdk::{contractclient, Address, Env};

/// Lending capability every yield destination satisfies
///
/// Declared here rather than imported from an adapter crate so the vault never
/// links a concrete destination. Implementations are untrusted.
///
/// Funds move by pull on the way in: before calling `deposit` the vault
/// authorizes exactly one `transfer(vault, destination, amount)` on the asset,
/// and `deposit` must make that transfer itself. Funds sent to the
/// destination any other way are not booked. On the way out `withdraw` must
/// transfer at least `amount` to `to` before returning.
#[contractclient(name = "LendingClient")]
pub trait LendingCapability {
    /// Pull `amount` of `asset` from `from` into the destination using the
    /// transfer `from` pre-authorized for this call
    fn deposit(e: Env, from: Address, asset: Address, amount: i128);

    /// Return `amount` of `asset` to `to`
    fn withdraw(e: Env, to: Address, asset: Address, amount: i128);

    /// Amount of `asset` the destination holds on behalf of `owner`
    fn balance(e: Env, owner: Address, asset: Address) -> i128;
}
