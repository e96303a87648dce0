use soroban_sdk::{contracttype, Address};

/// Privileged roles tracked by the vault
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin, // Manages roles and the pool registry
    Agent, // Moves funds between vault custody and registered pools
}

/// A registered yield destination and its allocation ledger entry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolRecord {
    pub destination: Address, // Contract satisfying the lending capability
    pub active: bool,         // Inactive pools accept no new allocations
    pub allocated: i128,      // Underlying currently allocated to the pool
}
