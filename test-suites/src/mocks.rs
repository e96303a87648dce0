//! Pool destinations that break the lending capability contract in
//! different ways

use soroban_sdk::{contracterror, Address, Env, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockPoolError {
    Rejected = 9001,
}

fn set_address(e: &Env, key: &str, address: &Address) {
    e.storage().instance().set(&Symbol::new(e, key), address);
}

fn get_address(e: &Env, key: &str) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, key))
        .unwrap_or_else(|| soroban_sdk::panic_with_error!(e, MockPoolError::Rejected))
}

/// Fails every call
pub mod reverting {
    use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

    use super::MockPoolError;

    #[contract]
    pub struct RevertingPool;

    #[contractimpl]
    impl RevertingPool {
        pub fn deposit(e: Env, _from: Address, _asset: Address, _amount: i128) {
            panic_with_error!(e, MockPoolError::Rejected);
        }

        pub fn withdraw(e: Env, _to: Address, _asset: Address, _amount: i128) {
            panic_with_error!(e, MockPoolError::Rejected);
        }

        pub fn balance(e: Env, _owner: Address, _asset: Address) -> i128 {
            panic_with_error!(e, MockPoolError::Rejected);
        }
    }
}

/// Reports success on deposit without taking the funds
pub mod idle {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    #[contract]
    pub struct IdlePool;

    #[contractimpl]
    impl IdlePool {
        pub fn deposit(_e: Env, _from: Address, _asset: Address, _amount: i128) {}

        pub fn withdraw(_e: Env, _to: Address, _asset: Address, _amount: i128) {}

        pub fn balance(_e: Env, _owner: Address, _asset: Address) -> i128 {
            0
        }
    }
}

/// Takes deposits in full but returns only half of every withdrawal
pub mod short_pay {
    use soroban_sdk::token::TokenClient;
    use soroban_sdk::{contract, contractimpl, Address, Env};

    #[contract]
    pub struct ShortPayPool;

    #[contractimpl]
    impl ShortPayPool {
        pub fn deposit(e: Env, from: Address, asset: Address, amount: i128) {
            TokenClient::new(&e, &asset).transfer(&from, &e.current_contract_address(), &amount);
        }

        pub fn withdraw(e: Env, to: Address, asset: Address, amount: i128) {
            TokenClient::new(&e, &asset).transfer(&e.current_contract_address(), &to, &(amount / 2));
        }

        pub fn balance(e: Env, _owner: Address, asset: Address) -> i128 {
            TokenClient::new(&e, &asset).balance(&e.current_contract_address())
        }
    }
}

/// Calls back into its vault while handling a deposit or withdrawal
pub mod reentrant {
    use pool_vault::VaultClient;
    use soroban_sdk::token::TokenClient;
    use soroban_sdk::{contract, contractimpl, Address, Env};

    use super::{get_address, set_address};

    #[contract]
    pub struct ReentrantPool;

    #[contractimpl]
    impl ReentrantPool {
        pub fn __constructor(e: Env, vault: Address, attacker: Address) {
            set_address(&e, "Vault", &vault);
            set_address(&e, "Attacker", &attacker);
        }

        pub fn deposit(e: Env, from: Address, asset: Address, amount: i128) {
            TokenClient::new(&e, &asset).transfer(&from, &e.current_contract_address(), &amount);
            Self::reenter(&e);
        }

        pub fn withdraw(e: Env, to: Address, asset: Address, amount: i128) {
            TokenClient::new(&e, &asset).transfer(&e.current_contract_address(), &to, &amount);
            Self::reenter(&e);
        }

        pub fn balance(e: Env, _owner: Address, asset: Address) -> i128 {
            TokenClient::new(&e, &asset).balance(&e.current_contract_address())
        }
    }

    impl ReentrantPool {
        fn reenter(e: &Env) {
            let vault = VaultClient::new(e, &get_address(e, "Vault"));
            vault.withdraw_all(&get_address(e, "Attacker"));
        }
    }
}

pub use idle::IdlePool;
pub use reentrant::ReentrantPool;
pub use reverting::RevertingPool;
pub use short_pay::ShortPayPool;
