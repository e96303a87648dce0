use lending_adapter::testutils::create_adapter;
use lending_adapter::LendingAdapterClient;
use pool_vault::testutils::{create_asset, create_vault, generate_users, pool_name};
use pool_vault::VaultClient;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, String};

/// Observable vault state, compared before and after failed calls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VaultSnapshot {
    pub total_assets: i128,
    pub total_shares: i128,
    pub total_allocated: i128,
    pub held: i128,
    pub pool_balances: Vec<i128>,
    pub destination_balances: Vec<i128>,
    pub user_shares: Vec<i128>,
    pub user_balances: Vec<i128>,
}

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub agent: Address,
    pub users: Vec<Address>,
    pub asset: StellarAssetClient<'a>,
    pub token: TokenClient<'a>,
    pub vault: VaultClient<'a>,
    pub pools: Vec<String>,
    pub adapters: Vec<LendingAdapterClient<'a>>,
}

impl TestFixture<'_> {
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();

        let admin = Address::generate(&e);
        let agent = Address::generate(&e);

        let (asset_id, asset_client) = create_asset(&e, &admin);
        let token_client = TokenClient::new(&e, &asset_id);

        let vault_client = create_vault(&e, &admin, &asset_id);
        vault_client.set_agent(&admin, &agent);

        TestFixture {
            env: e,
            admin,
            agent,
            users: vec![],
            asset: asset_client,
            token: token_client,
            vault: vault_client,
            pools: vec![],
            adapters: vec![],
        }
    }

    /// Create `count` users each funded with `balance` of the underlying
    pub fn add_users(&mut self, count: u32, balance: i128) {
        for user in generate_users(&self.env, count).iter() {
            self.asset.mint(&user, &balance);
            self.users.push(user);
        }
    }

    /// Deploy a lending adapter for the vault and register it as `name`
    pub fn add_adapter_pool(&mut self, name: &str) {
        let adapter = create_adapter(&self.env, &self.vault.address, &self.asset.address);
        self.add_pool(name, &adapter.address);
        self.adapters.push(adapter);
    }

    /// Register an arbitrary destination as `name`
    pub fn add_pool(&mut self, name: &str, destination: &Address) {
        let name = pool_name(&self.env, name);
        self.vault.register_pool(&self.admin, &name, destination);
        self.pools.push(name);
    }

    pub fn pool(&self, index: usize) -> &String {
        &self.pools[index]
    }

    pub fn destination(&self, index: usize) -> Address {
        self.vault.get_pool(&self.pools[index]).destination
    }

    /// Pay `amount` of yield straight into a pool's destination
    pub fn accrue(&self, index: usize, amount: i128) {
        self.asset.mint(&self.destination(index), &amount);
    }

    /// Move up to `amount` out of a pool's destination, as a bad loan would.
    /// Returns the amount actually lost.
    pub fn drain(&self, index: usize, amount: i128) -> i128 {
        let destination = self.destination(index);
        let lost = amount.min(self.token.balance(&destination));
        if lost > 0 {
            let sink = Address::generate(&self.env);
            self.env.as_contract(&destination, || {
                self.token.transfer(&destination, &sink, &lost);
            });
        }
        lost
    }

    pub fn snapshot(&self) -> VaultSnapshot {
        VaultSnapshot {
            total_assets: self.vault.total_assets(),
            total_shares: self.vault.total_shares(),
            total_allocated: self.vault.total_allocated(),
            held: self.vault.pool_held_balance(),
            pool_balances: self
                .pools
                .iter()
                .map(|name| self.vault.get_pool_balance(name))
                .collect(),
            destination_balances: (0..self.pools.len())
                .map(|index| self.token.balance(&self.destination(index)))
                .collect(),
            user_shares: self.users.iter().map(|user| self.vault.shares_of(user)).collect(),
            user_balances: self.users.iter().map(|user| self.token.balance(user)).collect(),
        }
    }

    /// Assert the accounting identities that must hold after every call
    pub fn assert_conserved(&self) {
        let held = self.token.balance(&self.vault.address);
        assert_eq!(self.vault.pool_held_balance(), held);
        assert_eq!(self.vault.total_assets(), held + self.vault.total_allocated());

        let allocated: i128 = self
            .pools
            .iter()
            .map(|name| self.vault.get_pool_balance(name))
            .sum();
        assert_eq!(allocated, self.vault.total_allocated());

        let shares: i128 = self.users.iter().map(|user| self.vault.shares_of(user)).sum();
        assert_eq!(shares, self.vault.total_shares());
    }

    pub fn is_locked(&self) -> bool {
        self.env
            .as_contract(&self.vault.address, || pool_vault::storage::is_locked(&self.env))
    }
}
