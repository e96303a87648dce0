use soroban_sdk::{unwrap::UnwrapOptimized, Address, Env, Symbol};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const VAULT_KEY: &str = "Vault";
const ASSET_KEY: &str = "Asset";
const PRINCIPAL_KEY: &str = "Principal";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_vault(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, VAULT_KEY))
        .unwrap_optimized()
}

pub fn set_vault(e: &Env, vault: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, VAULT_KEY), vault);
}

pub fn get_asset(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ASSET_KEY))
        .unwrap_optimized()
}

pub fn set_asset(e: &Env, asset: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ASSET_KEY), asset);
}

/// Net amount the vault has deposited and not yet withdrawn
pub fn get_principal(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, PRINCIPAL_KEY))
        .unwrap_or(0)
}

pub fn set_principal(e: &Env, principal: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, PRINCIPAL_KEY), principal);
}
