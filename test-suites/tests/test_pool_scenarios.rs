use pool_vault::VaultError;
use soroban_sdk::Error;
use test_suites::setup::{create_fixture_with_data, USER_BALANCE};
use test_suites::test_fixture::TestFixture;
use test_suites::SCALAR_7;

fn setup_fixture() -> TestFixture<'static> {
    create_fixture_with_data()
}

fn contract_error(err: VaultError) -> Error {
    Error::from_contract_error(err as u32)
}

// ========== LIFECYCLE ==========

#[test]
fn test_allocate_across_pools_and_exit() {
    let fixture = setup_fixture();
    let user = fixture.users[0].clone();

    fixture.vault.allocate(&fixture.agent, fixture.pool(0), &(4_000 * SCALAR_7));
    fixture.vault.allocate(&fixture.agent, fixture.pool(1), &(3_000 * SCALAR_7));
    fixture.assert_conserved();

    assert_eq!(fixture.vault.pool_held_balance(), 3_000 * SCALAR_7);
    assert_eq!(fixture.vault.total_assets(), 10_000 * SCALAR_7);
    assert_eq!(fixture.adapters[0].principal(), 4_000 * SCALAR_7);
    assert_eq!(fixture.adapters[1].principal(), 3_000 * SCALAR_7);

    // only the held portion is liquid
    assert_eq!(fixture.vault.max_withdraw(&user), 3_000 * SCALAR_7);

    fixture.vault.deallocate(&fixture.agent, fixture.pool(0), &(4_000 * SCALAR_7));
    fixture.vault.deallocate(&fixture.agent, fixture.pool(1), &(3_000 * SCALAR_7));
    fixture.assert_conserved();

    assert_eq!(fixture.vault.withdraw_all(&user), 10_000 * SCALAR_7);
    assert_eq!(fixture.token.balance(&user), USER_BALANCE);
    assert_eq!(fixture.vault.total_shares(), 0);
    fixture.assert_conserved();
}

#[test]
fn test_yield_is_shared_pro_rata() {
    let fixture = setup_fixture();
    let alice = fixture.users[0].clone();
    let bob = fixture.users[1].clone();

    // bob joins at par, owning a third
    fixture.vault.deposit(&bob, &(5_000 * SCALAR_7));
    fixture.vault.allocate(&fixture.agent, fixture.pool(0), &(15_000 * SCALAR_7));

    fixture.accrue(0, 1_500 * SCALAR_7);
    // accrued but unharvested yield is not counted
    assert_eq!(fixture.vault.total_assets(), 15_000 * SCALAR_7);

    assert_eq!(fixture.vault.harvest(&fixture.agent, fixture.pool(0)), 1_500 * SCALAR_7);
    fixture.assert_conserved();

    assert_eq!(fixture.vault.max_withdraw(&alice), 1_500 * SCALAR_7);
    fixture.vault.deallocate(&fixture.agent, fixture.pool(0), &(15_000 * SCALAR_7));

    assert_eq!(fixture.vault.withdraw_all(&alice), 11_000 * SCALAR_7);
    assert_eq!(fixture.vault.withdraw_all(&bob), 5_500 * SCALAR_7);
    assert_eq!(fixture.vault.total_assets(), 0);
    fixture.assert_conserved();
}

#[test]
fn test_late_depositor_does_not_capture_prior_yield() {
    let fixture = setup_fixture();
    let alice = fixture.users[0].clone();
    let carol = fixture.users[2].clone();

    fixture.vault.allocate(&fixture.agent, fixture.pool(1), &(10_000 * SCALAR_7));
    fixture.accrue(1, 10_000 * SCALAR_7);
    fixture.vault.harvest(&fixture.agent, fixture.pool(1));

    // share price is now 2
    let carol_shares = fixture.vault.deposit(&carol, &(10_000 * SCALAR_7));
    assert_eq!(carol_shares, 5_000 * SCALAR_7);

    fixture.vault.deallocate(&fixture.agent, fixture.pool(1), &(10_000 * SCALAR_7));
    assert_eq!(fixture.vault.withdraw_all(&carol), 10_000 * SCALAR_7);
    assert_eq!(fixture.vault.withdraw_all(&alice), 20_000 * SCALAR_7);
    fixture.assert_conserved();
}

#[test]
fn test_loss_is_shared_pro_rata() {
    let fixture = setup_fixture();
    let alice = fixture.users[0].clone();
    let bob = fixture.users[1].clone();

    fixture.vault.deposit(&bob, &(10_000 * SCALAR_7));
    fixture.vault.allocate(&fixture.agent, fixture.pool(0), &(8_000 * SCALAR_7));

    assert_eq!(fixture.drain(0, 2_000 * SCALAR_7), 2_000 * SCALAR_7);
    // unrecognized losses still count at book value
    assert_eq!(fixture.vault.total_assets(), 20_000 * SCALAR_7);

    assert_eq!(fixture.vault.recognize_loss(&fixture.agent, fixture.pool(0)), 2_000 * SCALAR_7);
    assert_eq!(fixture.vault.total_assets(), 18_000 * SCALAR_7);
    assert_eq!(fixture.vault.get_pool_balance(fixture.pool(0)), 6_000 * SCALAR_7);
    fixture.assert_conserved();

    fixture.vault.deallocate(&fixture.agent, fixture.pool(0), &(6_000 * SCALAR_7));
    assert_eq!(fixture.vault.withdraw_all(&alice), 9_000 * SCALAR_7);
    assert_eq!(fixture.vault.withdraw_all(&bob), 9_000 * SCALAR_7);
    fixture.assert_conserved();
}

#[test]
fn test_total_loss_then_recovery() {
    let fixture = setup_fixture();
    let alice = fixture.users[0].clone();
    let bob = fixture.users[1].clone();

    fixture.vault.allocate(&fixture.agent, fixture.pool(0), &(10_000 * SCALAR_7));
    fixture.drain(0, 10_000 * SCALAR_7);
    fixture.vault.recognize_loss(&fixture.agent, fixture.pool(0));

    assert_eq!(fixture.vault.total_assets(), 0);
    assert_eq!(fixture.vault.convert_to_assets(&(10_000 * SCALAR_7)), 0);

    // shares backed by nothing cannot be priced against
    let result = fixture.vault.try_deposit(&bob, &(1_000 * SCALAR_7));
    assert_eq!(result, Err(Ok(contract_error(VaultError::ArithmeticOverflow))));

    // worthless shares are burned for nothing
    assert_eq!(fixture.vault.withdraw_all(&alice), 0);
    assert_eq!(fixture.vault.shares_of(&alice), 0);
    assert_eq!(fixture.vault.total_shares(), 0);
    assert_eq!(fixture.token.balance(&alice), USER_BALANCE - 10_000 * SCALAR_7);

    // with the supply drained the vault reopens at parity
    assert_eq!(fixture.vault.deposit(&bob, &(1_000 * SCALAR_7)), 1_000 * SCALAR_7);
    assert_eq!(fixture.vault.withdraw_all(&bob), 1_000 * SCALAR_7);
    fixture.assert_conserved();
}

#[test]
fn test_every_holder_exits_after_write_off() {
    let fixture = setup_fixture();
    let alice = fixture.users[0].clone();
    let bob = fixture.users[1].clone();

    fixture.vault.deposit(&bob, &(10_000 * SCALAR_7));
    fixture.vault.allocate(&fixture.agent, fixture.pool(0), &(20_000 * SCALAR_7));
    fixture.drain(0, 20_000 * SCALAR_7);
    fixture.vault.recognize_loss(&fixture.agent, fixture.pool(0));

    // the vault stays closed until the last worthless share is gone
    assert_eq!(fixture.vault.withdraw_all(&alice), 0);
    let result = fixture.vault.try_deposit(&alice, &SCALAR_7);
    assert_eq!(result, Err(Ok(contract_error(VaultError::ArithmeticOverflow))));
    assert_eq!(fixture.vault.withdraw_all(&bob), 0);

    assert_eq!(fixture.vault.total_shares(), 0);
    assert_eq!(fixture.vault.deposit(&alice, &SCALAR_7), SCALAR_7);
    fixture.assert_conserved();
}

// ========== POOL MANAGEMENT ==========

#[test]
fn test_retire_pool() {
    let mut fixture = setup_fixture();

    fixture.vault.allocate(&fixture.agent, fixture.pool(0), &(5_000 * SCALAR_7));
    fixture.vault.toggle_pool(&fixture.admin, fixture.pool(0), &false);

    // funds move out of the retired pool into a replacement
    fixture.add_adapter_pool("UNISWAP");
    fixture.vault.deallocate(&fixture.agent, fixture.pool(0), &(5_000 * SCALAR_7));
    fixture.vault.allocate(&fixture.agent, fixture.pool(2), &(5_000 * SCALAR_7));

    assert_eq!(fixture.vault.get_pool_balance(fixture.pool(0)), 0);
    assert_eq!(fixture.vault.get_pool_balance(fixture.pool(2)), 5_000 * SCALAR_7);
    assert_eq!(fixture.vault.get_pool_list().len(), 3);
    let result = fixture.vault.try_allocate(&fixture.agent, fixture.pool(0), &1);
    assert_eq!(result, Err(Ok(contract_error(VaultError::NotFound))));
    fixture.assert_conserved();
}

#[test]
fn test_delegated_agent_rotation() {
    let fixture = setup_fixture();
    let new_agent = fixture.users[2].clone();

    fixture.vault.set_agent(&fixture.admin, &new_agent);
    fixture.vault.revoke_role(&fixture.admin, &pool_vault::Role::Agent, &fixture.agent);

    let result = fixture.vault.try_allocate(&fixture.agent, fixture.pool(0), &SCALAR_7);
    assert_eq!(result, Err(Ok(contract_error(VaultError::Unauthorized))));
    fixture.vault.allocate(&new_agent, fixture.pool(0), &SCALAR_7);
    assert_eq!(fixture.vault.total_allocated(), SCALAR_7);
    fixture.assert_conserved();
}
