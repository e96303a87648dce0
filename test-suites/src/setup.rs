use crate::test_fixture::TestFixture;
use crate::SCALAR_7;

pub const USER_BALANCE: i128 = 100_000 * SCALAR_7;

/// Vault with three funded users, two lending adapter pools ("AAVE" then
/// "BLEND"), and a 10,000 deposit from the first user
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let mut fixture = TestFixture::create();

    fixture.add_users(3, USER_BALANCE);
    fixture.add_adapter_pool("AAVE");
    fixture.add_adapter_pool("BLEND");

    fixture.vault.deposit(&fixture.users[0], &(10_000 * SCALAR_7));

    fixture
}
