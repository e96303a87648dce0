pub mod mocks;
pub mod setup;
pub mod test_fixture;

pub const SCALAR_7: i128 = 10_000_000;
