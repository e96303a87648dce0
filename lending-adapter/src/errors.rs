use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AdapterError {
    Unauthorized = 5040,
    InvalidAsset = 5041,
    InvalidAmount = 5042,
    InsufficientFunds = 5043,
    ArithmeticOverflow = 5044,
}
