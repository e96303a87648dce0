use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Authorization errors
    Unauthorized = 4040,
    LastAdministrator = 4041,

    // Argument validation errors
    InvalidArgument = 4042,
    ArithmeticOverflow = 4043,
    ZeroShares = 4044,

    // Registry errors
    NotFound = 4045,
    AlreadyExists = 4046,

    // Balance errors
    InsufficientLiquidity = 4047,
    InsufficientBalance = 4048,
    InsufficientShares = 4049,

    // Execution errors
    Reentrant = 4050,
    ExternalCallFailed = 4051,
    LedgerMismatch = 4052,
}
