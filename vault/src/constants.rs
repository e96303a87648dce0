// Pool registry
pub const MAX_POOL_NAME_LEN: u32 = 32; // bytes
