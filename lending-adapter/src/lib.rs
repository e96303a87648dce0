#![no_std]

mod contract;
mod errors;
mod storage;
pub mod testutils;

pub use contract::{LendingAdapter, LendingAdapterClient};
pub use errors::AdapterError;
