mod lending;
pub use lending::LendingClient;
