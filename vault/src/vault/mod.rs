mod allocation;
mod guard;
mod ledger;
mod math;
mod registry;
mod roles;
mod shares;

pub use allocation::{execute_allocate, execute_deallocate, execute_harvest, execute_recognize_loss};
pub use guard::non_reentrant;
pub use ledger::{pool_held_balance, total_assets};
pub use registry::{execute_register, execute_toggle};
pub use roles::{execute_grant, execute_revoke, require_admin, require_agent};
pub use shares::{
    execute_deposit, execute_withdraw, execute_withdraw_all, max_withdraw, preview_assets,
    preview_shares,
};

pub(crate) use registry::{list as pool_list, load as load_pool};
pub(crate) use roles::execute_initialize as initialize_roles;
