//! Customer accounts — the settlement adapter

mod memory;
mod model;

pub use memory::InMemoryAccounts;
pub use model::Account;
