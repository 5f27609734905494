//! Infrastructure layer - adapters for the clock and billing collaborators

pub mod accounts;
pub mod clock;
pub mod operations;

pub use accounts::{Account, InMemoryAccounts};
pub use clock::{ControllableClock, SystemClock};
pub use operations::{Notice, OperationsTeam};
