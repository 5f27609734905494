//! Domain ports
//!
//! - **clock**: [`Clock`] — the time source used when recording crossings

pub mod clock;

pub use clock::Clock;
