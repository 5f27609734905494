//! Clock adapters

mod controllable;
mod system;

pub use controllable::ControllableClock;
pub use system::SystemClock;
