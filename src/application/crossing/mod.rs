//! Crossing log and per-vehicle classification

pub mod classifier;
pub mod event_log;

pub use classifier::{group_by_vehicle, is_well_ordered};
pub use event_log::EventLog;
