//! Crossing aggregate
//!
//! Entry and exit events recorded at the zone boundary.

pub mod model;

pub use model::{CrossingEvent, CrossingKind};
