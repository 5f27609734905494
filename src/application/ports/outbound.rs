//! Outbound ports — collaborators the billing run hands its results to
//!
//! [`Settlement`] takes money from the account behind a vehicle;
//! [`AnomalyHandler`] receives everything that could not be settled
//! normally. Both are passed into
//! [`BillingService::run`](crate::application::services::BillingService::run)
//! explicitly, so tests can substitute recording doubles.

use crate::domain::{Charge, Vehicle};
use crate::support::errors::SettlementError;

// ── Settlement ─────────────────────────────────────────────────

/// Port for deducting a computed charge from a vehicle's account.
pub trait Settlement: Send + Sync {
    /// Deduct `amount` from the account registered for `vehicle`.
    ///
    /// `Ok(())` means the charge was taken in full. On error nothing
    /// was deducted.
    fn deduct(&self, vehicle: &Vehicle, amount: Charge) -> Result<(), SettlementError>;
}

// ── AnomalyHandler ─────────────────────────────────────────────

/// Port for the team that chases vehicles the engine could not bill.
///
/// Both calls are fire-and-forget.
pub trait AnomalyHandler: Send + Sync {
    /// The vehicle's crossings do not alternate or go back in time.
    fn investigate(&self, vehicle: &Vehicle);

    /// A charge was computed but settlement refused it.
    fn issue_penalty_notice(&self, vehicle: &Vehicle, amount: Charge);
}
