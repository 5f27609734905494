//! Billing service: turns the crossing log into deductions or notices

use serde::Serialize;
use tracing::{info, warn};

use crate::application::crossing::{group_by_vehicle, is_well_ordered, EventLog};
use crate::application::ports::{AnomalyHandler, Settlement};
use crate::domain::{Charge, ChargePolicy, Vehicle};
use crate::support::errors::SettlementError;

/// What happened to one vehicle in a billing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Charge deducted from the vehicle's account
    Charged { amount: Charge },
    /// Settlement refused the charge; a penalty notice was issued instead
    PenaltyNotice { amount: Charge, reason: String },
    /// Crossings were out of order; handed to investigation, nothing charged
    Investigated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleOutcome {
    pub vehicle: Vehicle,
    #[serde(flatten)]
    pub kind: OutcomeKind,
}

/// Summary of a billing run, one outcome per vehicle, sorted by registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BillingReport {
    pub outcomes: Vec<VehicleOutcome>,
}

impl BillingReport {
    pub fn outcome_for(&self, vehicle: &Vehicle) -> Option<&OutcomeKind> {
        self.outcomes
            .iter()
            .find(|o| &o.vehicle == vehicle)
            .map(|o| &o.kind)
    }

    /// Sum of everything actually deducted
    pub fn total_charged(&self) -> Charge {
        self.outcomes
            .iter()
            .filter_map(|o| match o.kind {
                OutcomeKind::Charged { amount } => Some(amount),
                _ => None,
            })
            .sum()
    }

    pub fn investigations(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.kind == OutcomeKind::Investigated)
            .count()
    }

    pub fn penalty_notices(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.kind, OutcomeKind::PenaltyNotice { .. }))
            .count()
    }
}

/// Service for billing runs
pub struct BillingService {
    policy: ChargePolicy,
}

impl BillingService {
    pub fn new(policy: ChargePolicy) -> Self {
        Self { policy }
    }

    /// Bill every vehicle in `log`.
    ///
    /// Each vehicle gets exactly one collaborator call: `investigate` for an
    /// anomalous sequence, otherwise `deduct`, followed by
    /// `issue_penalty_notice` only when the deduction is refused. A failure
    /// for one vehicle never stops the others.
    pub fn run(
        &self,
        log: &EventLog,
        settlement: &dyn Settlement,
        anomalies: &dyn AnomalyHandler,
    ) -> BillingReport {
        let groups = group_by_vehicle(log.all_events());
        let mut outcomes = Vec::with_capacity(groups.len());

        for (vehicle, crossings) in groups {
            let kind = if !is_well_ordered(&crossings) {
                warn!(
                    registration = vehicle.registration(),
                    crossings = crossings.len(),
                    "Mismatched entries/exits, triggering investigation"
                );
                anomalies.investigate(&vehicle);
                OutcomeKind::Investigated
            } else {
                let amount = self.policy.calculate_charge(&crossings);
                self.settle(&vehicle, amount, settlement, anomalies)
            };
            outcomes.push(VehicleOutcome { vehicle, kind });
        }

        outcomes.sort_by(|a, b| a.vehicle.cmp(&b.vehicle));
        let report = BillingReport { outcomes };

        info!(
            vehicles = report.outcomes.len(),
            total_charged = %report.total_charged(),
            investigations = report.investigations(),
            penalty_notices = report.penalty_notices(),
            "Billing run completed"
        );

        report
    }

    fn settle(
        &self,
        vehicle: &Vehicle,
        amount: Charge,
        settlement: &dyn Settlement,
        anomalies: &dyn AnomalyHandler,
    ) -> OutcomeKind {
        match settlement.deduct(vehicle, amount) {
            Ok(()) => {
                info!(
                    registration = vehicle.registration(),
                    charge = %amount,
                    "Charge deducted"
                );
                OutcomeKind::Charged { amount }
            }
            Err(e) => {
                let reason = match &e {
                    SettlementError::InsufficientCredit { .. } => "insufficient_credit",
                    SettlementError::AccountNotRegistered(_) => "account_not_registered",
                };
                warn!(
                    registration = vehicle.registration(),
                    charge = %amount,
                    error = %e,
                    "Settlement refused, issuing penalty notice"
                );
                anomalies.issue_penalty_notice(vehicle, amount);
                OutcomeKind::PenaltyNotice {
                    amount,
                    reason: reason.to_string(),
                }
            }
        }
    }
}

impl Default for BillingService {
    fn default() -> Self {
        Self::new(ChargePolicy::default())
    }
}

// ── Tests ──────────────────────────────────────────────────────
