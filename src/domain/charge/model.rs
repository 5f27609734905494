//! Charge policy and free-return-window calculation

use chrono::{Duration, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::CrossingEvent;
use crate::support::errors::DomainError;

/// Monetary charge in whole currency units
pub type Charge = Decimal;

/// Rate band applied to a single exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// Billable visit that started before the cutoff hour
    Peak,
    /// Billable visit that started at or after the cutoff hour
    OffPeak,
    /// Exit at or after the free-return deadline
    Overstay,
    /// Exit closing a free re-entry inside the window
    FreeReturn,
}

impl std::fmt::Display for RateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Peak => write!(f, "Peak"),
            Self::OffPeak => write!(f, "OffPeak"),
            Self::Overstay => write!(f, "Overstay"),
            Self::FreeReturn => write!(f, "FreeReturn"),
        }
    }
}

/// Rate policy for zone visits.
///
/// The algorithm is fixed; only its constants vary between policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargePolicy {
    /// How long after a billable entry the vehicle may come back for free
    pub free_window: Duration,
    /// Entries strictly before this hour of day are charged `peak_rate`
    pub peak_cutoff_hour: u32,
    pub peak_rate: Charge,
    pub off_peak_rate: Charge,
    /// Flat charge for an exit at or after the window deadline
    pub overstay_rate: Charge,
}

impl Default for ChargePolicy {
    fn default() -> Self {
        Self {
            free_window: Duration::hours(4),
            peak_cutoff_hour: 14,
            peak_rate: Decimal::from(6),
            off_peak_rate: Decimal::from(4),
            overstay_rate: Decimal::from(12),
        }
    }
}

impl ChargePolicy {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.free_window <= Duration::zero() {
            return Err(DomainError::Validation(
                "free-return window must be positive".to_string(),
            ));
        }
        if self.peak_cutoff_hour > 23 {
            return Err(DomainError::Validation(format!(
                "peak cutoff hour {} is not an hour of day",
                self.peak_cutoff_hour
            )));
        }
        for (name, rate) in [
            ("peak_rate", self.peak_rate),
            ("off_peak_rate", self.off_peak_rate),
            ("overstay_rate", self.overstay_rate),
        ] {
            if rate.is_sign_negative() {
                return Err(DomainError::Validation(format!(
                    "{name} must not be negative"
                )));
            }
        }
        Ok(())
    }

    /// Total charge for one vehicle's well-ordered crossings.
    pub fn calculate_charge(&self, crossings: &[CrossingEvent]) -> Charge {
        self.calculate_breakdown(crossings).total
    }

    /// Walk the crossings once, producing one line per exit.
    ///
    /// The caller is expected to have checked the sequence with
    /// [`is_well_ordered`](crate::application::is_well_ordered); the result
    /// is meaningless for anomalous sequences.
    pub fn calculate_breakdown(&self, crossings: &[CrossingEvent]) -> ChargeBreakdown {
        let mut lines = Vec::new();
        let mut window_deadline = NaiveDateTime::MIN;
        let mut free_return_active = false;
        let mut current_entry: Option<NaiveDateTime> = None;

        for crossing in crossings {
            match crossing {
                CrossingEvent::Entry { timestamp, .. } => {
                    if *timestamp >= window_deadline {
                        free_return_active = false;
                    }
                    if !free_return_active {
                        window_deadline = timestamp
                            .checked_add_signed(self.free_window)
                            .unwrap_or(NaiveDateTime::MAX);
                    }
                    current_entry = Some(*timestamp);
                }
                CrossingEvent::Exit { timestamp, .. } => {
                    let band = if *timestamp < window_deadline && !free_return_active {
                        free_return_active = true;
                        match current_entry {
                            Some(entry) if entry.hour() < self.peak_cutoff_hour => RateBand::Peak,
                            _ => RateBand::OffPeak,
                        }
                    } else if *timestamp >= window_deadline {
                        RateBand::Overstay
                    } else {
                        RateBand::FreeReturn
                    };

                    lines.push(ChargeLine {
                        entered_at: current_entry,
                        exited_at: *timestamp,
                        band,
                        amount: self.rate_for(band),
                    });
                }
            }
        }

        let total = lines.iter().map(|l| l.amount).sum();
        ChargeBreakdown { lines, total }
    }

    fn rate_for(&self, band: RateBand) -> Charge {
        match band {
            RateBand::Peak => self.peak_rate,
            RateBand::OffPeak => self.off_peak_rate,
            RateBand::Overstay => self.overstay_rate,
            RateBand::FreeReturn => Decimal::ZERO,
        }
    }
}

/// A single exit's contribution to the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeLine {
    pub entered_at: Option<NaiveDateTime>,
    pub exited_at: NaiveDateTime,
    pub band: RateBand,
    pub amount: Charge,
}

/// Charge breakdown for one vehicle in one billing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeBreakdown {
    pub lines: Vec<ChargeLine>,
    pub total: Charge,
}

// ── Tests ──────────────────────────────────────────────────────
