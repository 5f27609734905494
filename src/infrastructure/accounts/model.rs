//! Customer account with prepaid credit

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Charge, Vehicle};
use crate::support::errors::SettlementError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub owner: String,
    pub vehicle: Vehicle,
    pub balance: Decimal,
}

impl Account {
    pub fn new(owner: impl Into<String>, vehicle: Vehicle, balance: Decimal) -> Self {
        Self {
            owner: owner.into(),
            vehicle,
            balance,
        }
    }

    /// Take `amount` off the balance, or fail without touching it.
    pub fn deduct(&mut self, amount: Charge) -> Result<(), SettlementError> {
        if self.balance < amount {
            return Err(SettlementError::InsufficientCredit {
                required: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}
