//! In-memory account registry

use dashmap::DashMap;
use rust_decimal::Decimal;
use tracing::debug;

use super::model::Account;
use crate::application::ports::Settlement;
use crate::domain::{Charge, Vehicle};
use crate::support::errors::SettlementError;

/// Registered customer accounts keyed by vehicle
#[derive(Debug, Default)]
pub struct InMemoryAccounts {
    accounts: DashMap<Vehicle, Account>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the account for `account.vehicle`.
    pub fn register(&self, account: Account) {
        debug!(
            registration = account.vehicle.registration(),
            owner = %account.owner,
            balance = %account.balance,
            "Account registered"
        );
        self.accounts.insert(account.vehicle.clone(), account);
    }

    pub fn balance_of(&self, vehicle: &Vehicle) -> Option<Decimal> {
        self.accounts.get(vehicle).map(|a| a.balance)
    }
}

impl FromIterator<Account> for InMemoryAccounts {
    fn from_iter<I: IntoIterator<Item = Account>>(iter: I) -> Self {
        let accounts = Self::new();
        for account in iter {
            accounts.register(account);
        }
        accounts
    }
}

impl Settlement for InMemoryAccounts {
    fn deduct(&self, vehicle: &Vehicle, amount: Charge) -> Result<(), SettlementError> {
        let mut account = self
            .accounts
            .get_mut(vehicle)
            .ok_or_else(|| SettlementError::AccountNotRegistered(vehicle.clone()))?;
        account.deduct(amount)
    }
}

// ── Tests ──────────────────────────────────────────────────────
