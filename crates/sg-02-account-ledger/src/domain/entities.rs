//! # Domain Entities for the Account Ledger
//!
//! ## Type Decisions
//!
//! - `balance: u64` - Indivisible units. Unsigned, so "non-negative" is a
//!   type property; the invariant that matters is that debits never wrap.
//! - `nonce: u64` - Count of settled outgoing transfers. Only enforced when
//!   a transfer carries an expected nonce.

use crate::domain::errors::LedgerError;
use serde::{Deserialize, Serialize};
use shared_types::{serde_address, Address};

/// Mutable state of one account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Canonical account key.
    #[serde(with = "serde_address")]
    pub address: Address,
    /// Balance in indivisible units.
    pub balance: u64,
    /// Settled outgoing transfers.
    pub nonce: u64,
}

impl Account {
    pub fn new(address: Address, balance: u64) -> Self {
        Self {
            address,
            balance,
            nonce: 0,
        }
    }

    /// Add `amount` to the balance, returning the new balance.
    pub fn credit(&mut self, amount: u64) -> Result<u64, LedgerError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow {
                address: self.address,
            })?;
        Ok(self.balance)
    }

    /// Remove `amount` from the balance, returning the new balance.
    ///
    /// This is the only way a balance can fail to change: if it would drop
    /// below zero the account is left untouched.
    pub fn debit(&mut self, amount: u64) -> Result<u64, LedgerError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientFunds {
                required: amount,
                available: self.balance,
            })?;
        Ok(self.balance)
    }
}

/// Public accounting view of an account. Never carries key material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    #[serde(with = "serde_address")]
    pub public_key: Address,
    pub balance: u64,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            public_key: account.address,
            balance: account.balance,
        }
    }
}

/// Account provisioned at startup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisAccount {
    #[serde(with = "serde_address")]
    pub address: Address,
    pub balance: u64,
}

/// Outcome of a settled transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub sender: Address,
    pub recipient: Address,
    pub amount: u64,
    pub sender_balance: u64,
    pub recipient_balance: u64,
    /// Sender nonce after settlement.
    pub sender_nonce: u64,
}
