//! # Ledger Transaction
//!
//! The debit-then-credit unit applied during settlement.
//!
//! [`LedgerTransaction::apply`] works on two accounts the caller has already
//! locked. Both new balances are computed before either account is written,
//! so a failure at any point leaves both accounts exactly as they were.

use crate::domain::entities::{Account, Settlement};
use crate::domain::errors::LedgerError;
use shared_types::Address;

/// A transfer of `amount` from `sender` to `recipient`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerTransaction {
    pub sender: Address,
    pub recipient: Address,
    pub amount: u64,
    /// When set, the sender's nonce must equal this value.
    pub expected_nonce: Option<u64>,
}

impl LedgerTransaction {
    pub fn new(sender: Address, recipient: Address, amount: u64) -> Self {
        Self {
            sender,
            recipient,
            amount,
            expected_nonce: None,
        }
    }

    pub fn with_expected_nonce(mut self, nonce: Option<u64>) -> Self {
        self.expected_nonce = nonce;
        self
    }

    /// Apply the transfer to the two locked accounts.
    ///
    /// Checks, in order: account identities, sender nonce, sender funds,
    /// recipient headroom. Mutates only after all checks pass.
    pub fn apply(
        &self,
        sender: &mut Account,
        recipient: &mut Account,
    ) -> Result<Settlement, LedgerError> {
        if self.sender == self.recipient {
            return Err(LedgerError::SelfTransfer);
        }
        if sender.address != self.sender {
            return Err(LedgerError::AccountNotFound {
                address: self.sender,
            });
        }
        if recipient.address != self.recipient {
            return Err(LedgerError::AccountNotFound {
                address: self.recipient,
            });
        }

        if let Some(expected) = self.expected_nonce {
            if sender.nonce != expected {
                return Err(LedgerError::InvalidNonce {
                    expected: sender.nonce,
                    actual: expected,
                });
            }
        }

        let sender_balance =
            sender
                .balance
                .checked_sub(self.amount)
                .ok_or(LedgerError::InsufficientFunds {
                    required: self.amount,
                    available: sender.balance,
                })?;
        let recipient_balance =
            recipient
                .balance
                .checked_add(self.amount)
                .ok_or(LedgerError::BalanceOverflow {
                    address: recipient.address,
                })?;

        sender.balance = sender_balance;
        sender.nonce = sender.nonce.wrapping_add(1);
        recipient.balance = recipient_balance;

        Ok(Settlement {
            sender: self.sender,
            recipient: self.recipient,
            amount: self.amount,
            sender_balance,
            recipient_balance,
            sender_nonce: sender.nonce,
        })
    }
}
