//! # In-Memory Account Directory
//!
//! Process-lifetime ledger keyed by canonical account address.
//!
//! ## Locking
//!
//! - The account map is built once at genesis and never resized, so it
//!   needs no lock of its own.
//! - Each account sits behind its own `Mutex`. A transfer locks sender and
//!   recipient in ascending address order, which rules out lock-order
//!   deadlocks between opposing transfers.
//! - A settlement gate (`RwLock<()>`) is held shared by every transfer and
//!   exclusively by snapshot readers, so `list_accounts` and `total_supply`
//!   never see a transfer half applied.

use crate::domain::{
    Account, AccountSummary, GenesisAccount, LedgerError, LedgerTransaction, Settlement,
};
use crate::ports::LedgerApi;
use parking_lot::{Mutex, RwLock};
use shared_types::{format_address, Address};
use std::collections::HashMap;
use tracing::{debug, info};

/// Account directory with per-account locking.
pub struct AccountDirectory {
    accounts: HashMap<Address, Mutex<Account>>,
    /// Provisioning order, for listing.
    order: Vec<Address>,
    gate: RwLock<()>,
}

impl AccountDirectory {
    /// Provision the directory from a genesis account list.
    ///
    /// Rejects duplicate addresses and any genesis whose total supply does
    /// not fit in `u64`; the latter guarantees no credit can overflow while
    /// supply is conserved.
    pub fn from_genesis<I>(genesis: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = GenesisAccount>,
    {
        let mut accounts = HashMap::new();
        let mut order = Vec::new();
        let mut supply: u64 = 0;

        for entry in genesis {
            if accounts.contains_key(&entry.address) {
                return Err(LedgerError::DuplicateAccount {
                    address: entry.address,
                });
            }
            supply = supply
                .checked_add(entry.balance)
                .ok_or(LedgerError::SupplyOverflow)?;

            accounts.insert(
                entry.address,
                Mutex::new(Account::new(entry.address, entry.balance)),
            );
            order.push(entry.address);
        }

        info!(accounts = order.len(), supply, "Account directory provisioned");

        Ok(Self {
            accounts,
            order,
            gate: RwLock::new(()),
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Credit a single account outside of a transfer.
    ///
    /// Changes total supply. Transfers never go through here.
    pub fn credit(&self, address: &Address, amount: u64) -> Result<u64, LedgerError> {
        let cell = self.cell(address)?;
        let _gate = self.gate.read();
        cell.lock().credit(amount)
    }

    /// Debit a single account outside of a transfer.
    ///
    /// Fails with `InsufficientFunds` and leaves the balance untouched if
    /// the debit would overdraw.
    pub fn debit(&self, address: &Address, amount: u64) -> Result<u64, LedgerError> {
        let cell = self.cell(address)?;
        let _gate = self.gate.read();
        cell.lock().debit(amount)
    }

    fn cell(&self, address: &Address) -> Result<&Mutex<Account>, LedgerError> {
        self.accounts
            .get(address)
            .ok_or(LedgerError::AccountNotFound { address: *address })
    }
}

impl LedgerApi for AccountDirectory {
    fn resolve(&self, address: &Address) -> Option<Account> {
        self.accounts.get(address).map(|cell| cell.lock().clone())
    }

    fn balance_of(&self, address: &Address) -> Option<u64> {
        self.accounts.get(address).map(|cell| cell.lock().balance)
    }

    fn list_accounts(&self) -> Vec<AccountSummary> {
        let _gate = self.gate.write();
        self.order
            .iter()
            .filter_map(|address| self.accounts.get(address))
            .map(|cell| AccountSummary::from(&*cell.lock()))
            .collect()
    }

    fn total_supply(&self) -> u128 {
        let _gate = self.gate.write();
        self.accounts
            .values()
            .map(|cell| u128::from(cell.lock().balance))
            .sum()
    }

    fn transfer(&self, transaction: &LedgerTransaction) -> Result<Settlement, LedgerError> {
        if transaction.sender == transaction.recipient {
            return Err(LedgerError::SelfTransfer);
        }

        let sender_cell = self.cell(&transaction.sender)?;
        let recipient_cell = self.cell(&transaction.recipient)?;

        let _gate = self.gate.read();

        // Lock in address order; guards drop on every exit path.
        let (mut sender, mut recipient) = if transaction.sender < transaction.recipient {
            let sender = sender_cell.lock();
            let recipient = recipient_cell.lock();
            (sender, recipient)
        } else {
            let recipient = recipient_cell.lock();
            let sender = sender_cell.lock();
            (sender, recipient)
        };

        let settlement = transaction.apply(&mut sender, &mut recipient)?;

        debug!(
            sender = %format_address(&settlement.sender),
            recipient = %format_address(&settlement.recipient),
            amount = settlement.amount,
            sender_balance = settlement.sender_balance,
            "Transfer settled"
        );

        Ok(settlement)
    }
}
