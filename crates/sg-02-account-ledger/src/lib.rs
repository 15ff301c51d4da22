//! # sg-02-account-ledger
//!
//! Account ledger subsystem for Signet Ledger.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: Authoritative balances of all accounts
//! - **Settlement**: The only place balances move, via [`LedgerTransaction`]
//! - **Fixed Account Set**: Accounts are provisioned at genesis; none are
//!   created or deleted afterwards
//!
//! ## Invariants
//!
//! - Balances never go below zero (debits that would are rejected)
//! - Every successful transfer conserves total supply
//! - The funds check is re-run inside the settlement critical section,
//!   so two concurrent transfers cannot both spend the same balance

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
