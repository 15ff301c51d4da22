use crate::domain::{Account, AccountSummary, LedgerError, LedgerTransaction, Settlement};
use shared_types::Address;

/// Primary API for ledger operations.
///
/// Reads never block settlement of unrelated accounts. `transfer` is the only
/// operation that moves value and is atomic with respect to every other call.
pub trait LedgerApi: Send + Sync {
    // === Reads ===

    /// Exact-match lookup on the canonical account key.
    fn resolve(&self, address: &Address) -> Option<Account>;

    fn balance_of(&self, address: &Address) -> Option<u64>;

    /// All accounts in provisioning order, from a consistent snapshot.
    fn list_accounts(&self) -> Vec<AccountSummary>;

    /// Sum of all balances, from a consistent snapshot.
    fn total_supply(&self) -> u128;

    // === Settlement ===

    /// Execute a transfer as one indivisible unit.
    ///
    /// The funds and nonce checks run inside the critical section against
    /// the balances current at that moment.
    fn transfer(&self, transaction: &LedgerTransaction) -> Result<Settlement, LedgerError>;
}
