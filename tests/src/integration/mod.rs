//! # Integration Tests
//!
//! Scenarios that run SG-01, SG-02 and SG-03 together through their public
//! APIs only.

#[cfg(test)]
mod adversarial;
#[cfg(test)]
mod concurrency;

/// Shared fixtures for integration scenarios.
#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::Arc;

    use sg_02_account_ledger::{AccountDirectory, GenesisAccount};
    use sg_03_transfer_authorization::{AuthorizerConfig, TransferAuthorizationService, Wallet};

    pub type Service = TransferAuthorizationService<AccountDirectory>;

    /// Fresh wallets funded with `balances`, in order.
    pub fn network(balances: &[u64], config: AuthorizerConfig) -> (Arc<Service>, Vec<Wallet>) {
        let wallets: Vec<Wallet> = balances.iter().map(|_| Wallet::generate()).collect();
        let genesis = wallets
            .iter()
            .zip(balances)
            .map(|(wallet, balance)| GenesisAccount {
                address: wallet.address(),
                balance: *balance,
            });
        let ledger = Arc::new(AccountDirectory::from_genesis(genesis).unwrap());
        let service = Arc::new(TransferAuthorizationService::new(ledger, config));
        (service, wallets)
    }
}
