//! # Genesis Builder
//!
//! Creates and validates the genesis account set and builds the ledger
//! from it.

use std::collections::HashSet;
use std::path::Path;

use sg_01_signature_recovery::SignatureError;
use sg_02_account_ledger::{AccountDirectory, GenesisAccount, LedgerError};
use sg_03_transfer_authorization::Wallet;
use shared_types::{format_address, Address};
use thiserror::Error;
use tracing::info;

/// Genesis creation errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Genesis file could not be read.
    #[error("Failed to read genesis file: {0}")]
    Io(#[from] std::io::Error),

    /// Genesis file is not a valid account list.
    #[error("Malformed genesis file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A development key failed to load.
    #[error("Invalid genesis key: {0}")]
    InvalidKey(#[from] SignatureError),

    /// Invalid genesis configuration.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(String),

    /// Ledger refused the account set.
    #[error("Failed to initialize ledger: {0}")]
    Ledger(#[from] LedgerError),
}

/// Development private keys and starting balances.
///
/// These keys are public. They exist so a fresh node has funded accounts
/// to sign against; never use them outside development.
pub const DEV_GENESIS: [(&str, u64); 5] = [
    ("11e44159a41ec9f208e084379e763fb1c3c889f617b3d5ff481e46ac6f0308da", 100),
    ("42ddb45bcf40ec11ae3b9c8b5bbf93768f099e2ee341783e4468368023e93124", 50),
    ("2af989db1de25988b1aba8a3be2512a78cfb73e7b4aaef9237a52738ce19bc49", 25),
    ("cf88b28b3a1d9785974fb1d5e7a63f7473c5817399ee17ec8995e51c550ffc4e", 70),
    ("770f2bf3877e8d3bb75cd7d0d407e1e333d893a41f94080616c153ffb32f3ee6", 0),
];

/// The development wallets with their starting balances, in genesis order.
pub fn dev_wallets() -> Result<Vec<(Wallet, u64)>, GenesisError> {
    DEV_GENESIS
        .iter()
        .map(|(secret, balance)| Ok((Wallet::from_hex(secret)?, *balance)))
        .collect()
}

/// Genesis account set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenesisConfig {
    pub accounts: Vec<GenesisAccount>,
}

impl GenesisConfig {
    /// Development genesis. Addresses are derived from the keys.
    pub fn dev() -> Result<Self, GenesisError> {
        let accounts = dev_wallets()?
            .into_iter()
            .map(|(wallet, balance)| GenesisAccount {
                address: wallet.address(),
                balance,
            })
            .collect();
        Ok(Self { accounts })
    }

    /// Parse a JSON account list.
    pub fn from_json(json: &str) -> Result<Self, GenesisError> {
        let accounts: Vec<GenesisAccount> = serde_json::from_str(json)?;
        Ok(Self { accounts })
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.accounts.is_empty() {
            return Err(GenesisError::InvalidConfig(
                "Genesis must provision at least one account".to_string(),
            ));
        }

        let mut seen: HashSet<Address> = HashSet::with_capacity(self.accounts.len());
        let mut supply: u64 = 0;
        for account in &self.accounts {
            if !seen.insert(account.address) {
                return Err(GenesisError::InvalidConfig(format!(
                    "Duplicate account {}",
                    format_address(&account.address)
                )));
            }

            supply = supply.checked_add(account.balance).ok_or_else(|| {
                GenesisError::InvalidConfig("Total supply exceeds u64".to_string())
            })?;
        }

        Ok(())
    }
}

/// Builder for the genesis ledger.
pub struct GenesisBuilder {
    config: GenesisConfig,
}

impl GenesisBuilder {
    /// Create a new genesis builder with configuration.
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Builder over the development genesis.
    pub fn dev() -> Result<Self, GenesisError> {
        Ok(Self::new(GenesisConfig::dev()?))
    }

    /// Builder over a JSON genesis file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GenesisError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Ok(Self::new(GenesisConfig::from_json(&json)?))
    }

    pub fn config(&self) -> &GenesisConfig {
        &self.config
    }

    /// Validate and build the ledger.
    pub fn build(self) -> Result<AccountDirectory, GenesisError> {
        self.config.validate()?;

        let directory = AccountDirectory::from_genesis(self.config.accounts)?;
        info!(accounts = directory.len(), "Genesis ledger built");
        Ok(directory)
    }
}
