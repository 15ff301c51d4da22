//! # Subsystem Instances
//!
//! Initialization order:
//!
//! 1. Genesis account set (file or development keys)
//! 2. SG-02 account ledger
//! 3. SG-03 transfer authorizer, with the SG-01 recoverer inside

use std::sync::Arc;

use sg_02_account_ledger::{AccountDirectory, LedgerApi};
use sg_03_transfer_authorization::TransferAuthorizationService;
use tracing::info;

use super::config::NodeConfig;
use crate::genesis::{GenesisBuilder, GenesisError};

/// Concrete authorizer type served by the node.
pub type NodeTransferService = TransferAuthorizationService<AccountDirectory>;

/// Container for the node's subsystem instances.
pub struct SubsystemContainer {
    pub config: NodeConfig,
    pub ledger: Arc<AccountDirectory>,
    pub transfers: Arc<NodeTransferService>,
}

impl SubsystemContainer {
    /// Build genesis and wire the subsystems.
    pub fn new(config: NodeConfig) -> Result<Self, GenesisError> {
        let builder = match &config.genesis_path {
            Some(path) => {
                info!(path = %path.display(), "Loading genesis file");
                GenesisBuilder::from_file(path)?
            }
            None => {
                info!("Using development genesis");
                GenesisBuilder::dev()?
            }
        };

        let ledger = Arc::new(builder.build()?);
        info!(
            accounts = ledger.len(),
            total_supply = ledger.total_supply(),
            "[sg-02] Account ledger initialized"
        );

        let transfers = Arc::new(TransferAuthorizationService::new(
            Arc::clone(&ledger),
            config.authorizer.clone(),
        ));
        info!(
            replay_protection = %config.authorizer.replay_protection,
            "[sg-03] Transfer authorizer initialized"
        );

        Ok(Self {
            config,
            ledger,
            transfers,
        })
    }

    pub fn transfers(&self) -> Arc<NodeTransferService> {
        Arc::clone(&self.transfers)
    }
}
