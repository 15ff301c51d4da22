//! # Subsystem Container
//!
//! Central container holding the subsystem instances with their lifetime
//! management and dependency injection.
//!
//! ## Wiring
//!
//! - SG-02 ledger is built once from genesis and shared by `Arc`
//! - SG-03 authorizer owns the SG-01 recoverer and borrows the ledger

pub mod config;
pub mod subsystems;

pub use config::{load_config, load_config_from, NodeConfig};
pub use subsystems::SubsystemContainer;
