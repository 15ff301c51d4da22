//! # Genesis Module
//!
//! Provisions the fixed account set the ledger starts with.
//!
//! ## Genesis Properties
//!
//! - Every account is known up front; none are created later
//! - No address appears twice
//! - Total supply fits in `u64`, so no credit can overflow while
//!   transfers conserve supply
//!
//! ## Sources
//!
//! 1. A JSON file: `[{ "address": "0x…", "balance": 100 }, …]`
//! 2. The development genesis: five wallets derived from fixed keys

pub mod builder;

pub use builder::{dev_wallets, GenesisBuilder, GenesisConfig, GenesisError, DEV_GENESIS};
