//! # Node Runtime Library
//!
//! This library exposes the internal modules of the node runtime for testing.
//! The main entry point is the `main.rs` binary.
//!
//! ## Architectural Patterns
//!
//! - **DDD (Domain-Driven Design)**: Each subsystem owns its domain logic
//! - **Hexagonal Architecture**: Ports define contracts, the container wires
//!   concrete adapters behind them
//! - **Thin Transport**: Handlers only decode and encode; every decision is
//!   made behind the `TransferApi` port

pub mod container;
pub mod genesis;
pub mod handlers;

pub use container::{load_config, NodeConfig, SubsystemContainer};
pub use genesis::{GenesisBuilder, GenesisConfig, GenesisError};
pub use handlers::TransferHandler;
