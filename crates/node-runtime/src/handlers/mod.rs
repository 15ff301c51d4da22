//! # Request Handlers
//!
//! Transport-facing adapters that translate wire requests into calls on the
//! subsystem inbound ports.

pub mod transfer;

pub use transfer::{TransferHandler, WireRequest};
