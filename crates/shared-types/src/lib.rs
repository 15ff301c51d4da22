//! # Shared Types Crate
//!
//! Primitive identifiers used across the Signet Ledger subsystems.
//!
//! ## Design Principles
//!
//! - **Single Key Encoding**: An account is identified by its 20-byte
//!   [`Address`]. The only text form is [`format_address`]; every parser
//!   funnels through [`parse_address`] so stored keys and recovered keys
//!   always compare byte-for-byte.
//! - **No Truncation**: Keys are never shortened or sliced into display
//!   fragments for lookup purposes.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
